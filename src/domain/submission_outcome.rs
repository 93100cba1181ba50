/// What happened to an accepted submission.
///
/// Every variant is a success for the submitter: the request was received.
/// The distinction only matters to operators reading the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    AcceptedButNotDelivered(UndeliveredReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndeliveredReason {
    NoDeliveryCredential,
    DeliveryFailure,
}

impl SubmissionOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::AcceptedButNotDelivered(UndeliveredReason::NoDeliveryCredential) => {
                "accepted_not_delivered_no_credential"
            }
            Self::AcceptedButNotDelivered(UndeliveredReason::DeliveryFailure) => {
                "accepted_not_delivered_delivery_failure"
            }
        }
    }
}

impl std::fmt::Display for SubmissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub mod contact_submission;
pub mod quote_submission;
pub mod service_type;
pub mod submission_email;
pub mod submission_fields;
pub mod submission_outcome;

pub use contact_submission::ContactSubmission;
pub use quote_submission::QuoteSubmission;
pub use service_type::ServiceType;
pub use submission_email::SubmissionEmail;
pub use submission_fields::SubmissionFields;
pub use submission_outcome::{SubmissionOutcome, UndeliveredReason};

/// Why a submission was turned away. Callers only ever see the fixed message;
/// the payload is kept for the server logs.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField(&'static str),
    #[error("Invalid email format")]
    InvalidFormat(String),
}

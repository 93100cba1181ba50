//! Client side of the submission flow.
//!
//! A [`FormCollector`] mirrors a form being filled in: it owns the in-memory
//! record, refuses to send it while required fields are empty, and tracks the
//! status of the single request it issues per submission.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;

/// How long a successful quote request stays on screen before the form closes.
pub const QUOTE_DISMISS_DELAY: Duration = Duration::from_secs(2);

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A form record that can be submitted to one of the submission endpoints.
pub trait FormRecord: Serialize + Default {
    /// Path of the endpoint accepting this record.
    const ENDPOINT: &'static str;

    /// Every required field with its current value.
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    /// Delay after a successful submission before the form is dismissed.
    fn dismiss_delay() -> Option<Duration> {
        None
    }
}

#[derive(Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub message: String,
}

impl FormRecord for ContactForm {
    const ENDPOINT: &'static str = "/api/contact";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("email", self.email.as_str()),
            ("company", self.company.as_str()),
            ("message", self.message.as_str()),
        ]
    }
}

#[derive(Serialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub service_type: String,
    pub pickup_location: String,
    pub delivery_location: String,
    pub package_details: String,
    pub estimated_volume: String,
}

impl FormRecord for QuoteForm {
    const ENDPOINT: &'static str = "/api/quote";

    fn required_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("phone", self.phone.as_str()),
            ("company", self.company.as_str()),
            ("serviceType", self.service_type.as_str()),
            ("pickupLocation", self.pickup_location.as_str()),
            ("deliveryLocation", self.delivery_location.as_str()),
            ("packageDetails", self.package_details.as_str()),
            ("estimatedVolume", self.estimated_volume.as_str()),
        ]
    }

    fn dismiss_delay() -> Option<Duration> {
        Some(QUOTE_DISMISS_DELAY)
    }
}

/// `Idle -> Submitting -> Success | Error`; a dismissal brings `Success` back
/// to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Please fill in the required fields: {}", .missing.join(", "))]
pub struct IncompleteForm {
    pub missing: Vec<&'static str>,
}

pub struct FormCollector<F: FormRecord> {
    http_client: Client,
    endpoint: String,
    record: F,
    status: FormStatus,
    open: bool,
    dismiss_delay: Option<Duration>,
}

impl<F: FormRecord> FormCollector<F> {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: http_client(REQUEST_TIMEOUT),
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), F::ENDPOINT),
            record: F::default(),
            status: FormStatus::Idle,
            open: true,
            dismiss_delay: F::dismiss_delay(),
        }
    }

    /// Override how long a request may take before it counts as failed.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.http_client = http_client(timeout);
        self
    }

    /// Override how long a success stays visible before the form is dismissed.
    pub fn with_dismiss_delay(mut self, delay: Option<Duration>) -> Self {
        self.dismiss_delay = delay;
        self
    }

    pub fn record(&self) -> &F {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut F {
        &mut self.record
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.record
            .required_fields()
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    /// Send the record once.
    ///
    /// Nothing is sent while a required field is empty. Otherwise the status
    /// reflects the response: any 2xx is a success and clears the record,
    /// anything else (including a transport failure) is an error and keeps it.
    #[tracing::instrument(name = "Submitting form", skip(self), fields(endpoint = %self.endpoint))]
    pub async fn submit(&mut self) -> Result<FormStatus, IncompleteForm> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteForm { missing });
        }

        self.status = FormStatus::Submitting;
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&self.record)
            .send()
            .await;

        self.status = match response {
            Ok(response) if response.status().is_success() => FormStatus::Success,
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Form submission was rejected");
                FormStatus::Error
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Form submission failed"
                );
                FormStatus::Error
            }
        };

        if self.status == FormStatus::Success {
            self.record = F::default();
            if let Some(delay) = self.dismiss_delay {
                tokio::time::sleep(delay).await;
                self.open = false;
                self.status = FormStatus::Idle;
                return Ok(FormStatus::Success);
            }
        }
        Ok(self.status)
    }

    /// Reopen the form and clear any feedback.
    pub fn reset(&mut self) {
        self.status = FormStatus::Idle;
        self.open = true;
    }
}

fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .expect("Failed to build the HTTP client")
}

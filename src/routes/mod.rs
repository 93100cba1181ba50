pub use errors::{error_chain_fmt, parse_payload, SubmissionError};

pub mod analytics;
pub mod contact;
pub mod errors;
pub mod health_check;
pub mod quote;

#[derive(serde::Serialize)]
pub struct SubmissionAccepted {
    pub success: bool,
    pub message: &'static str,
}

impl SubmissionAccepted {
    pub fn new(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use anyhow::Context;

use crate::domain::{SubmissionFields, ValidationError};

#[derive(thiserror::Error)]
pub enum SubmissionError {
    #[error(transparent)]
    ValidationError(#[from] ValidationError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for SubmissionError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmissionError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmissionError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            SubmissionError::ValidationError(e) => e.to_string(),
            SubmissionError::UnexpectedError(_) => "Internal server error".to_string(),
        };
        HttpResponse::build(self.status_code()).json(ErrorBody { error: &message })
    }
}

/// Decode a raw request body into submitted fields. Anything that is not a
/// JSON document with fields to inspect is an unexpected failure.
pub fn parse_payload(body: &[u8]) -> Result<SubmissionFields, anyhow::Error> {
    let payload: serde_json::Value =
        serde_json::from_slice(body).context("Submission payload is not valid JSON")?;
    SubmissionFields::from_payload(payload).context("Submission payload is null")
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

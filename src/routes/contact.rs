use std::convert::TryFrom;

use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use crate::domain::contact_submission::CONTACT_SUCCESS_MESSAGE;
use crate::domain::{ContactSubmission, SubmissionOutcome};
use crate::routes::{parse_payload, SubmissionAccepted, SubmissionError};

#[tracing::instrument(
    name = "Receiving a contact form submission",
    skip(body),
    fields(submission_id = %Uuid::new_v4())
)]
pub async fn submit_contact(body: web::Bytes) -> Result<HttpResponse, SubmissionError> {
    let fields = parse_payload(&body)?;
    let submission = ContactSubmission::try_from(fields)?;
    record_contact_submission(&submission);

    tracing::info!(outcome = %SubmissionOutcome::Accepted, "Contact form submission accepted");
    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(CONTACT_SUCCESS_MESSAGE)))
}

fn record_contact_submission(submission: &ContactSubmission) {
    tracing::info!(
        first_name = %submission.first_name,
        last_name = %submission.last_name,
        email = %submission.email,
        company = %submission.company,
        contact_message = %submission.message,
        timestamp = %Utc::now().to_rfc3339(),
        "Contact form submission"
    );
}

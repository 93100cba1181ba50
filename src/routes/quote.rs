use std::convert::TryFrom;

use actix_web::{web, HttpResponse};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::quote_submission::QUOTE_SUCCESS_MESSAGE;
use crate::domain::QuoteSubmission;
use crate::notification::QuoteNotifier;
use crate::routes::{parse_payload, SubmissionAccepted, SubmissionError};

#[tracing::instrument(
    name = "Receiving a quote request",
    skip(body, notifier),
    fields(
        submission_id = %Uuid::new_v4(),
        delivery_outcome = tracing::field::Empty
    )
)]
pub async fn submit_quote(
    body: web::Bytes,
    notifier: web::Data<QuoteNotifier>,
) -> Result<HttpResponse, SubmissionError> {
    let fields = parse_payload(&body)?;
    let quote = QuoteSubmission::try_from(fields)?;
    let submitted_at = Utc::now();
    record_quote_submission(&quote, submitted_at);

    let outcome = notifier.forward(&quote, submitted_at).await;
    tracing::Span::current().record("delivery_outcome", &tracing::field::display(&outcome));

    Ok(HttpResponse::Ok().json(SubmissionAccepted::new(QUOTE_SUCCESS_MESSAGE)))
}

fn record_quote_submission(quote: &QuoteSubmission, submitted_at: DateTime<Utc>) {
    tracing::info!(
        full_name = %quote.name,
        email = %quote.email,
        phone = %quote.phone,
        company = %quote.company,
        service_type = quote.service_type.as_str(),
        service_type_display = %quote.service_type.display_name(),
        known_service_type = quote.service_type.is_known(),
        pickup_location = %quote.pickup_location,
        delivery_location = %quote.delivery_location,
        package_details = %quote.package_details,
        estimated_volume = %quote.estimated_volume,
        timestamp = %submitted_at.to_rfc3339(),
        "Quote request submission"
    );
}

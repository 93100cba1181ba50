use chrono::{DateTime, Utc};
use htmlescape::{encode_attribute, encode_minimal};

use crate::configuration::EmailClientSettings;
use crate::domain::{QuoteSubmission, SubmissionOutcome, UndeliveredReason};
use crate::email_client::EmailClient;

/// Forwards accepted quote requests to the operator inbox.
///
/// Delivery is best effort: whatever happens here, the submitter has already
/// been accepted. Without a credential the forwarder holds no client and every
/// quote is only logged.
pub struct QuoteNotifier {
    email_client: Option<EmailClient>,
    recipient: String,
}

impl QuoteNotifier {
    pub fn new(email_client: Option<EmailClient>, recipient: String) -> Self {
        Self {
            email_client,
            recipient,
        }
    }

    /// The recipient is passed to the provider as configured; a value the
    /// provider refuses surfaces as a delivery failure.
    pub fn from_settings(settings: &EmailClientSettings) -> Result<Self, reqwest::Error> {
        let email_client = settings
            .authorization_token()
            .map(|token| {
                EmailClient::new(
                    settings.base_url.clone(),
                    settings.sender_email.clone(),
                    token,
                    settings.timeout(),
                )
            })
            .transpose()?;
        Ok(Self::new(email_client, settings.recipient_email.clone()))
    }

    pub fn is_configured(&self) -> bool {
        self.email_client.is_some()
    }

    #[tracing::instrument(
        name = "Forwarding a quote request to the operator inbox",
        skip(self, quote, submitted_at),
        fields(recipient = %self.recipient)
    )]
    pub async fn forward(
        &self,
        quote: &QuoteSubmission,
        submitted_at: DateTime<Utc>,
    ) -> SubmissionOutcome {
        let email_client = match &self.email_client {
            Some(email_client) => email_client,
            None => {
                tracing::info!("No delivery credential configured, quote request logged only");
                return SubmissionOutcome::AcceptedButNotDelivered(
                    UndeliveredReason::NoDeliveryCredential,
                );
            }
        };

        let subject = format!("New Quote Request from {} - {}", quote.name, quote.company);
        let html_body = render_quote_notification(quote, submitted_at);

        match email_client
            .send_email(&self.recipient, &subject, &html_body)
            .await
        {
            Ok(()) => {
                tracing::info!("Quote request email sent");
                SubmissionOutcome::Accepted
            }
            Err(e) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to send quote request email"
                );
                SubmissionOutcome::AcceptedButNotDelivered(UndeliveredReason::DeliveryFailure)
            }
        }
    }
}

const ROW_STYLE: &str = "padding: 8px 0; border-bottom: 1px solid #e5e7eb;";
const LINK_STYLE: &str = "color: #DC2626;";
const HEADING_STYLE: &str = "color: #DC2626; margin-top: 30px;";

/// Render the operator notification for `quote`. Every submitted value is
/// HTML-escaped before it is embedded.
pub fn render_quote_notification(quote: &QuoteSubmission, submitted_at: DateTime<Utc>) -> String {
    let email = quote.email.as_ref();
    let contact_rows = [
        row("Name", &encode_minimal(&quote.name)),
        row(
            "Email",
            &link(&format!("mailto:{}", email), &encode_minimal(email)),
        ),
        row(
            "Phone",
            &link(&format!("tel:{}", quote.phone), &encode_minimal(&quote.phone)),
        ),
        row("Company", &encode_minimal(&quote.company)),
    ]
    .concat();
    let service_rows = [
        row("Service Type", &encode_minimal(&quote.service_type.display_name())),
        row("Estimated Volume", &encode_minimal(&quote.estimated_volume)),
    ]
    .concat();
    let location_rows = [
        row("Pickup Location", &encode_minimal(&quote.pickup_location)),
        row("Delivery Location", &encode_minimal(&quote.delivery_location)),
    ]
    .concat();

    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>New Quote Request</title>
  </head>
  <body style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
    <div style="background: linear-gradient(135deg, #DC2626 0%, #991B1B 100%); color: white; padding: 30px; border-radius: 8px 8px 0 0;">
      <h1 style="margin: 0; font-size: 24px;">New Quote Request</h1>
      <p style="margin: 10px 0 0 0; opacity: 0.9;">You have received a new quote request from your website</p>
    </div>
    <div style="background: #f9fafb; padding: 30px; border-radius: 0 0 8px 8px;">
      <h2 style="color: #DC2626; margin-top: 0;">Contact Information</h2>
      <table style="width: 100%; border-collapse: collapse;">{contact_rows}
      </table>
      <h2 style="{heading}">Service Details</h2>
      <table style="width: 100%; border-collapse: collapse;">{service_rows}
      </table>
      <h2 style="{heading}">Location Details</h2>
      <table style="width: 100%; border-collapse: collapse;">{location_rows}
      </table>
      <h2 style="{heading}">Package Details</h2>
      <div style="background: white; padding: 15px; border-radius: 6px; border: 1px solid #e5e7eb;">
        <p style="margin: 0; white-space: pre-wrap;">{package_details}</p>
      </div>
      <div style="margin-top: 30px; padding: 20px; background: #fef2f2; border-left: 4px solid #DC2626; border-radius: 4px;">
        <p style="margin: 0; color: #991B1B;"><strong>Response Required:</strong> Please respond to this quote request within 24 hours.</p>
      </div>
    </div>
    <div style="margin-top: 20px; padding: 20px; text-align: center; color: #6b7280; font-size: 12px;">
      <p style="margin: 0;">This email was sent from your VP Logistics website quote form</p>
      <p style="margin: 5px 0 0 0;">Submitted on {submitted_on}</p>
    </div>
  </body>
</html>
"#,
        contact_rows = contact_rows,
        service_rows = service_rows,
        location_rows = location_rows,
        heading = HEADING_STYLE,
        package_details = encode_minimal(&quote.package_details),
        submitted_on = submitted_at.format("%A, %B %-d, %Y at %-I:%M %p UTC"),
    )
}

fn row(label: &str, value: &str) -> String {
    format!(
        r#"
        <tr>
          <td style="{style}"><strong>{label}:</strong></td>
          <td style="{style}">{value}</td>
        </tr>"#,
        style = ROW_STYLE,
        label = label,
        value = value,
    )
}

fn link(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{href}" style="{style}">{text}</a>"#,
        href = encode_attribute(href),
        style = LINK_STYLE,
        text = text,
    )
}

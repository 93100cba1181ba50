use std::net::TcpListener;
use vp_logistics::configuration::get_configuration;
use vp_logistics::notification::QuoteNotifier;
use vp_logistics::startup::run;
use vp_logistics::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber(
        "vp-logistics".into(),
        "info".into(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let config = get_configuration()
        .expect("Failed to read configuration");
    let address = format!(
        "{address}:{port}",
        address = config.application.host,
        port = config.application.port
    );
    let listener = TcpListener::bind(address)?;

    let notifier = QuoteNotifier::from_settings(&config.email_client)
        .expect("Invalid email client configuration");
    if !notifier.is_configured() {
        tracing::warn!("No delivery credential configured, quote requests will be logged only");
    }

    run(listener, notifier, config.analytics)?.await
}

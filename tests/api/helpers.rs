use once_cell::sync::Lazy;
use secrecy::Secret;
use std::net::TcpListener;
use vp_logistics::configuration::{get_configuration, Settings};
use vp_logistics::notification::QuoteNotifier;
use vp_logistics::startup::run;
use vp_logistics::telemetry::{get_subscriber, init_subscriber};
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/contact", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_quote(&self, body: &serde_json::Value) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/api/quote", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_raw(&self, endpoint: &str, body: &'static str) -> reqwest::Response {
        self.api_client
            .post(&format!("{}{}", &self.address, endpoint))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// Spawn the application with a delivery credential pointing at a mock provider.
pub async fn spawn_app() -> TestApp {
    spawn_app_with(|config| {
        config.email_client.authorization_token = Some(Secret::new("re_test_token".into()));
    })
    .await
}

/// Spawn the application with no delivery credential configured.
pub async fn spawn_app_without_credential() -> TestApp {
    spawn_app_with(|config| {
        config.email_client.authorization_token = None;
    })
    .await
}

pub async fn spawn_app_with(customise: impl FnOnce(&mut Settings)) -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let mut config = get_configuration().expect("Failed to read configuration");
    config.email_client.base_url = email_server.uri();
    config.email_client.timeout_milliseconds = 500;
    customise(&mut config);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // We retrieve the port assigned to us by the OS
    let port = listener.local_addr()
        .unwrap()
        .port();

    let notifier = QuoteNotifier::from_settings(&config.email_client)
        .expect("Invalid email client configuration");
    let server = run(listener, notifier, config.analytics)
        .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        address: format!("http://127.0.0.1:{}", port),
        email_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn valid_contact_body() -> serde_json::Value {
    serde_json::json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@x.com",
        "company": "Acme",
        "message": "We ship 200 parcels a day across the metro area."
    })
}

pub fn valid_quote_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Jane Doe",
        "email": "jane@x.com",
        "phone": "555-1234",
        "company": "Acme",
        "serviceType": "last-mile",
        "pickupLocation": "A",
        "deliveryLocation": "B",
        "packageDetails": "2 boxes",
        "estimatedVolume": "50/day"
    })
}

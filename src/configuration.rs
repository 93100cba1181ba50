use std::convert::{TryFrom, TryInto};
use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use serde_aux::field_attributes::deserialize_number_from_string;

/// Environment variables recognised by the email provider tooling, mapped onto
/// the configuration keys they override.
const PROVIDER_ENVIRONMENT_OVERRIDES: [(&str, &str); 5] = [
    ("RESEND_API_KEY", "email_client.authorization_token"),
    ("RESEND_FROM_EMAIL", "email_client.sender_email"),
    ("RESEND_TO_EMAIL", "email_client.recipient_email"),
    ("UMAMI_WEBSITE_ID", "analytics.website_id"),
    ("UMAMI_SCRIPT_URL", "analytics.script_url"),
];

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
    #[serde(default)]
    pub analytics: AnalyticsSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub recipient_email: String,
    pub authorization_token: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// The delivery credential, if one is configured. An empty value counts as unset.
    pub fn authorization_token(&self) -> Option<Secret<String>> {
        self.authorization_token
            .as_ref()
            .filter(|token| !token.expose_secret().trim().is_empty())
            .cloned()
    }
}

#[derive(serde::Deserialize, Clone, Default)]
pub struct AnalyticsSettings {
    pub website_id: Option<String>,
    pub script_url: Option<String>,
}

impl AnalyticsSettings {
    /// The page-analytics script tag, only when both the site identifier and
    /// the script location are configured.
    pub fn script_tag(&self) -> Option<String> {
        let website_id = non_empty(&self.website_id)?;
        let script_url = non_empty(&self.script_url)?;
        Some(format!(
            r#"<script async src="{script_url}" data-website-id="{website_id}"></script>"#,
            script_url = htmlescape::encode_attribute(script_url),
            website_id = htmlescape::encode_attribute(website_id),
        ))
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let mut builder = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // e.g. `APP_APPLICATION__PORT=5001` sets `Settings.application.port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        );

    for (variable, key) in PROVIDER_ENVIRONMENT_OVERRIDES {
        if let Ok(value) = std::env::var(variable) {
            builder = builder.set_override(key, value)?;
        }
    }

    builder.build()?.try_deserialize::<Settings>()
}

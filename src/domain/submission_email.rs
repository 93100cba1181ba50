use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::ValidationError;

// Coarse syntactic check: `local@domain.tld`, no whitespace, a single `@`.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEmail(String);

impl SubmissionEmail {
    pub fn parse(s: String) -> Result<SubmissionEmail, ValidationError> {
        if EMAIL_PATTERN.is_match(&s) {
            Ok(Self(s))
        } else {
            Err(ValidationError::InvalidFormat(s))
        }
    }
}

impl AsRef<str> for SubmissionEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubmissionEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

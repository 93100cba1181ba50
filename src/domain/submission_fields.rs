use serde_json::{Map, Value};

use crate::domain::ValidationError;

/// The raw named fields of a submitted form, before any validation.
#[derive(Debug, Default)]
pub struct SubmissionFields(Map<String, Value>);

impl SubmissionFields {
    /// Accepts a decoded JSON payload.
    ///
    /// Objects yield their fields. Any other non-null value carries no fields,
    /// so every required field will be reported missing. `None` is returned for
    /// `null`, which has no fields to look into at all.
    pub fn from_payload(payload: Value) -> Option<SubmissionFields> {
        match payload {
            Value::Object(fields) => Some(Self(fields)),
            Value::Null => None,
            _ => Some(Self::default()),
        }
    }

    /// The value of a required field. Absent, empty and non-string values are
    /// all missing.
    pub fn require(&self, name: &'static str) -> Result<String, ValidationError> {
        match self.0.get(name) {
            Some(Value::String(value)) if !value.is_empty() => Ok(value.clone()),
            _ => Err(ValidationError::MissingField(name)),
        }
    }
}

use std::convert::TryFrom;

use crate::domain::{SubmissionEmail, SubmissionFields, ValidationError};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message. We'll get back to you within 24 hours.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: SubmissionEmail,
    pub company: String,
    pub message: String,
}

impl TryFrom<SubmissionFields> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(fields: SubmissionFields) -> Result<Self, Self::Error> {
        let first_name = fields.require("firstName")?;
        let last_name = fields.require("lastName")?;
        let email = fields.require("email")?;
        let company = fields.require("company")?;
        let message = fields.require("message")?;

        Ok(Self {
            first_name,
            last_name,
            email: SubmissionEmail::parse(email)?,
            company,
            message,
        })
    }
}

use std::convert::TryFrom;

use crate::domain::{ServiceType, SubmissionEmail, SubmissionFields, ValidationError};

pub const QUOTE_SUCCESS_MESSAGE: &str =
    "Thank you for your quote request. We'll get back to you within 24 hours.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteSubmission {
    pub name: String,
    pub email: SubmissionEmail,
    pub phone: String,
    pub company: String,
    pub service_type: ServiceType,
    pub pickup_location: String,
    pub delivery_location: String,
    pub package_details: String,
    pub estimated_volume: String,
}

impl TryFrom<SubmissionFields> for QuoteSubmission {
    type Error = ValidationError;

    fn try_from(fields: SubmissionFields) -> Result<Self, Self::Error> {
        let name = fields.require("name")?;
        let email = fields.require("email")?;
        let phone = fields.require("phone")?;
        let company = fields.require("company")?;
        let service_type = fields.require("serviceType")?;
        let pickup_location = fields.require("pickupLocation")?;
        let delivery_location = fields.require("deliveryLocation")?;
        let package_details = fields.require("packageDetails")?;
        let estimated_volume = fields.require("estimatedVolume")?;

        let email = SubmissionEmail::parse(email)?;

        Ok(Self {
            name,
            email,
            phone,
            company,
            service_type: ServiceType::new(service_type),
            pickup_location,
            delivery_location,
            package_details,
            estimated_volume,
        })
    }
}

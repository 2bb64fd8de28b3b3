//! Contact Form

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::validation::{validate_fields, Rule, ValidationErrors};

pub const CONFIRMATION: &str = "Thanks for getting in touch, we will get back to you as soon as possible.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate_fields(&[
            ("first_name", self.first_name.as_str(), &[Rule::Required("Please enter your first name")][..]),
            ("last_name", self.last_name.as_str(), &[Rule::Required("Please enter your last name")][..]),
            (
                "email",
                self.email.as_str(),
                &[
                    Rule::Email("Email address is not valid"),
                    Rule::Required("Please enter your email address"),
                ][..],
            ),
            ("mobile_number", self.mobile_number.as_str(), &[Rule::Required("Please enter your mobile number")][..]),
            ("message", self.message.as_str(), &[Rule::Required("Please enter a message")][..]),
        ])
    }

    /// Validate and "send"; returns the confirmation to show
    pub fn submit(&mut self) -> Result<&'static str, ValidationErrors> {
        self.validate()?;
        info!(email = %self.email, "contact message sent");
        *self = Self::default();
        Ok(CONFIRMATION)
    }
}

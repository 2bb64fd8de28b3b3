//! Form Validation
//!
//! Declarative field rules shared by the storefront forms.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern")
});

/// A single validation rule with the message shown when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must contain non-whitespace text
    Required(&'static str),
    /// Value, when present, must look like an email address
    Email(&'static str),
    /// Checkbox must be ticked; see [`checkbox_value`]
    Checked(&'static str),
}

/// Field value for a checkbox, as the [`Rule::Checked`] rule reads it
pub fn checkbox_value(checked: bool) -> &'static str {
    if checked { "true" } else { "" }
}

impl Rule {
    fn check(&self, value: &str) -> Option<&'static str> {
        match self {
            Rule::Required(message) if value.trim().is_empty() => Some(*message),
            Rule::Email(message) if !value.trim().is_empty() && !EMAIL.is_match(value.trim()) => {
                Some(*message)
            }
            Rule::Checked(message) if value != checkbox_value(true) => Some(*message),
            _ => None,
        }
    }
}

/// A failed rule for a named field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First message for a field, for inline display
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError { field: field.into(), message: message.into() });
    }

    /// `Ok(())` when nothing failed
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.0.iter().map(|e| e.message.as_str()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Run every rule of every field; only the first failing rule per field is reported.
pub fn validate_fields(fields: &[(&str, &str, &[Rule])]) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for (name, value, rules) in fields {
        if let Some(message) = rules.iter().find_map(|rule| rule.check(value)) {
            errors.push(*name, message);
        }
    }
    errors.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMAIL_RULES: &[Rule] = &[
        Rule::Email("Email address is not valid"),
        Rule::Required("Please enter your email address"),
    ];

    #[test]
    fn test_required_and_email() {
        let errors = validate_fields(&[("email", "", EMAIL_RULES)]).unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Please enter your email address"));

        let errors = validate_fields(&[("email", "not-an-email", EMAIL_RULES)]).unwrap_err();
        assert_eq!(errors.message_for("email"), Some("Email address is not valid"));

        assert!(validate_fields(&[("email", "coach@club.org", EMAIL_RULES)]).is_ok());
    }

    #[test]
    fn test_collects_all_fields() {
        let required = &[Rule::Required("missing")][..];
        let errors = validate_fields(&[("a", " ", required), ("b", "ok", required), ("c", "", required)])
            .unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.to_string(), "missing; missing");
    }

    #[test]
    fn test_checked_rule() {
        let terms = &[Rule::Checked("Please tick the box")][..];
        let errors = validate_fields(&[("terms", checkbox_value(false), terms)]).unwrap_err();
        assert_eq!(errors.message_for("terms"), Some("Please tick the box"));
        assert!(validate_fields(&[("terms", checkbox_value(true), terms)]).is_ok());
    }
}

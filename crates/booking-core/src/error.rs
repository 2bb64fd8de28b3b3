//! Error Types
//!
//! Errors that can surface from the booking rules. Donation input never
//! produces one: malformed amounts degrade to zero instead.

use thiserror::Error;

use crate::validation::ValidationErrors;

/// Common result type for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

#[derive(Debug, Error)]
pub enum BookingError {
    #[error("invalid storefront configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("unknown checkout step {0}")]
    UnknownStep(usize),

    #[error("storage error: {0}")]
    Storage(String),
}

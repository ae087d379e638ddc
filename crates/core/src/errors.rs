//! Core error types for the InvestHub data layer.
//!
//! This module defines transport-agnostic error types. Errors coming from the
//! HTTP collaborator are converted into these types at the fetch boundary.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the data/analytics core.
///
/// Calculation, validation, and reconciliation are total and never surface
/// through this type; only the fetch orchestration, the event transport, and
/// the polling fallback can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// A collection fetch failed. The cached items for that collection are
    /// left untouched; the message is also recorded on the collection state.
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Best-effort cross-view transport failed to deliver an event frame.
    #[error("Event transport failed: {0}")]
    Transport(String),

    /// A scheduled refresh callback failed.
    #[error("Refresh failed: {0}")]
    Refresh(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for data arriving at the fetch boundary.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

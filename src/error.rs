//! Custom error types for Horizon
//!
//! Every fallible operation in the crate returns [`HorizonResult`]. Input
//! problems (bad amounts, dates, ids, form fields) are surfaced to the caller
//! immediately; nothing is recovered locally.

use thiserror::Error;

/// The main error type for Horizon operations
#[derive(Error, Debug)]
pub enum HorizonError {
    /// Amount is NaN or infinite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Date could not be parsed
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Encoded id could not be decoded
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Form or record validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV reading errors
    #[error("CSV error: {0}")]
    Csv(String),
}

impl HorizonError {
    /// Create an "invalid amount" error for a non-finite value
    pub fn invalid_amount(amount: f64) -> Self {
        Self::InvalidAmount(format!("{} is not a finite number", amount))
    }

    /// Create an "invalid date" error for an unparsable input
    pub fn invalid_date(input: impl Into<String>) -> Self {
        Self::InvalidDate(input.into())
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount(_))
    }

    /// Check if this is an invalid date error
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, Self::InvalidDate(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for HorizonError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HorizonError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for HorizonError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for Horizon operations
pub type HorizonResult<T> = Result<T, HorizonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HorizonError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = HorizonError::invalid_amount(f64::NAN);
        assert_eq!(err.to_string(), "Invalid amount: NaN is not a finite number");
        assert!(err.is_invalid_amount());
        assert!(!err.is_invalid_date());
    }

    #[test]
    fn test_invalid_date_error() {
        let err = HorizonError::invalid_date("yesterday-ish");
        assert_eq!(err.to_string(), "Invalid date: yesterday-ish");
        assert!(err.is_invalid_date());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let horizon_err: HorizonError = io_err.into();
        assert!(matches!(horizon_err, HorizonError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let horizon_err: HorizonError = json_err.into();
        assert!(matches!(horizon_err, HorizonError::Json(_)));
    }
}

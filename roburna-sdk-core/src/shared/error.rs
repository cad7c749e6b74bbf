//! Error handling for the SDK core
//!
//! This module defines the error types used throughout the SDK core.

use thiserror::Error;

/// SDK error type
///
/// Both variants signal contract violations by the caller: they are raised
/// synchronously and are not retryable.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Lookup error: {0}")]
    Lookup(String),
}

impl SdkError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a lookup error
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::Lookup(message.into())
    }
}

// Standard library error conversions
impl From<std::num::TryFromIntError> for SdkError {
    fn from(err: std::num::TryFromIntError) -> Self {
        Self::validation(format!("Integer out of range: {}", err))
    }
}

impl From<std::num::ParseIntError> for SdkError {
    fn from(err: std::num::ParseIntError) -> Self {
        Self::validation(format!("Integer parse error: {}", err))
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        Self::validation(format!("JSON error: {}", err))
    }
}

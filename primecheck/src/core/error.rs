//! Classified validation failures.

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a rejected candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Not a number at all (wrong type, or NaN).
    InvalidType,
    /// A number outside the accepted domain (non-finite, fractional, or below one).
    InvalidRange,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidType => "invalid_type",
            ErrorKind::InvalidRange => "invalid_range",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate rejected by validation, one variant per rule.
///
/// Match on [`PrimeError::kind`] rather than on message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrimeError {
    #[error("Expected a number, but received {type_name}: {received}")]
    NotNumeric {
        type_name: &'static str,
        received: String,
    },
    #[error("Input cannot be NaN")]
    NotANumber,
    #[error("Input must be a finite number")]
    NonFinite { received: String },
    #[error("Input must be an integer, but received: {received}")]
    Fractional { received: String },
    #[error("Input must be a positive integer, but received: {received}")]
    NonPositive { received: String },
}

impl PrimeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PrimeError::NotNumeric { .. } | PrimeError::NotANumber => ErrorKind::InvalidType,
            PrimeError::NonFinite { .. }
            | PrimeError::Fractional { .. }
            | PrimeError::NonPositive { .. } => ErrorKind::InvalidRange,
        }
    }
}

//! Domain error model.

use thiserror::Error;

/// Result type used across the value object crates.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Each value crate has its own narrow error enum (`MoneyError`, `EmailError`, ...)
/// that converts into this one, so callers mixing several value types can `?` into a
/// single error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Two monetary amounts in different currencies were combined.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// A textual value did not match its required format.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn currency_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::CurrencyMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn invalid_format(msg: impl Into<String>) -> Self {
        Self::InvalidFormat(msg.into())
    }
}

use thiserror::Error;

use valuekit_core::DomainError;

use crate::currency::Currency;

/// Failures of money operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Two amounts in different currencies were combined.
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// A currency code outside the supported set.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

impl From<MoneyError> for DomainError {
    fn from(value: MoneyError) -> Self {
        match value {
            MoneyError::CurrencyMismatch { expected, found } => {
                DomainError::currency_mismatch(expected.code(), found.code())
            }
            MoneyError::UnknownCurrency(code) => {
                DomainError::validation(format!("unknown currency code: {code}"))
            }
        }
    }
}

use core::str::FromStr;

use crate::error::MoneyError;

/// Supported currencies (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    Usd,
    Eur,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 3] = [Currency::Usd, Currency::Eur, Currency::Inr];

    /// ISO 4217 code, e.g. `"USD"`.
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Inr => "INR",
        }
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = MoneyError;

    /// Parses an exact, upper-case code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::ALL
            .into_iter()
            .find(|currency| currency.code() == s)
            .ok_or_else(|| MoneyError::UnknownCurrency(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_parse_back() {
        for currency in Currency::ALL {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        let err = "GBP".parse::<Currency>().unwrap_err();
        assert_eq!(err, MoneyError::UnknownCurrency("GBP".to_string()));
    }

    #[test]
    fn unknown_code_converts_to_validation_error() {
        let err: valuekit_core::DomainError = "GBP".parse::<Currency>().unwrap_err().into();
        assert_eq!(
            err,
            valuekit_core::DomainError::validation("unknown currency code: GBP")
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("usd".parse::<Currency>().is_err());
    }

    #[test]
    fn display_is_the_code() {
        assert_eq!(Currency::Inr.to_string(), "INR");
    }
}

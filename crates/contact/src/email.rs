//! Email address value object with validation.
//!
//! ```
//! use valuekit_contact::EmailAddress;
//!
//! let email = EmailAddress::new("john@example.com").unwrap();
//! assert_eq!(email.value(), "john@example.com");
//!
//! assert!(EmailAddress::new("not-an-email").is_err());
//! ```

use core::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use valuekit_core::{DomainError, Frozen, ValueKind, ValueObject};

/// One segment: anything except `@` and ECMAScript whitespace (`WhiteSpace` plus
/// `LineTerminator`). This differs from the regex crate's `\s` on U+0085 and U+FEFF.
macro_rules! segment {
    () => {
        r"[^@\t\n\x0B\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+"
    };
}

/// Non-empty local part, `@`, a domain with at least one dot and a non-empty last
/// segment. No part may contain whitespace or a second `@`.
const EMAIL_PATTERN: &str = concat!("^", segment!(), "@", segment!(), r"\.", segment!(), "$");

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Failures of email construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailError {
    #[error("invalid email format: {0:?}")]
    InvalidFormat(String),
}

impl From<EmailError> for DomainError {
    fn from(value: EmailError) -> Self {
        match value {
            EmailError::InvalidFormat(input) => DomainError::invalid_format(input),
        }
    }
}

/// Payload of an [`EmailAddress`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailProps {
    pub value: String,
}

/// A syntactically valid email address.
///
/// The string is kept verbatim: no trimming, no case folding. Equality is therefore
/// case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress {
    props: Frozen<EmailProps>,
}

impl EmailAddress {
    /// Validate and wrap `value`.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::InvalidFormat`] if `value` is not email-shaped.
    pub fn new(value: impl Into<String>) -> Result<Self, EmailError> {
        let value = value.into();

        if !EMAIL_REGEX.is_match(&value) {
            tracing::debug!(input = %value, "rejected malformed email address");
            return Err(EmailError::InvalidFormat(value));
        }

        Ok(Self {
            props: Frozen::new(EmailProps { value }),
        })
    }

    pub fn value(&self) -> &str {
        &self.props.value
    }

    /// Everything before the `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    /// Everything after the `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    fn split(&self) -> (&str, &str) {
        // Validated input holds exactly one '@'.
        self.value().split_once('@').unwrap_or((self.value(), ""))
    }
}

impl ValueObject for EmailAddress {
    type Props = EmailProps;
    const KIND: ValueKind = ValueKind::new("email_address");

    fn props(&self) -> &EmailProps {
        &self.props
    }
}

impl core::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for EmailAddress {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for EmailAddress {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

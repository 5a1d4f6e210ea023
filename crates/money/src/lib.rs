//! Money value objects (currency-tagged amounts).
//!
//! Pure domain logic only: no IO, no exchange rates, no persistence concerns.

pub mod currency;
pub mod error;
pub mod money;

pub use currency::Currency;
pub use error::MoneyError;
pub use money::{Money, MoneyProps};

use valuekit_contact::EmailAddress;
use valuekit_core::{DomainError, DomainResult, ValueObject};
use valuekit_distance::{Kilometers, Miles};
use valuekit_money::{Currency, Money};

/// Observations collected while exercising each value type.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkthrough {
    pub same_amount_equal: bool,
    pub different_amount_equal: bool,
    pub money_display: String,
    pub total_display: String,
    pub rejected_addition: Option<DomainError>,
    pub same_address_equal: bool,
    pub different_address_equal: bool,
    pub converted_kilometers: String,
    pub converted_miles: String,
}

/// Build a handful of value objects, compare and combine them.
///
/// Fails only if one of the hard-coded inputs is itself invalid.
pub fn run() -> DomainResult<Walkthrough> {
    let m1 = Money::new(100.0, Currency::Usd);
    let m2 = Money::new(100.0, Currency::Usd);
    let m3 = Money::new(300.0, Currency::Usd);
    let total = m1.add(&m3)?;
    let rejected_addition = m1
        .add(&Money::new(100.0, Currency::Eur))
        .err()
        .map(DomainError::from);

    let email1 = EmailAddress::new("john@example.com")?;
    let email2 = EmailAddress::new("john@example.com")?;
    let email3 = EmailAddress::new("jane@example.com")?;

    let miles = Miles::new(5.0);
    let kilometers = Kilometers::new(8.0);

    Ok(Walkthrough {
        same_amount_equal: m1.equals(Some(&m2)),
        different_amount_equal: m1.equals(Some(&m3)),
        money_display: m1.to_string(),
        total_display: total.to_string(),
        rejected_addition,
        same_address_equal: email1.equals(Some(&email2)),
        different_address_equal: email1.equals(Some(&email3)),
        converted_kilometers: miles.to_kilometers().to_string(),
        converted_miles: kilometers.to_miles().to_string(),
    })
}

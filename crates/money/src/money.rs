use valuekit_core::{same_number, Frozen, ValueKind, ValueObject};

use crate::currency::Currency;
use crate::error::MoneyError;

/// Payload of a [`Money`] value.
#[derive(Debug, Clone, Copy)]
pub struct MoneyProps {
    pub amount: f64,
    pub currency: Currency,
}

impl PartialEq for MoneyProps {
    fn eq(&self, other: &Self) -> bool {
        self.currency == other.currency && same_number(self.amount, other.amount)
    }
}

/// A currency-tagged amount.
///
/// Amounts are plain `f64` with no rounding rules; negative, zero and non-finite amounts
/// are accepted as given, and a `NaN` amount equals itself. Combining amounts requires a
/// shared currency.
///
/// `Display` uses Rust's default `f64` formatting: no exponent form, and non-finite
/// amounts render as `inf`, `-inf` and `NaN`.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    props: Frozen<MoneyProps>,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self::from_props(MoneyProps { amount, currency })
    }

    pub fn from_props(props: MoneyProps) -> Self {
        Self {
            props: Frozen::new(props),
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    pub fn amount(&self) -> f64 {
        self.props.amount
    }

    pub fn currency(&self) -> Currency {
        self.props.currency
    }

    /// Sum of both amounts as a new value. Neither operand changes.
    pub fn add(&self, other: &Money) -> Result<Money, MoneyError> {
        if other.currency() != self.currency() {
            tracing::debug!(
                expected = %self.currency(),
                found = %other.currency(),
                "rejected addition of mismatched currencies"
            );
            return Err(MoneyError::CurrencyMismatch {
                expected: self.currency(),
                found: other.currency(),
            });
        }

        Ok(Money::new(self.amount() + other.amount(), self.currency()))
    }

    /// Fold `amounts` into a single value, starting from zero in `currency`.
    ///
    /// Stops at the first amount in another currency.
    pub fn sum<'a, I>(currency: Currency, amounts: I) -> Result<Money, MoneyError>
    where
        I: IntoIterator<Item = &'a Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::zero(currency), |total, next| total.add(next))
    }
}

impl ValueObject for Money {
    type Props = MoneyProps;
    const KIND: ValueKind = ValueKind::new("money");

    fn props(&self) -> &MoneyProps {
        &self.props
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount(), self.currency())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn currency_strategy() -> impl Strategy<Value = Currency> {
        prop::sample::select(Currency::ALL.to_vec())
    }

    #[test]
    fn equal_amount_and_currency_are_equal() {
        let m1 = Money::new(100.0, Currency::Usd);
        let m2 = Money::new(100.0, Currency::Usd);
        let m3 = Money::new(300.0, Currency::Usd);

        assert!(m1.equals(Some(&m2)));
        assert!(!m1.equals(Some(&m3)));
        assert_eq!(m1, m2);
        assert_ne!(m1, m3);
    }

    #[test]
    fn same_amount_in_other_currency_is_unequal() {
        let usd = Money::new(100.0, Currency::Usd);
        let eur = Money::new(100.0, Currency::Eur);
        assert!(!usd.equals(Some(&eur)));
    }

    #[test]
    fn add_sums_amounts_in_same_currency() {
        let a = Money::new(100.0, Currency::Usd);
        let b = Money::new(50.0, Currency::Usd);

        let total = a.add(&b).unwrap();

        assert_eq!(total, Money::new(150.0, Currency::Usd));
        assert_eq!(a, Money::new(100.0, Currency::Usd));
        assert_eq!(b, Money::new(50.0, Currency::Usd));
    }

    #[test]
    fn add_rejects_mismatched_currency() {
        let usd = Money::new(100.0, Currency::Usd);
        let eur = Money::new(100.0, Currency::Eur);

        let err = usd.add(&eur).unwrap_err();
        assert_eq!(
            err,
            MoneyError::CurrencyMismatch {
                expected: Currency::Usd,
                found: Currency::Eur,
            }
        );
    }

    #[test]
    fn mismatch_converts_to_domain_error() {
        let err: valuekit_core::DomainError = Money::new(1.0, Currency::Inr)
            .add(&Money::new(1.0, Currency::Usd))
            .unwrap_err()
            .into();
        assert_eq!(err, valuekit_core::DomainError::currency_mismatch("INR", "USD"));
    }

    #[test]
    fn display_uses_default_number_formatting() {
        assert_eq!(Money::new(100.0, Currency::Usd).to_string(), "100 USD");
        assert_eq!(Money::new(12.5, Currency::Eur).to_string(), "12.5 EUR");
        assert_eq!(Money::new(-3.0, Currency::Inr).to_string(), "-3 INR");
    }

    #[test]
    fn non_positive_amounts_are_accepted() {
        assert_eq!(Money::new(0.0, Currency::Usd).amount(), 0.0);
        assert_eq!(Money::new(-10.0, Currency::Usd).amount(), -10.0);
    }

    #[test]
    fn non_finite_amounts_equal_themselves() {
        let nan = Money::new(f64::NAN, Currency::Usd);
        assert!(nan.equals(Some(&nan)));
        assert!(nan.equals(Some(&nan.clone())));
        assert_eq!(nan, Money::new(f64::NAN, Currency::Usd));
        assert!(!nan.equals(Some(&Money::new(f64::NAN, Currency::Eur))));
        assert!(!nan.equals(Some(&Money::new(0.0, Currency::Usd))));

        let inf = Money::new(f64::INFINITY, Currency::Eur);
        assert!(inf.equals(Some(&Money::new(f64::INFINITY, Currency::Eur))));
        assert!(!inf.equals(Some(&Money::new(f64::NEG_INFINITY, Currency::Eur))));
    }

    #[test]
    fn signed_zeros_are_equal() {
        assert_eq!(Money::new(0.0, Currency::Inr), Money::new(-0.0, Currency::Inr));
    }

    #[test]
    fn display_of_extreme_amounts() {
        assert_eq!(Money::new(f64::INFINITY, Currency::Usd).to_string(), "inf USD");
        assert_eq!(Money::new(f64::NEG_INFINITY, Currency::Usd).to_string(), "-inf USD");
        assert_eq!(Money::new(f64::NAN, Currency::Usd).to_string(), "NaN USD");
        assert_eq!(
            Money::new(1e21, Currency::Usd).to_string(),
            "1000000000000000000000 USD"
        );
    }

    #[test]
    fn sum_folds_same_currency() {
        let amounts = [
            Money::new(10.0, Currency::Eur),
            Money::new(20.0, Currency::Eur),
            Money::new(12.0, Currency::Eur),
        ];
        assert_eq!(
            Money::sum(Currency::Eur, &amounts).unwrap(),
            Money::new(42.0, Currency::Eur)
        );
        assert_eq!(
            Money::sum(Currency::Eur, &Vec::<Money>::new()).unwrap(),
            Money::zero(Currency::Eur)
        );
    }

    #[test]
    fn sum_stops_on_foreign_currency() {
        let amounts = [Money::new(10.0, Currency::Eur), Money::new(5.0, Currency::Usd)];
        assert!(matches!(
            Money::sum(Currency::Eur, &amounts),
            Err(MoneyError::CurrencyMismatch {
                expected: Currency::Eur,
                found: Currency::Usd,
            })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: props read back exactly as supplied.
        #[test]
        fn props_round_trip(amount in -1.0e12f64..1.0e12f64, currency in currency_strategy()) {
            let props = MoneyProps { amount, currency };
            let money = Money::from_props(props);
            prop_assert_eq!(money.props(), &props);
            prop_assert_eq!(money.amount(), money.amount());
        }

        /// Property: equality holds iff amount and currency both match.
        #[test]
        fn equality_iff_amount_and_currency_match(
            a in -1000i32..1000i32,
            b in -1000i32..1000i32,
            ca in currency_strategy(),
            cb in currency_strategy()
        ) {
            let left = Money::new(f64::from(a), ca);
            let right = Money::new(f64::from(b), cb);
            prop_assert_eq!(left.equals(Some(&right)), a == b && ca == cb);
        }

        /// Property: same-currency addition sums and leaves both operands untouched.
        #[test]
        fn add_sums_without_mutating(
            a in -1.0e9f64..1.0e9f64,
            b in -1.0e9f64..1.0e9f64,
            currency in currency_strategy()
        ) {
            let left = Money::new(a, currency);
            let right = Money::new(b, currency);

            let total = left.add(&right).unwrap();

            prop_assert_eq!(total.amount(), a + b);
            prop_assert_eq!(total.currency(), currency);
            prop_assert_eq!(left.amount(), a);
            prop_assert_eq!(right.amount(), b);
        }

        /// Property: differing currencies never add.
        #[test]
        fn add_fails_across_currencies(
            a in -1.0e9f64..1.0e9f64,
            b in -1.0e9f64..1.0e9f64,
            ca in currency_strategy(),
            cb in currency_strategy()
        ) {
            prop_assume!(ca != cb);
            let result = Money::new(a, ca).add(&Money::new(b, cb));
            let is_mismatch = matches!(result, Err(MoneyError::CurrencyMismatch { .. }));
            prop_assert!(is_mismatch);
        }
    }
}

//! Kilometers and miles as distinct value objects.
//!
//! Both carry the same payload shape; the kind tag keeps them apart, so a bare number
//! can never be mistaken for the other unit.

use valuekit_core::{same_number, Frozen, ValueKind, ValueObject};

pub const KILOMETERS_PER_MILE: f64 = 1.60934;

/// Payload shared by every distance unit.
#[derive(Debug, Clone, Copy)]
pub struct DistanceProps {
    pub value: f64,
}

impl PartialEq for DistanceProps {
    fn eq(&self, other: &Self) -> bool {
        same_number(self.value, other.value)
    }
}

/// Distance in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct Kilometers {
    props: Frozen<DistanceProps>,
}

/// Distance in statute miles.
#[derive(Debug, Clone, PartialEq)]
pub struct Miles {
    props: Frozen<DistanceProps>,
}

macro_rules! impl_distance_unit {
    ($t:ty, $kind:literal, $suffix:literal) => {
        impl $t {
            pub fn new(value: f64) -> Self {
                Self {
                    props: Frozen::new(DistanceProps { value }),
                }
            }

            pub fn value(&self) -> f64 {
                self.props.value
            }
        }

        impl ValueObject for $t {
            type Props = DistanceProps;
            const KIND: ValueKind = ValueKind::new($kind);

            fn props(&self) -> &DistanceProps {
                &self.props
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{} {}", self.value(), $suffix)
            }
        }
    };
}

impl_distance_unit!(Kilometers, "kilometers", "km");
impl_distance_unit!(Miles, "miles", "mi");

impl Kilometers {
    pub fn to_miles(&self) -> Miles {
        Miles::new(self.value() / KILOMETERS_PER_MILE)
    }
}

impl Miles {
    pub fn to_kilometers(&self) -> Kilometers {
        Kilometers::new(self.value() * KILOMETERS_PER_MILE)
    }
}

impl From<&Miles> for Kilometers {
    fn from(value: &Miles) -> Self {
        value.to_kilometers()
    }
}

impl From<&Kilometers> for Miles {
    fn from(value: &Kilometers) -> Self {
        value.to_miles()
    }
}

//! Distance value objects with unit conversion.

pub mod distance;

pub use distance::{DistanceProps, Kilometers, Miles, KILOMETERS_PER_MILE};

//! `valuekit-core` — value object building blocks.
//!
//! This crate contains **pure domain** primitives: the value object base abstraction and
//! the shared domain error. No IO, no persistence.

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::{same_number, AnyValueObject, Frozen, ValueKind, ValueObject};

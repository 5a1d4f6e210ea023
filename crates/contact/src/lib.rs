//! Contact value objects (validated email addresses).

pub mod email;

pub use email::{EmailAddress, EmailError, EmailProps};

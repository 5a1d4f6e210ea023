//! Usage walkthrough for the value object crates.

pub mod walkthrough;

pub use walkthrough::{run, Walkthrough};

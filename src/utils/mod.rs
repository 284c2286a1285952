//! Utility modules for DOM access and async helpers.
//!
//! Provides:
//! - [`dom`] - Window, document and viewport access
//! - [`race_with_deadline`] - Racing a future against a deadline

pub mod dom;
mod race;

pub use race::{race_with_deadline, RaceResult};

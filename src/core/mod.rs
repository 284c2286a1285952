//! Core logic for the site.
//!
//! This module provides:
//! - [`animation`] - Smooth scroll and scroll-triggered animation orchestration
//! - [`contact`] - Contact form submission and message delivery
//! - [`error`] - Error types

pub mod animation;
pub mod contact;
pub mod error;

pub use animation::Orchestrator;
pub use contact::{ContactFormController, Delivery};

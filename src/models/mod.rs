//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Section`], [`Navigation`] - Section navigation and the mobile menu
//! - [`ContactForm`], [`Notice`] - Contact form state
//! - [`ContentRegistry`] - Services, solutions, clients, partners and about panels

mod contact;
mod content;
mod navigation;

pub use contact::{ContactForm, ContactMessage, FormField, Notice, NoticeKind};
pub use content::{Accent, Client, ContentRegistry, IconName};
pub use navigation::{NavAction, Navigation, PointerTarget, Section, ViewportClass};

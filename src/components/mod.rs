//! UI components built with Leptos.
//!
//! - [`Page`] - Renders the active section and reports its animation regions
//! - [`Navbar`] - Section links, "Get a Quote" and the mobile drawer
//! - [`sections`] - One view per section
//! - [`contact_form`] - Contact form and submission notices
//! - [`Footer`] - Page footer
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod contact_form;
pub mod footer;
pub mod icons;
pub mod nav;
pub mod page;
pub mod sections;

pub use contact_form::NoticeToast;
pub use footer::Footer;
pub use nav::Navbar;
pub use page::Page;

//! Section views, one per navigation entry.
//!
//! Repeated cards carry `data-card-group` / `data-card-index` attributes so
//! the orchestrator can address each one; group names live in [`groups`].

mod about;
mod carousel;
mod clients;
mod contact;
mod home;
mod services;
mod solutions;

use leptos::prelude::*;

use crate::models::Accent;

pub use about::About;
pub use clients::ClientsAndPartners;
pub use contact::{CONTACT_DETAIL_COUNT, Contact};
pub use home::{GET_IN_TOUCH, Home, TRUSTED_BY};
pub use services::Services;
pub use solutions::Solutions;

stylance::import_crate_style!(css, "src/components/sections/sections.module.css");

/// Card group names.
pub mod groups {
    pub const PANEL: &str = "panel";
    pub const SERVICE: &str = "service";
    pub const SOLUTION: &str = "solution";
    pub const CLIENT: &str = "client";
    pub const PARTNER: &str = "partner";
    pub const DETAIL: &str = "detail";
}

/// Card class with its accent modifier.
fn card_class(accent: Accent) -> String {
    let modifier = match accent {
        Accent::Red => css::accentRed,
        Accent::Blue => css::accentBlue,
    };
    format!("{} {}", css::card, modifier)
}

/// Section title block.
#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <header class=css::heading>
            <h2 class=css::title>{title}</h2>
            <span class=css::rule></span>
            {subtitle.map(|text| view! { <p class=css::subtitle>{text}</p> })}
        </header>
    }
}

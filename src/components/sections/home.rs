//! Home page: hero, client logo carousel and a contact block.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::carousel::LogoCarousel;
use super::{SectionHeading, css};
use crate::app::AppContext;
use crate::components::contact_form::ContactForm;
use crate::components::icons as ic;
use crate::config::{APP_DESCRIPTION, APP_NAME, APP_TAGLINE, HERO_VIDEOS, contact};
use crate::core::animation::binding::hero_ids;
use crate::models::Section;

stylance::import_crate_style!(home_css, "src/components/sections/home.module.css");

/// Anchor of the logo carousel block.
pub const TRUSTED_BY: &str = "trusted-by";

/// Anchor of the contact block.
pub const GET_IN_TOUCH: &str = "get-in-touch";

#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let clients = ctx.content.with_value(|content| content.clients.clone());

    view! {
        <section id=Section::Home.anchor() class=home_css::hero>
            <video
                class=home_css::video
                autoplay=true
                playsinline=true
                prop:muted=true
                prop:loop=true
            >
                {HERO_VIDEOS
                    .iter()
                    .map(|src| view! { <source src=*src type="video/mp4" /> })
                    .collect_view()}
            </video>
            <div class=home_css::overlay></div>

            <div class=home_css::content>
                <h1 id=hero_ids::TITLE class=home_css::title>{APP_NAME}</h1>
                <p id=hero_ids::SUBTITLE class=home_css::tagline>{APP_TAGLINE}</p>
                <p id=hero_ids::DESCRIPTION class=home_css::description>{APP_DESCRIPTION}</p>
                <a
                    id=hero_ids::CTA
                    class=home_css::cta
                    href=format!("tel:{}", contact::PHONE)
                >
                    "Let's Connect"
                    <Icon icon=ic::ARROW_RIGHT />
                </a>
            </div>

            <div class=home_css::scrollHint aria-hidden="true">
                <Icon icon=ic::CHEVRON_DOWN />
            </div>
        </section>

        <section id=TRUSTED_BY class=css::section>
            <SectionHeading title="Trusted by Industry Leaders" />
            <LogoCarousel clients=clients />
        </section>

        <section id=GET_IN_TOUCH class=css::section>
            <SectionHeading
                title="Get In Touch"
                subtitle="Ready to transform your business? Let's talk."
            />
            <div class=home_css::touch>
                <ul class=home_css::details>
                    <li>
                        <Icon icon=ic::LOCATION />
                        <span>{contact::ADDRESS}</span>
                    </li>
                    <li>
                        <Icon icon=ic::PHONE />
                        <a href=format!("tel:{}", contact::PHONE)>{contact::PHONE_DISPLAY}</a>
                    </li>
                    <li>
                        <Icon icon=ic::MAIL />
                        <a href=format!("mailto:{}", contact::EMAIL)>{contact::EMAIL}</a>
                    </li>
                </ul>
                <ContactForm />
            </div>
        </section>
    }
}

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, css, groups};
use crate::components::contact_form::ContactForm;
use crate::components::icons as ic;
use crate::config::contact;
use crate::models::Section;

/// Number of detail cards on the contact page.
pub const CONTACT_DETAIL_COUNT: usize = 4;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id=Section::Contact.anchor() class=css::section>
            <SectionHeading
                title="Contact Us"
                subtitle="Visit, call or write to us. We respond within one business day."
            />
            <div class=css::contactLayout>
                <div class=css::details>
                    <article class=css::detail data-card-group=groups::DETAIL data-card-index="0">
                        <Icon icon=ic::LOCATION />
                        <h3>"Our Office"</h3>
                        <p>{contact::ADDRESS}</p>
                        <p>{contact::PO_BOX}</p>
                    </article>
                    <article class=css::detail data-card-group=groups::DETAIL data-card-index="1">
                        <Icon icon=ic::PHONE />
                        <h3>"Phone"</h3>
                        <a href=format!("tel:{}", contact::PHONE)>{contact::PHONE_DISPLAY}</a>
                    </article>
                    <article class=css::detail data-card-group=groups::DETAIL data-card-index="2">
                        <Icon icon=ic::MAIL />
                        <h3>"Email"</h3>
                        <a href=format!("mailto:{}", contact::EMAIL)>{contact::EMAIL}</a>
                    </article>
                    <article class=css::detail data-card-group=groups::DETAIL data-card-index="3">
                        <Icon icon=ic::CLOCK />
                        <h3>"Business Hours"</h3>
                        {contact::HOURS.iter().map(|line| view! { <p>{*line}</p> }).collect_view()}
                    </article>
                </div>
                <ContactForm />
            </div>
        </section>
    }
}

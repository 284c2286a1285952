use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, card_class, css, groups};
use crate::app::AppContext;
use crate::components::icons::{self as ic, content_icon};
use crate::models::Section;

#[component]
pub fn Services() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let services = ctx.content.with_value(|content| content.services.clone());

    view! {
        <section id=Section::Services.anchor() class=css::section>
            <SectionHeading
                title="Our Services"
                subtitle="End-to-end ICT services built on best-of-breed technologies."
            />
            <div class=css::grid>
                {services
                    .into_iter()
                    .enumerate()
                    .map(|(index, service)| view! {
                        <article
                            class=card_class(service.accent)
                            data-card-group=groups::SERVICE
                            data-card-index=index.to_string()
                        >
                            <div class=css::cardIcon>
                                <Icon icon=content_icon(service.icon) />
                            </div>
                            <h3 class=css::cardTitle>{service.title}</h3>
                            <p class=css::cardBody>{service.description}</p>
                            <ul class=css::features>
                                {service
                                    .features
                                    .into_iter()
                                    .map(|feature| view! {
                                        <li>
                                            <Icon icon=ic::CHECK />
                                            <span>{feature}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

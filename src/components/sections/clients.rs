use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, css, groups};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{NavAction, Section};

#[component]
pub fn ClientsAndPartners() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let (clients, partners) =
        ctx.content
            .with_value(|content| (content.clients.clone(), content.partners.clone()));

    view! {
        <section id=Section::ClientsAndPartners.anchor() class=css::section>
            <SectionHeading
                title="Our Notable Clients"
                subtitle="Organisations across Namibia rely on us every day."
            />
            <div class=css::logoGrid>
                {clients
                    .into_iter()
                    .enumerate()
                    .map(|(index, client)| {
                        let class = if client.compact { css::logoCompact } else { css::logoImage };
                        view! {
                            <figure
                                class=css::logoCard
                                data-card-group=groups::CLIENT
                                data-card-index=index.to_string()
                            >
                                <img class=class src=client.logo alt=client.name.clone() loading="lazy" />
                                <figcaption>{client.name}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>

            <SectionHeading
                title="Vendors & Strategic Partners"
                subtitle="We partner with the world's leading technology vendors."
            />
            <div class=css::logoGrid>
                {partners
                    .into_iter()
                    .enumerate()
                    .map(|(index, partner)| view! {
                        <figure
                            class=css::logoCard
                            data-card-group=groups::PARTNER
                            data-card-index=index.to_string()
                        >
                            <img class=css::logoImage src=partner.logo alt=partner.name.clone() loading="lazy" />
                            <figcaption>{partner.name}</figcaption>
                        </figure>
                    })
                    .collect_view()}
            </div>

            <div class=css::callout>
                <h3>"Ready to join them?"</h3>
                <p>"Talk to us about connectivity, collaboration and data center projects."</p>
                <button
                    class=css::calloutButton
                    on:click=move |_| ctx.navigate(NavAction::GetAQuote)
                >
                    "Get a Quote"
                    <Icon icon=ic::ARROW_RIGHT />
                </button>
            </div>
        </section>
    }
}

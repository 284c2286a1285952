use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, card_class, css, groups};
use crate::app::AppContext;
use crate::components::icons::content_icon;
use crate::models::Section;

/// Solutions grouped by category.
///
/// Card indices run across categories so the stagger continues from one
/// category into the next.
#[component]
pub fn Solutions() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let categories = ctx.content.with_value(|content| content.solutions.clone());

    let mut index = 0;
    let mut blocks = Vec::with_capacity(categories.len());
    for category in categories {
        let accent = category.accent;
        let cards = category
            .items
            .into_iter()
            .map(|item| {
                let card = view! {
                    <article
                        class=card_class(accent)
                        data-card-group=groups::SOLUTION
                        data-card-index=index.to_string()
                    >
                        <div class=css::cardIcon>
                            <Icon icon=content_icon(item.icon) />
                        </div>
                        <h4 class=css::cardTitle>{item.title}</h4>
                        <p class=css::cardBody>{item.description}</p>
                    </article>
                };
                index += 1;
                card
            })
            .collect_view();

        blocks.push(view! {
            <div class=css::category>
                <h3 class=css::categoryTitle>{category.name}</h3>
                <div class=css::grid>{cards}</div>
            </div>
        });
    }

    view! {
        <section id=Section::Solutions.anchor() class=css::section>
            <SectionHeading
                title="Our Solutions"
                subtitle="Connectivity and data center solutions designed around your business."
            />
            {blocks}
        </section>
    }
}

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{SectionHeading, card_class, css, groups};
use crate::app::AppContext;
use crate::components::icons::content_icon;
use crate::config::ABOUT_INTRO;
use crate::models::Section;

#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let panels = ctx.content.with_value(|content| content.about.clone());

    view! {
        <section id=Section::About.anchor() class=css::section>
            <SectionHeading title="About Us" />
            <p class=css::lead>{ABOUT_INTRO}</p>
            <div class=css::panels>
                {panels
                    .into_iter()
                    .enumerate()
                    .map(|(index, panel)| view! {
                        <article
                            class=card_class(panel.accent)
                            data-card-group=groups::PANEL
                            data-card-index=index.to_string()
                        >
                            {panel.image.map(|src| view! {
                                <img class=css::panelImage src=src alt=panel.title.clone() loading="lazy" />
                            })}
                            <div class=css::cardIcon>
                                <Icon icon=content_icon(panel.icon) />
                            </div>
                            <h3 class=css::cardTitle>{panel.title}</h3>
                            <p class=css::cardBody>{panel.body}</p>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

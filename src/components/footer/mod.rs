//! Page footer.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::{APP_NAME, contact};
use crate::models::{NavAction, Section};

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::columns>
                <div>
                    <h4 class=css::brand>{APP_NAME}</h4>
                    <p class=css::muted>{contact::ADDRESS}</p>
                </div>
                <nav class=css::links>
                    {Section::ALL
                        .into_iter()
                        .map(|section| view! {
                            <a
                                href=format!("#{}", section.anchor())
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(NavAction::Go(section));
                                }
                            >
                                {section.label()}
                            </a>
                        })
                        .collect_view()}
                </nav>
                <div class=css::muted>
                    <p>{contact::PHONE_DISPLAY}</p>
                    <p>{contact::EMAIL}</p>
                </div>
            </div>
            <p class=css::copyright>
                {format!("© {} {}. All rights reserved.", year, APP_NAME)}
            </p>
        </footer>
    }
}

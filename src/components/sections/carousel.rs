//! Infinite client logo strip.

use leptos::prelude::*;

use crate::models::Client;

stylance::import_crate_style!(css, "src/components/sections/carousel.module.css");

/// Client logos scrolling sideways forever.
///
/// The logos are rendered twice and the track is translated by half its
/// width per cycle, so the loop has no visible seam.
#[component]
pub fn LogoCarousel(clients: Vec<Client>) -> impl IntoView {
    let logo = |client: &Client, hidden: bool| {
        let class = if client.compact {
            css::imageCompact
        } else {
            css::image
        };
        view! {
            <div class=css::logo aria-hidden=hidden.then_some("true")>
                <img src=client.logo.clone() alt=client.name.clone() class=class loading="lazy" />
            </div>
        }
    };

    let first = clients.iter().map(|c| logo(c, false)).collect_view();
    let second = clients.iter().map(|c| logo(c, true)).collect_view();

    view! {
        <div class=css::carousel>
            <div class=css::track>
                {first}
                {second}
            </div>
        </div>
    }
}

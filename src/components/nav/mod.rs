//! Navigation bar and mobile drawer.
//!
//! Desktop shows the section links inline. Below the breakpoint the links
//! move into a drawer opened by the toggle button. The drawer closes on any
//! navigation and on pointer presses outside both the drawer and the toggle.

use leptos::{ev, html, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, LOGO_URL, contact};
use crate::models::{NavAction, PointerTarget, Section};

stylance::import_crate_style!(css, "src/components/nav/nav.module.css");

/// Classify a pointer event target against the drawer and its toggle.
fn classify(
    target: Option<&web_sys::Node>,
    menu: Option<&web_sys::Node>,
    toggle: Option<&web_sys::Node>,
) -> PointerTarget {
    let inside = |container: Option<&web_sys::Node>| {
        container.is_some_and(|container| container.contains(target))
    };
    if inside(menu) {
        PointerTarget::Menu
    } else if inside(toggle) {
        PointerTarget::Toggle
    } else {
        PointerTarget::Outside
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let menu_ref = NodeRef::<html::Div>::new();
    let toggle_ref = NodeRef::<html::Button>::new();

    let active = Memo::new(move |_| ctx.nav.with(|nav| nav.active()));
    let is_open = Memo::new(move |_| ctx.nav.with(|nav| nav.is_menu_open()));

    // Pointer presses anywhere on the page.
    let handle = window_event_listener(ev::mousedown, move |event| {
        if !is_open.get_untracked() {
            return;
        }
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let menu = menu_ref.get_untracked().map(web_sys::Node::from);
        let toggle = toggle_ref.get_untracked().map(web_sys::Node::from);
        let hit = classify(target.as_ref(), menu.as_ref(), toggle.as_ref());
        ctx.nav.update(|nav| nav.pointer_down(hit));
    });
    on_cleanup(move || handle.remove());

    let link = move |section: Section, class: &'static str, active_class: &'static str| {
        view! {
            <a
                href=format!("#{}", section.anchor())
                class=move || if active.get() == section { active_class } else { class }
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(NavAction::Go(section));
                }
            >
                {section.label()}
            </a>
        }
    };

    let quote = move |class: &'static str| {
        view! {
            <button class=class on:click=move |_| ctx.navigate(NavAction::GetAQuote)>
                "Get a Quote"
            </button>
        }
    };

    view! {
        <header class=css::bar>
            <a
                class=css::brand
                href="#home"
                on:click=move |ev| {
                    ev.prevent_default();
                    ctx.navigate(NavAction::Go(Section::Home));
                }
            >
                <img class=css::logo src=LOGO_URL alt=APP_NAME />
            </a>

            <nav class=css::links>
                {Section::ALL
                    .into_iter()
                    .map(|section| link(section, css::link, css::linkActive))
                    .collect_view()}
            </nav>

            <div class=css::actions>
                {quote(css::quote)}
            </div>

            <button
                node_ref=toggle_ref
                class=css::toggle
                aria-label="Toggle menu"
                aria-expanded=move || is_open.get().to_string()
                on:click=move |_| ctx.nav.update(|nav| nav.toggle_menu())
            >
                {move || if is_open.get() {
                    view! { <Icon icon=ic::CLOSE /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MENU /> }.into_any()
                }}
            </button>
        </header>

        <div
            node_ref=menu_ref
            class=move || if is_open.get() { css::drawerOpen } else { css::drawer }
        >
            <nav class=css::drawerLinks>
                {Section::ALL
                    .into_iter()
                    .map(|section| link(section, css::drawerLink, css::drawerLinkActive))
                    .collect_view()}
            </nav>
            {quote(css::drawerQuote)}
            // Plain links leave the drawer open.
            <a class=css::drawerPhone href=format!("tel:{}", contact::PHONE)>
                <Icon icon=ic::PHONE />
                <span>{contact::PHONE_DISPLAY}</span>
            </a>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    use super::*;
    use crate::utils::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    fn node(tag: &str) -> web_sys::Node {
        let document = dom::document().unwrap();
        document.create_element(tag).unwrap().into()
    }

    #[wasm_bindgen_test]
    fn press_is_classified_by_container() {
        let menu = node("div");
        let link = menu.append_child(&node("a")).unwrap();
        let toggle = node("button");
        let icon = toggle.append_child(&node("span")).unwrap();
        let elsewhere = node("p");

        let hit = |target: &web_sys::Node| classify(Some(target), Some(&menu), Some(&toggle));
        assert_eq!(hit(&link), PointerTarget::Menu);
        assert_eq!(hit(&menu), PointerTarget::Menu);
        assert_eq!(hit(&icon), PointerTarget::Toggle);
        assert_eq!(hit(&elsewhere), PointerTarget::Outside);
    }

    #[wasm_bindgen_test]
    fn press_without_target_or_mounted_menu_is_outside() {
        let toggle = node("button");
        assert_eq!(classify(None, None, Some(&toggle)), PointerTarget::Outside);
        let target = node("div");
        assert_eq!(classify(Some(&target), None, None), PointerTarget::Outside);
    }
}

//! Submission result toast.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::NOTICE_DISMISS_MS;
use crate::models::NoticeKind;

stylance::import_crate_style!(css, "src/components/contact_form/notice.module.css");

/// Toast for the latest submission notice.
///
/// Each notice dismisses itself after `NOTICE_DISMISS_MS` unless a newer one
/// has replaced it.
#[component]
pub fn NoticeToast() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let controller = ctx.contact;

    Effect::new(move |_| {
        if let Some(notice) = controller.notice.get() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                controller.dismiss(notice.seq);
            });
        }
    });

    move || {
        controller.notice.get().map(|notice| {
            let (kind_class, icon) = match notice.kind {
                NoticeKind::Success => (css::success, ic::SUCCESS),
                NoticeKind::Failure => (css::failure, ic::ALERT),
            };
            let class = format!("{} {}", css::toast, kind_class);
            view! {
                <div class=class role="status">
                    <Icon icon=icon />
                    <span class=css::message>{notice.kind.message()}</span>
                    <button
                        class=css::dismiss
                        title="Dismiss"
                        on:click=move |_| controller.dismiss(notice.seq)
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </div>
            }
        })
    }
}

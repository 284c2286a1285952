//! Contact form and submission notices.

mod notice;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::models::FormField;

pub use notice::NoticeToast;

stylance::import_crate_style!(css, "src/components/contact_form/contact_form.module.css");

/// The shared contact form.
///
/// Inputs rely on native `required` validation only; values are stored
/// verbatim.
#[component]
pub fn ContactForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let controller = ctx.contact;
    let submitting = Memo::new(move |_| controller.is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            controller.submit().await;
        });
    };

    let value = move |field: FormField| {
        Signal::derive(move || controller.form.with(|form| form.field(field).to_string()))
    };
    let on_input = move |field: FormField| {
        move |ev: leptos::ev::Event| controller.update_field(field, event_target_value(&ev))
    };

    view! {
        <form class=css::form on:submit=on_submit>
            <div class=css::row>
                <div class=css::field>
                    <label for=FormField::Name.id()>"Name"</label>
                    <input
                        id=FormField::Name.id()
                        name=FormField::Name.id()
                        type="text"
                        placeholder="Your name"
                        required=true
                        prop:value=value(FormField::Name)
                        on:input=on_input(FormField::Name)
                    />
                </div>
                <div class=css::field>
                    <label for=FormField::Email.id()>"Email"</label>
                    <input
                        id=FormField::Email.id()
                        name=FormField::Email.id()
                        type="email"
                        placeholder="you@company.com"
                        required=true
                        prop:value=value(FormField::Email)
                        on:input=on_input(FormField::Email)
                    />
                </div>
            </div>
            <div class=css::field>
                <label for=FormField::Message.id()>"Message"</label>
                <textarea
                    id=FormField::Message.id()
                    name=FormField::Message.id()
                    rows="5"
                    placeholder="How can we help?"
                    required=true
                    prop:value=value(FormField::Message)
                    on:input=on_input(FormField::Message)
                ></textarea>
            </div>
            <button class=css::submit type="submit" disabled=submitting>
                {move || if submitting.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}

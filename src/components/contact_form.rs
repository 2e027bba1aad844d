//! Contact form with inline validation and a mocked send.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the thin rendering adapter over `state::contact`: it copies input
//! into the model, hands submit events to `handle_submit`, and renders the
//! model's error slots and status line. No rule lives here.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::contact::{self, FormField};
use crate::util::clock;

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let form = RwSignal::new(contact::ContactForm::default());
    let delay = config.submit_delay();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        leptos::task::spawn_local(async move {
            let outcome = contact::handle_submit(&form, || clock::sleep(delay)).await;
            log::debug!("contact form: submit finished with {outcome:?}");
        });
    };

    let on_clear = move |_: leptos::ev::MouseEvent| {
        form.update(contact::ContactForm::reset);
        log::debug!("contact form: cleared");
    };

    let sending = move || form.with(contact::ContactForm::is_sending);
    let status = move || form.with(contact::ContactForm::status_text);

    view! {
        <form id="contact-form" class="contact-form" novalidate=true on:submit=on_submit>
            <ContactField form=form field=FormField::Name/>
            <ContactField form=form field=FormField::Email/>
            <ContactField form=form field=FormField::Message/>
            <button class="button" type="submit" disabled=sending>
                "Send message"
            </button>
            <button class="button button--ghost" type="button" on:click=on_clear>
                "Clear"
            </button>
            <p id="form-status" class="form-status" role="status" aria-live="polite">
                {status}
            </p>
        </form>
    }
}

/// One labeled control with its error slot.
#[component]
fn ContactField(form: RwSignal<contact::ContactForm>, field: FormField) -> impl IntoView {
    let id = field.id();
    let value = move || form.with(|f| f.values.get(field).to_owned());
    let error = move || form.with(|f| f.errors.get(field).unwrap_or_default());
    let on_input = move |ev: leptos::ev::Event| {
        form.update(|f| f.set_value(field, event_target_value(&ev)));
    };

    let control = match field {
        FormField::Message => view! {
            <textarea id=id name=id rows="5" prop:value=value on:input=on_input></textarea>
        }
        .into_any(),
        FormField::Email => view! {
            <input id=id name=id type="email" autocomplete="email" prop:value=value on:input=on_input/>
        }
        .into_any(),
        FormField::Name => view! {
            <input id=id name=id type="text" autocomplete="name" prop:value=value on:input=on_input/>
        }
        .into_any(),
    };

    view! {
        <div class="field">
            <label for=id>{field.label()}</label>
            {control}
            <p class="error">{error}</p>
        </div>
    }
}

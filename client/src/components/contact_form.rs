//! Contact form with result banners.
//!
//! SYSTEM CONTEXT
//! ==============
//! Field values and submit status live in a page-local
//! `RwSignal<ContactFormState>`. Submitting posts JSON to the configured
//! form endpoint from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged and shown as an error banner; the typed fields are
//! kept so the visitor can retry. Either banner hides itself after
//! `BANNER_DISMISS_MS` unless a newer result has replaced it.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::ContactText;
use crate::state::contact_form::{ContactFormState, Field, SubmitStatus};
use crate::state::locale::LocaleState;

#[component]
pub fn ContactForm() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactFormState::default());
    let endpoint = StoredValue::new(config.contact_form_endpoint);
    let t = move || &locale.get().t().contact;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut payload = None;
        form.update(|f| payload = f.begin_submit());
        let Some(submission) = payload else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            use crate::net::contact::submit_contact_form;
            use crate::state::contact_form::BANNER_DISMISS_MS;

            let endpoint = endpoint.get_value();
            leptos::task::spawn_local(async move {
                let seq = match submit_contact_form(&endpoint, &submission).await {
                    Ok(()) => form.try_update(ContactFormState::on_success),
                    Err(e) => {
                        leptos::logging::warn!("contact form submit failed: {e}");
                        form.try_update(ContactFormState::on_failure)
                    }
                };
                let Some(seq) = seq else {
                    return;
                };
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(BANNER_DISMISS_MS))).await;
                let _ = form.try_update(|f| f.dismiss(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, endpoint);
        }
    };

    let field_value = move |field: Field| {
        let state = form.get();
        match field {
            Field::Name => state.fields.name,
            Field::Email => state.fields.email,
            Field::Subject => state.fields.subject,
            Field::Message => state.fields.message,
        }
    };
    let on_input = move |field: Field, ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        form.update(|f| f.set_field(field, value));
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            // Result banner
            {move || {
                banner_class(form.get().status).map(|class| {
                    let text = banner_text(form.get().status, t());
                    view! { <div class=class role="status">{text}</div> }
                })
            }}

            <div class="contact-form__row">
                <label class="contact-form__field">
                    <span class="contact-form__label">{move || t().form_name}</span>
                    <input
                        class="contact-form__input"
                        type="text"
                        name="name"
                        required=true
                        placeholder=move || t().placeholder_name
                        prop:value=move || field_value(Field::Name)
                        on:input=move |ev| on_input(Field::Name, ev)
                    />
                </label>
                <label class="contact-form__field">
                    <span class="contact-form__label">{move || t().form_email}</span>
                    <input
                        class="contact-form__input"
                        type="email"
                        name="email"
                        required=true
                        placeholder=move || t().placeholder_email
                        prop:value=move || field_value(Field::Email)
                        on:input=move |ev| on_input(Field::Email, ev)
                    />
                </label>
            </div>

            <label class="contact-form__field">
                <span class="contact-form__label">{move || t().form_subject}</span>
                <input
                    class="contact-form__input"
                    type="text"
                    name="subject"
                    required=true
                    placeholder=move || t().placeholder_subject
                    prop:value=move || field_value(Field::Subject)
                    on:input=move |ev| on_input(Field::Subject, ev)
                />
            </label>

            <label class="contact-form__field">
                <span class="contact-form__label">{move || t().form_message}</span>
                <textarea
                    class="contact-form__input contact-form__input--area"
                    name="message"
                    rows="5"
                    required=true
                    placeholder=move || t().placeholder_message
                    prop:value=move || field_value(Field::Message)
                    on:input=move |ev| on_input(Field::Message, ev)
                ></textarea>
            </label>

            <button class="contact-form__submit" type="submit" disabled=move || form.get().is_sending()>
                <Show
                    when=move || form.get().is_sending()
                    fallback=move || view! { <span>{move || t().form_submit}</span> }
                >
                    <span class="contact-form__spinner"></span>
                    <span>{move || t().form_sending}</span>
                </Show>
            </button>
        </form>
    }
}

fn banner_class(status: SubmitStatus) -> Option<&'static str> {
    match status {
        SubmitStatus::Succeeded => Some("contact-form__banner contact-form__banner--success"),
        SubmitStatus::Failed => Some("contact-form__banner contact-form__banner--error"),
        SubmitStatus::Idle | SubmitStatus::Sending => None,
    }
}

fn banner_text(status: SubmitStatus, text: &ContactText) -> &'static str {
    if status == SubmitStatus::Failed {
        text.form_error
    } else {
        text.form_success
    }
}

//! Contact form with inline validation and submit status.

use contact::{ContactSubmission, Field, PROJECT_TYPES};
use leptos::prelude::*;

use crate::state::contact_form::{ContactFormState, SubmitStatus};
use crate::state::utm;
use crate::util::storage::SessionStore;

/// Text input bound to one draft field.
#[component]
fn TextField(
    form: RwSignal<ContactFormState>,
    field: Field,
    label: &'static str,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] autocomplete: &'static str,
    get: fn(&ContactSubmission) -> &String,
    set: fn(&mut ContactSubmission) -> &mut String,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(field));
    view! {
        <label class="form-field" class:form-field--error=move || error().is_some()>
            <span class="form-field__label">{label} " *"</span>
            <input
                type=kind
                autocomplete=autocomplete
                prop:value=move || form.with(|f| get(&f.draft).clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| {
                        *set(&mut f.draft) = value;
                        f.clear_error(field);
                    });
                }
            />
            <Show when=move || error().is_some()>
                <span class="form-field__error" role="alert">{move || error().unwrap_or_default()}</span>
            </Show>
        </label>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let attribution = utm::load(&SessionStore);
        let Some(payload) = form.try_update(|f| f.begin_submit(&attribution)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact(&payload).await;
            if let Err(e) = &result {
                log::warn!("contact submit failed: {e}");
            }
            form.update(|f| f.finish(result.map(|_| ())));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = payload;
    };

    let status = move || form.with(|f| f.status.clone());
    let submitting = move || status() == SubmitStatus::Submitting;
    let consent_error = move || form.with(|f| f.error(Field::GdprConsent));
    let message_error = move || form.with(|f| f.error(Field::Message));

    view! {
        <Show
            when=move || status() == SubmitStatus::Succeeded
            fallback=move || {
                view! {
                    <form class="contact-form" novalidate=true on:submit=on_submit>
                        {move || match status() {
                            SubmitStatus::Failed(message) => {
                                Some(view! { <div class="contact-form__banner" role="alert">{message}</div> })
                            }
                            _ => None,
                        }}
                        <div class="contact-form__row">
                            <TextField
                                form=form
                                field=Field::FirstName
                                label="First name"
                                autocomplete="given-name"
                                get=|d| &d.first_name
                                set=|d| &mut d.first_name
                            />
                            <TextField
                                form=form
                                field=Field::LastName
                                label="Last name"
                                autocomplete="family-name"
                                get=|d| &d.last_name
                                set=|d| &mut d.last_name
                            />
                        </div>
                        <div class="contact-form__row">
                            <TextField
                                form=form
                                field=Field::Email
                                label="Email"
                                kind="email"
                                autocomplete="email"
                                get=|d| &d.email
                                set=|d| &mut d.email
                            />
                            <TextField
                                form=form
                                field=Field::Company
                                label="Company"
                                autocomplete="organization"
                                get=|d| &d.company
                                set=|d| &mut d.company
                            />
                        </div>
                        <label class="form-field">
                            <span class="form-field__label">"Project type"</span>
                            <select
                                prop:value=move || form.with(|f| f.draft.project_type.clone().unwrap_or_default())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.draft.project_type = (!value.is_empty()).then_some(value);
                                    });
                                }
                            >
                                <option value="">"Select a project type"</option>
                                {PROJECT_TYPES
                                    .iter()
                                    .map(|&(value, label)| view! { <option value=value>{label}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="form-field" class:form-field--error=move || message_error().is_some()>
                            <span class="form-field__label">"Message *"</span>
                            <textarea
                                rows="6"
                                prop:value=move || form.with(|f| f.draft.message.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| {
                                        f.draft.message = value;
                                        f.clear_error(Field::Message);
                                    });
                                }
                            ></textarea>
                            <Show when=move || message_error().is_some()>
                                <span class="form-field__error" role="alert">
                                    {move || message_error().unwrap_or_default()}
                                </span>
                            </Show>
                        </label>
                        <label class="form-check" class:form-field--error=move || consent_error().is_some()>
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.draft.gdpr_consent)
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    form.update(|f| {
                                        f.draft.gdpr_consent = on;
                                        f.clear_error(Field::GdprConsent);
                                    });
                                }
                            />
                            <span>
                                "I agree to the processing of my data as described in the "
                                <a href="/privacy">"privacy policy"</a>
                                ". *"
                            </span>
                        </label>
                        <Show when=move || consent_error().is_some()>
                            <span class="form-field__error" role="alert">
                                {move || consent_error().unwrap_or_default()}
                            </span>
                        </Show>
                        <label class="form-check">
                            <input
                                type="checkbox"
                                prop:checked=move || form.with(|f| f.draft.marketing_consent)
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    form.update(|f| f.draft.marketing_consent = on);
                                }
                            />
                            <span>"Send me occasional product news."</span>
                        </label>
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            {move || if submitting() { "Sending…" } else { "Send message" }}
                        </button>
                    </form>
                }
            }
        >
            <div class="contact-form__thanks" role="status">
                <h2>"Thank you!"</h2>
                <p>"Your message is on its way. We will get back to you within one business day."</p>
                <button class="btn" on:click=move |_| form.update(ContactFormState::reset)>
                    "Send another message"
                </button>
            </div>
        </Show>
    }
}

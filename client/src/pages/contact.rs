//! Contact page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <Title text="Contact | Wireworks"/>
        <div class="page contact-page">
            <div class="contact-page__intro">
                <h1>"Tell us about your project"</h1>
                <p>
                    "Share your drawings, volumes and timeline. An engineer will reply within one business day."
                </p>
                <address>
                    "Wireworks Harness Systems" <br/> "sales@wireworks.example" <br/> "+44 20 7946 0000"
                </address>
            </div>
            <ContactForm/>
        </div>
    }
}

//! Privacy and cookie policy.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::consent::{CONSENT_COOKIE, CONSENT_MAX_AGE_DAYS, PREFERENCES_COOKIE};
use crate::state::utm::STORAGE_KEY;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text="Privacy policy | Wireworks"/>
        <article class="page prose">
            <h1>"Privacy policy"</h1>
            <h2>"Contact requests"</h2>
            <p>
                "When you use the contact form we process your name, email, company and message to answer your request. "
                "We only do so with your consent and keep the data no longer than needed to handle the inquiry."
            </p>
            <h2>"Cookies"</h2>
            <p>
                "Strictly necessary cookies store your cookie decision: "
                <code>{CONSENT_COOKIE}</code>
                " and "
                <code>{PREFERENCES_COOKIE}</code>
                {format!(", kept for {CONSENT_MAX_AGE_DAYS} days.")}
            </p>
            <p>
                "Analytics and marketing cookies are only set after you accept them, and are removed when you withdraw consent."
            </p>
            <h2>"Campaign attribution"</h2>
            <p>
                "Campaign parameters from the address you arrived with are kept in session storage ("
                <code>{STORAGE_KEY}</code>
                ") for the length of your visit and sent with your contact request."
            </p>
        </article>
    }
}

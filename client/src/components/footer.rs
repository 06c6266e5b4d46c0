//! Site footer with the cookie-settings link.

use leptos::prelude::*;

use crate::state::consent::ConsentUi;

#[component]
pub fn Footer() -> impl IntoView {
    let consent = expect_context::<RwSignal<ConsentUi>>();

    view! {
        <footer class="site-footer">
            <div class="site-footer__brand">
                <strong>"Wireworks Harness Systems"</strong>
                <span>"Custom wire harnesses and cable assemblies, built to print."</span>
            </div>
            <nav class="site-footer__links">
                <a href="/privacy">"Privacy policy"</a>
                <button class="site-footer__cookies" on:click=move |_| consent.update(ConsentUi::open_panel)>
                    "Cookie settings"
                </button>
            </nav>
        </footer>
    }
}

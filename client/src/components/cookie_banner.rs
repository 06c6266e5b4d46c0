//! GDPR cookie banner and preferences panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the stored decision once after hydration, applies it (tracking
//! scripts, cookie cleanup) and then shows the banner only while undecided or
//! while the visitor reopened the preferences from the footer.

use leptos::prelude::*;

use crate::app::ConsentLoaded;
use crate::state::consent::{self, CONSENT_MAX_AGE_DAYS, ConsentState, ConsentUi};
use crate::util::storage::CookieStore;
use crate::util::tracking;

fn store() -> CookieStore {
    CookieStore::new(CONSENT_MAX_AGE_DAYS)
}

fn settle(ui: RwSignal<ConsentUi>, state: ConsentState) {
    tracking::apply(state.preferences());
    ui.update(|c| c.settle(state));
}

#[component]
pub fn CookieBanner() -> impl IntoView {
    let ui = expect_context::<RwSignal<ConsentUi>>();
    let ConsentLoaded(loaded) = expect_context::<ConsentLoaded>();

    Effect::new(move || {
        let stored = consent::load(&store());
        if stored.is_decided() {
            tracking::apply(stored.preferences());
        }
        ui.set(ConsentUi::new(stored));
        loaded.set(true);
    });

    let on_accept = move |_| settle(ui, consent::accept_all(&store()));
    let on_decline = move |_| settle(ui, consent::decline_all(&store()));
    let on_save = move |_| {
        let draft = ui.get_untracked().draft;
        settle(ui, consent::save_custom(&store(), draft.analytics, draft.marketing));
    };
    let on_cancel = move |_| ui.update(|c| c.panel_open = false);

    let visible = move || loaded.get() && ui.get().banner_visible();
    let panel_open = move || ui.get().panel_open;

    view! {
        <Show when=visible>
            <div class="cookie-banner" role="dialog" aria-live="polite" aria-label="Cookie consent">
                <Show
                    when=panel_open
                    fallback=move || {
                        view! {
                            <p class="cookie-banner__text">
                                "We use cookies to run this site and, with your permission, to measure traffic and campaigns. "
                                <a href="/privacy">"Read our privacy policy"</a>
                                "."
                            </p>
                            <div class="cookie-banner__actions">
                                <button class="btn btn--primary" on:click=on_accept>
                                    "Accept all"
                                </button>
                                <button class="btn" on:click=on_decline>
                                    "Decline"
                                </button>
                                <button class="btn btn--link" on:click=move |_| ui.update(ConsentUi::open_panel)>
                                    "Customize"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="cookie-panel">
                        <h2>"Cookie preferences"</h2>
                        <label class="cookie-panel__row">
                            <input type="checkbox" checked=true disabled=true/>
                            <span>"Strictly necessary"</span>
                            <small>"Required for the site to work. Always on."</small>
                        </label>
                        <label class="cookie-panel__row">
                            <input
                                type="checkbox"
                                prop:checked=move || ui.get().draft.analytics
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    ui.update(|c| c.draft.analytics = on);
                                }
                            />
                            <span>"Analytics"</span>
                            <small>"Anonymous traffic statistics."</small>
                        </label>
                        <label class="cookie-panel__row">
                            <input
                                type="checkbox"
                                prop:checked=move || ui.get().draft.marketing
                                on:change=move |ev| {
                                    let on = event_target_checked(&ev);
                                    ui.update(|c| c.draft.marketing = on);
                                }
                            />
                            <span>"Marketing"</span>
                            <small>"Campaign measurement by advertising partners."</small>
                        </label>
                        <div class="cookie-banner__actions">
                            <button class="btn btn--primary" on:click=on_save>
                                "Save preferences"
                            </button>
                            <button class="btn" on:click=on_cancel>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

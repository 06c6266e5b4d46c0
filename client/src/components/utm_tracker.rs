//! Captures UTM parameters from the current URL into session storage.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::state::utm;
use crate::util::storage::SessionStore;

/// Renders nothing. Re-runs on every client-side navigation so campaign
/// links to any page are attributed.
#[component]
pub fn UtmTracker() -> impl IntoView {
    let query = use_query_map();

    Effect::new(move || {
        let fresh = query.with(utm::from_query_map);
        let captured = utm::capture(&SessionStore, fresh);
        if !captured.is_empty() {
            #[cfg(feature = "hydrate")]
            log::debug!("utm attribution: {captured:?}");
        }
    });
}

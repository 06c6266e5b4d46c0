//! UTM attribution captured from the landing URL.
//!
//! Values live in session storage under `utm_params` for the whole visit and
//! are attached to the contact submission. Fresh URL values override stored
//! ones field by field.

#[cfg(test)]
#[path = "utm_test.rs"]
mod utm_test;

use contact::UtmParams;
use leptos_router::params::ParamsMap;

use crate::util::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "utm_params";

#[must_use]
pub fn load(store: &impl KeyValueStore) -> UtmParams {
    store
        .get(STORAGE_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Merge `fresh` over the stored values, persist, and return the result.
/// Nothing is written when the merged set is empty.
pub fn capture(store: &impl KeyValueStore, fresh: UtmParams) -> UtmParams {
    let merged = load(store).overridden_by(fresh);
    if merged.is_empty() {
        return merged;
    }
    if let Ok(raw) = serde_json::to_string(&merged) {
        store.set(STORAGE_KEY, &raw);
    }
    merged
}

/// Pick the `utm_*` values out of the router's decoded query map.
#[must_use]
pub fn from_query_map(query: &ParamsMap) -> UtmParams {
    UtmParams::from_query_pairs(query.latest_values())
}

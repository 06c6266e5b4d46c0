//! Key-value storage behind cookies and `sessionStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consent and attribution state are persisted in browser-global storage.
//! State modules take a `&impl KeyValueStore` so they run unchanged against
//! the browser adapters (hydrate) and [`MemoryStore`] (tests, SSR).
//!
//! TRADE-OFFS
//! ==========
//! Browser writes are best effort: a blocked cookie jar or disabled storage
//! silently drops the value. Reads and writes are last-write-wins.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn delete(&self, key: &str);
}

// =============================================================================
// IN-MEMORY
// =============================================================================

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }

    fn delete(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

// =============================================================================
// COOKIES
// =============================================================================

/// `document.cookie` adapter. Values are URI-encoded; every cookie is written
/// with `path=/`, `SameSite=Lax` and the store's max-age.
#[derive(Debug, Clone, Copy)]
pub struct CookieStore {
    max_age_secs: u64,
}

impl CookieStore {
    #[must_use]
    pub fn new(max_age_days: u64) -> Self {
        Self { max_age_secs: max_age_days * 24 * 60 * 60 }
    }

    #[must_use]
    pub fn max_age_secs(&self) -> u64 {
        self.max_age_secs
    }
}

/// Find `key` in a `document.cookie` string (`a=1; b=2`). Returns the raw value.
#[must_use]
pub fn cookie_value(header: &str, key: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.to_owned())
}

/// Cookie names present in a `document.cookie` string.
#[must_use]
pub fn cookie_names(header: &str) -> Vec<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('=').map(|(name, _)| name.to_owned()))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Assignment string for `document.cookie = ...`.
#[must_use]
pub fn set_cookie_string(key: &str, encoded_value: &str, max_age_secs: u64, domain: Option<&str>) -> String {
    let mut out = format!("{key}={encoded_value}; max-age={max_age_secs}; path=/; SameSite=Lax");
    if let Some(domain) = domain {
        out.push_str("; domain=");
        out.push_str(domain);
    }
    out
}

/// Assignment string that expires `key` immediately.
#[must_use]
pub fn expire_cookie_string(key: &str, domain: Option<&str>) -> String {
    set_cookie_string(key, "", 0, domain)
}

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Raw `document.cookie` contents, empty outside the browser.
#[must_use]
pub fn read_cookie_header() -> String {
    #[cfg(feature = "hydrate")]
    {
        html_document()
            .and_then(|doc| doc.cookie().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Assign one `document.cookie` string. No-op outside the browser.
pub fn write_cookie(assignment: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            let _ = doc.set_cookie(assignment);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = assignment;
    }
}

impl KeyValueStore for CookieStore {
    fn get(&self, key: &str) -> Option<String> {
        let raw = cookie_value(&read_cookie_header(), key)?;
        #[cfg(feature = "hydrate")]
        {
            js_sys::decode_uri_component(&raw).ok().map(String::from)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Some(raw)
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        let encoded = String::from(js_sys::encode_uri_component(value));
        #[cfg(not(feature = "hydrate"))]
        let encoded = value.to_owned();
        write_cookie(&set_cookie_string(key, &encoded, self.max_age_secs, None));
    }

    fn delete(&self, key: &str) {
        write_cookie(&expire_cookie_string(key, None));
    }
}

// =============================================================================
// SESSION STORAGE
// =============================================================================

/// `window.sessionStorage` adapter. Every operation no-ops outside the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore;

#[cfg(feature = "hydrate")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

impl KeyValueStore for SessionStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            session_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn delete(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = session_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

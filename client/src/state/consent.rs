//! GDPR cookie-consent state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consent is persisted in two cookies: `cookieConsent` (`"true"` when any
//! optional category was accepted, `"false"` otherwise) and
//! `cookiePreferences` (JSON triple). No `cookieConsent` cookie means the
//! visitor has not decided yet and the banner is shown.

#[cfg(test)]
#[path = "consent_test.rs"]
mod consent_test;

use serde::{Deserialize, Serialize};

use crate::util::storage::KeyValueStore;

pub const CONSENT_COOKIE: &str = "cookieConsent";
pub const PREFERENCES_COOKIE: &str = "cookiePreferences";
pub const CONSENT_MAX_AGE_DAYS: u64 = 730;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookiePreferences {
    pub necessary: bool,
    #[serde(default)]
    pub analytics: bool,
    #[serde(default)]
    pub marketing: bool,
}

impl CookiePreferences {
    #[must_use]
    pub fn all() -> Self {
        Self { necessary: true, analytics: true, marketing: true }
    }

    #[must_use]
    pub fn necessary_only() -> Self {
        Self { necessary: true, analytics: false, marketing: false }
    }

    /// Strictly necessary cookies cannot be refused.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self { necessary: true, ..self }
    }

    #[must_use]
    pub fn any_optional(&self) -> bool {
        self.analytics || self.marketing
    }
}

impl Default for CookiePreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ConsentState {
    #[default]
    Unset,
    AcceptedAll,
    DeclinedAll,
    Custom(CookiePreferences),
}

impl ConsentState {
    fn from_preferences(prefs: CookiePreferences) -> Self {
        if prefs == CookiePreferences::all() {
            Self::AcceptedAll
        } else if prefs == CookiePreferences::necessary_only() {
            Self::DeclinedAll
        } else {
            Self::Custom(prefs)
        }
    }

    /// Effective preferences. Undecided visitors get necessary cookies only.
    #[must_use]
    pub fn preferences(&self) -> CookiePreferences {
        match self {
            Self::Unset | Self::DeclinedAll => CookiePreferences::necessary_only(),
            Self::AcceptedAll => CookiePreferences::all(),
            Self::Custom(prefs) => *prefs,
        }
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        !matches!(self, Self::Unset)
    }
}

/// Read the stored decision.
///
/// A consent flag without a readable preferences cookie falls back to the
/// flag: `"true"` means everything, anything else necessary only.
pub fn load(store: &impl KeyValueStore) -> ConsentState {
    let Some(flag) = store.get(CONSENT_COOKIE) else {
        return ConsentState::Unset;
    };
    let prefs = store
        .get(PREFERENCES_COOKIE)
        .and_then(|raw| serde_json::from_str::<CookiePreferences>(&raw).ok())
        .map(CookiePreferences::normalized)
        .unwrap_or_else(|| {
            if flag == "true" {
                CookiePreferences::all()
            } else {
                CookiePreferences::necessary_only()
            }
        });
    ConsentState::from_preferences(prefs)
}

/// Persist `prefs` and return the resulting state.
pub fn save(store: &impl KeyValueStore, prefs: CookiePreferences) -> ConsentState {
    let prefs = prefs.normalized();
    if let Ok(raw) = serde_json::to_string(&prefs) {
        store.set(PREFERENCES_COOKIE, &raw);
    }
    store.set(CONSENT_COOKIE, if prefs.any_optional() { "true" } else { "false" });
    ConsentState::from_preferences(prefs)
}

pub fn accept_all(store: &impl KeyValueStore) -> ConsentState {
    save(store, CookiePreferences::all())
}

pub fn decline_all(store: &impl KeyValueStore) -> ConsentState {
    save(store, CookiePreferences::necessary_only())
}

pub fn save_custom(store: &impl KeyValueStore, analytics: bool, marketing: bool) -> ConsentState {
    save(store, CookiePreferences { necessary: true, analytics, marketing })
}

/// Reactive consent UI state shared between the banner and footer link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsentUi {
    pub state: ConsentState,
    /// Preferences panel open (customize view or reopened from the footer).
    pub panel_open: bool,
    /// Draft toggles while the panel is open.
    pub draft: CookiePreferences,
}

impl ConsentUi {
    #[must_use]
    pub fn new(state: ConsentState) -> Self {
        Self { state, panel_open: false, draft: state.preferences() }
    }

    /// Banner visible while undecided or while the panel is open.
    #[must_use]
    pub fn banner_visible(&self) -> bool {
        !self.state.is_decided() || self.panel_open
    }

    pub fn open_panel(&mut self) {
        self.draft = self.state.preferences();
        self.panel_open = true;
    }

    pub fn settle(&mut self, state: ConsentState) {
        self.state = state;
        self.draft = state.preferences();
        self.panel_open = false;
    }
}

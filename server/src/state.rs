//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the configured mailer (if any) and the error-detail policy. There
//! is no database: inquiries are forwarded by email and logged, nothing else.

use std::sync::Arc;

use crate::mail::Mailer;
use crate::services::contact::MailRouting;

/// Configured mail client plus inquiry routing.
#[derive(Clone)]
pub struct MailService {
    pub mailer: Arc<dyn Mailer>,
    pub routing: MailRouting,
}

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    /// `None` when `MAIL_PROVIDER` is unset or its config failed to load.
    pub mail: Option<MailService>,
    /// Include upstream error text in `500` bodies (development only).
    pub expose_error_details: bool,
}

impl AppState {
    #[must_use]
    pub fn new(mail: Option<MailService>, expose_error_details: bool) -> Self {
        Self { mail, expose_error_details }
    }

    /// Detail string for an error body, gated by environment.
    #[must_use]
    pub fn details(&self, err: &impl std::fmt::Display) -> Option<String> {
        self.expose_error_details.then(|| err.to_string())
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::mail::test_helpers::RecordingMailer;

    #[must_use]
    pub fn test_routing() -> MailRouting {
        MailRouting {
            notify_to: "sales@wireworks.test".to_owned(),
            reply_subject: "Thank you for contacting us".to_owned(),
        }
    }

    /// State without a mailer.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, false)
    }

    /// State backed by a recording mailer the test keeps a handle to.
    #[must_use]
    pub fn test_app_state_with_mailer(mailer: Arc<RecordingMailer>, expose_error_details: bool) -> AppState {
        AppState::new(Some(MailService { mailer, routing: test_routing() }), expose_error_details)
    }
}

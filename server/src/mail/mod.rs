//! Outbound mail: provider-neutral message type and the `Mailer` seam.
//!
//! DESIGN
//! ======
//! Route handlers only see `Arc<dyn Mailer>`. The concrete client is chosen
//! once at startup from `MAIL_PROVIDER`: Microsoft Graph (client-credentials
//! token, then `sendMail`) or Resend. Tests substitute a recording mock.

pub mod graph;
pub mod resend;

use std::sync::Arc;

use crate::config::{MailConfig, MailProvider};

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The token endpoint could not be reached or answered garbage.
    #[error("token request failed: {0}")]
    TokenRequest(String),

    /// The token endpoint rejected the client credentials.
    #[error("token request rejected: status {status}")]
    TokenRejected { status: u16, body: String },

    /// The send request could not be delivered to the provider.
    #[error("send request failed: {0}")]
    SendRequest(String),

    /// The provider refused the message.
    #[error("send rejected: status {status}")]
    SendRejected { status: u16, body: String },
}

// =============================================================================
// MESSAGE
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    Text(String),
    Html(String),
}

/// A single message to one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub body: EmailBody,
}

// =============================================================================
// MAILER TRAIT
// =============================================================================

/// Provider-neutral async mail sender. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Short provider label for logs.
    fn provider(&self) -> &'static str;

    /// Deliver one message. Exactly one attempt is made.
    ///
    /// # Errors
    ///
    /// Returns a [`MailError`] if credentials cannot be obtained or the
    /// provider rejects the message.
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}

/// Build the configured mailer.
///
/// # Errors
///
/// Returns [`MailError::HttpClientBuild`] if the HTTP client cannot be created.
pub fn from_config(config: &MailConfig) -> Result<Arc<dyn Mailer>, MailError> {
    let mailer: Arc<dyn Mailer> = match &config.provider {
        MailProvider::Graph(credentials) => Arc::new(graph::GraphMailer::new(
            credentials.clone(),
            config.from.clone(),
            config.timeouts,
        )?),
        MailProvider::Resend { api_key } => Arc::new(resend::ResendMailer::new(api_key, config.from.clone())),
    };
    Ok(mailer)
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Mutex;

    use super::*;

    /// Records every message; fails sends whose subject contains `fail_on`.
    #[derive(Default)]
    pub struct RecordingMailer {
        pub sent: Mutex<Vec<OutboundEmail>>,
        pub fail_on: Option<String>,
    }

    impl RecordingMailer {
        #[must_use]
        pub fn failing_on(subject_fragment: &str) -> Self {
            Self { sent: Mutex::new(Vec::new()), fail_on: Some(subject_fragment.to_owned()) }
        }

        #[must_use]
        pub fn attempts(&self) -> Vec<OutboundEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Mailer for RecordingMailer {
        fn provider(&self) -> &'static str {
            "recording"
        }

        async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
            self.sent.lock().unwrap().push(email.clone());
            match &self.fail_on {
                Some(fragment) if email.subject.contains(fragment.as_str()) => {
                    Err(MailError::SendRejected { status: 503, body: "mock outage".to_owned() })
                }
                _ => Ok(()),
            }
        }
    }
}

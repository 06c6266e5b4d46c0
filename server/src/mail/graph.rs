//! Microsoft Graph mail client.
//!
//! Acquires an app-only token with the OAuth2 client-credentials grant and
//! sends through `POST /users/{sender}/sendMail`. The token is cached until
//! shortly before expiry; concurrent sends share one token request because
//! the cache lock is held across the fetch.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tokio::sync::Mutex;

use super::{EmailBody, MailError, Mailer, OutboundEmail};
use crate::config::{GraphCredentials, MailTimeouts};

pub const DEFAULT_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
const GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
const TOKEN_REFRESH_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: u64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: Instant,
}

impl CachedToken {
    fn new(value: String, expires_in_secs: u64, now: Instant) -> Self {
        Self { value, expires_at: now + Duration::from_secs(expires_in_secs) }
    }

    fn is_fresh(&self, now: Instant) -> bool {
        now + TOKEN_REFRESH_MARGIN < self.expires_at
    }
}

pub struct GraphMailer {
    http: reqwest::Client,
    credentials: GraphCredentials,
    sender: String,
    login_base_url: String,
    graph_base_url: String,
    token: Mutex<Option<CachedToken>>,
}

impl GraphMailer {
    /// # Errors
    ///
    /// Returns [`MailError::HttpClientBuild`] if the HTTP client cannot be created.
    pub fn new(credentials: GraphCredentials, sender: String, timeouts: MailTimeouts) -> Result<Self, MailError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| MailError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            credentials,
            sender,
            login_base_url: DEFAULT_LOGIN_BASE_URL.to_owned(),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_owned(),
            token: Mutex::new(None),
        })
    }

    /// Point the client at different login/Graph hosts (national clouds, tests).
    #[must_use]
    pub fn with_base_urls(mut self, login_base_url: &str, graph_base_url: &str) -> Self {
        login_base_url.trim_end_matches('/').clone_into(&mut self.login_base_url);
        graph_base_url.trim_end_matches('/').clone_into(&mut self.graph_base_url);
        self
    }

    fn token_url(&self) -> String {
        format!("{}/{}/oauth2/v2.0/token", self.login_base_url, self.credentials.tenant_id)
    }

    fn send_mail_url(&self) -> String {
        format!("{}/users/{}/sendMail", self.graph_base_url, self.sender)
    }

    async fn access_token(&self) -> Result<String, MailError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.value.clone());
        }
        let fresh = self.request_token().await?;
        let value = fresh.value.clone();
        *cached = Some(fresh);
        Ok(value)
    }

    async fn request_token(&self) -> Result<CachedToken, MailError> {
        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("scope", GRAPH_SCOPE),
        ];
        let response = self
            .http
            .post(self.token_url())
            .form(&params)
            .send()
            .await
            .map_err(|e| MailError::TokenRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| MailError::TokenRequest(e.to_string()))?;
        if !(200..300).contains(&status) {
            return Err(MailError::TokenRejected { status, body });
        }

        let parsed: TokenResponse =
            serde_json::from_str(&body).map_err(|e| MailError::TokenRequest(format!("unexpected token response: {e}")))?;
        tracing::debug!(expires_in = parsed.expires_in, "graph token acquired");
        Ok(CachedToken::new(parsed.access_token, parsed.expires_in, Instant::now()))
    }
}

/// JSON body for Graph `sendMail`.
pub(crate) fn send_mail_payload(email: &OutboundEmail) -> serde_json::Value {
    let (content_type, content) = match &email.body {
        EmailBody::Text(text) => ("Text", text),
        EmailBody::Html(html) => ("HTML", html),
    };
    let mut message = serde_json::json!({
        "subject": email.subject,
        "body": { "contentType": content_type, "content": content },
        "toRecipients": [{ "emailAddress": { "address": email.to } }],
    });
    if let Some(reply_to) = &email.reply_to {
        message["replyTo"] = serde_json::json!([{ "emailAddress": { "address": reply_to } }]);
    }
    serde_json::json!({ "message": message, "saveToSentItems": true })
}

#[async_trait::async_trait]
impl Mailer for GraphMailer {
    fn provider(&self) -> &'static str {
        "graph"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let token = self.access_token().await?;
        let response = self
            .http
            .post(self.send_mail_url())
            .bearer_auth(token)
            .json(&send_mail_payload(email))
            .send()
            .await
            .map_err(|e| MailError::SendRequest(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(MailError::SendRejected { status, body })
    }
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;

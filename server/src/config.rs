//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` (if present) and calls [`AppConfig::from_env`]. Parsing
//! goes through a lookup closure so tests can feed a map instead of mutating
//! process-wide environment.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAIL_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAIL_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_REPLY_SUBJECT: &str = "Thank you for contacting us";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {var}")]
    Missing { var: &'static str },
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Deployment environment. Development exposes upstream error details in
/// `500` bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

/// Azure AD app registration used for the client-credentials grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphCredentials {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailProvider {
    Graph(GraphCredentials),
    Resend { api_key: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailConfig {
    pub provider: MailProvider,
    /// Sending mailbox. For Graph this is also the user whose mailbox sends.
    pub from: String,
    /// Internal inbox that receives new-inquiry notifications.
    pub notify_to: String,
    pub reply_subject: String,
    pub timeouts: MailTimeouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub environment: Environment,
    /// `Ok(None)` when `MAIL_PROVIDER` is unset. An `Err` is kept rather than
    /// failing the whole config so the site still starts with mail disabled.
    pub mail: Result<Option<MailConfig>, ConfigError>,
}

impl AppConfig {
    /// Build typed config from process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `PORT` or `APP_ENV` is malformed. Mail
    /// problems land in [`AppConfig::mail`] instead.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// Keys:
    /// - `PORT` (default 3000)
    /// - `APP_ENV`: `development` | `production` (default)
    /// - `MAIL_PROVIDER`: `graph` | `resend` | unset
    /// - `MAIL_FROM`, `MAIL_NOTIFY_TO`: required when a provider is set
    /// - `MAIL_REPLY_SUBJECT`: auto-reply subject line
    /// - `GRAPH_TENANT_ID`, `GRAPH_CLIENT_ID`, `GRAPH_CLIENT_SECRET`
    /// - `RESEND_API_KEY`
    /// - `MAIL_REQUEST_TIMEOUT_SECS` (default 30), `MAIL_CONNECT_TIMEOUT_SECS` (default 10)
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let environment = parse_environment(lookup("APP_ENV").as_deref())?;
        let mail = parse_mail(&lookup);
        Ok(Self { port, environment, mail })
    }

    #[must_use]
    pub fn expose_error_details(&self) -> bool {
        self.environment == Environment::Development
    }
}

fn parse_environment(raw: Option<&str>) -> Result<Environment, ConfigError> {
    match raw.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("" | "production" | "prod") => Ok(Environment::Production),
        Some("development" | "dev") => Ok(Environment::Development),
        Some(other) => Err(ConfigError::Invalid { var: "APP_ENV", value: other.to_owned() }),
    }
}

fn parse_mail<F>(lookup: &F) -> Result<Option<MailConfig>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(kind) = non_empty(lookup, "MAIL_PROVIDER") else {
        return Ok(None);
    };
    let provider = match kind.to_ascii_lowercase().as_str() {
        "graph" => MailProvider::Graph(GraphCredentials {
            tenant_id: required(lookup, "GRAPH_TENANT_ID")?,
            client_id: required(lookup, "GRAPH_CLIENT_ID")?,
            client_secret: required(lookup, "GRAPH_CLIENT_SECRET")?,
        }),
        "resend" => MailProvider::Resend { api_key: required(lookup, "RESEND_API_KEY")? },
        _ => return Err(ConfigError::Invalid { var: "MAIL_PROVIDER", value: kind }),
    };

    Ok(Some(MailConfig {
        provider,
        from: required(lookup, "MAIL_FROM")?,
        notify_to: required(lookup, "MAIL_NOTIFY_TO")?,
        reply_subject: non_empty(lookup, "MAIL_REPLY_SUBJECT").unwrap_or_else(|| DEFAULT_REPLY_SUBJECT.to_owned()),
        timeouts: MailTimeouts {
            request_secs: parse_or(lookup, "MAIL_REQUEST_TIMEOUT_SECS", DEFAULT_MAIL_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(lookup, "MAIL_CONNECT_TIMEOUT_SECS", DEFAULT_MAIL_CONNECT_TIMEOUT_SECS),
        },
    }))
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key).ok_or(ConfigError::Missing { var: key })
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

/// Directory served for static files not claimed by a route.
///
/// `SITE_ASSETS_DIR` wins; otherwise the Leptos site root is used.
#[must_use]
pub fn site_assets_dir(site_root: &str) -> PathBuf {
    std::env::var("SITE_ASSETS_DIR").map_or_else(|_| PathBuf::from(site_root), PathBuf::from)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

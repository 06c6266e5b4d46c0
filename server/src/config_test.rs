use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

const GRAPH_ENV: &[(&str, &str)] = &[
    ("MAIL_PROVIDER", "graph"),
    ("GRAPH_TENANT_ID", "tenant"),
    ("GRAPH_CLIENT_ID", "client"),
    ("GRAPH_CLIENT_SECRET", "secret"),
    ("MAIL_FROM", "web@wireworks.test"),
    ("MAIL_NOTIFY_TO", "sales@wireworks.test"),
];

#[test]
fn defaults_without_any_env() {
    let cfg = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.environment, Environment::Production);
    assert_eq!(cfg.mail, Ok(None));
    assert!(!cfg.expose_error_details());
}

#[test]
fn development_env_exposes_details() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "Development")])).unwrap();
    assert_eq!(cfg.environment, Environment::Development);
    assert!(cfg.expose_error_details());
}

#[test]
fn invalid_app_env_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("APP_ENV", "staging")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "APP_ENV", value: "staging".to_owned() });
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn graph_provider_parses_credentials_and_defaults() {
    let cfg = AppConfig::from_lookup(lookup_from(GRAPH_ENV)).unwrap();
    let mail = cfg.mail.unwrap().unwrap();
    assert_eq!(
        mail.provider,
        MailProvider::Graph(GraphCredentials {
            tenant_id: "tenant".to_owned(),
            client_id: "client".to_owned(),
            client_secret: "secret".to_owned(),
        })
    );
    assert_eq!(mail.from, "web@wireworks.test");
    assert_eq!(mail.notify_to, "sales@wireworks.test");
    assert_eq!(mail.reply_subject, DEFAULT_REPLY_SUBJECT);
    assert_eq!(
        mail.timeouts,
        MailTimeouts { request_secs: DEFAULT_MAIL_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_MAIL_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn graph_provider_requires_secret() {
    let pairs: Vec<_> = GRAPH_ENV
        .iter()
        .copied()
        .filter(|(k, _)| *k != "GRAPH_CLIENT_SECRET")
        .collect();
    let cfg = AppConfig::from_lookup(lookup_from(&pairs)).unwrap();
    assert_eq!(cfg.mail, Err(ConfigError::Missing { var: "GRAPH_CLIENT_SECRET" }));
}

#[test]
fn provider_without_credentials_keeps_rest_of_config() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("MAIL_PROVIDER", "graph")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.mail, Err(ConfigError::Missing { var: "GRAPH_TENANT_ID" }));
}

#[test]
fn resend_without_sender_is_a_mail_error() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("MAIL_PROVIDER", "resend"), ("RESEND_API_KEY", "re_123")])).unwrap();
    assert_eq!(cfg.mail, Err(ConfigError::Missing { var: "MAIL_FROM" }));
}

#[test]
fn resend_provider_and_overrides() {
    let cfg = AppConfig::from_lookup(lookup_from(&[
        ("MAIL_PROVIDER", "RESEND"),
        ("RESEND_API_KEY", "re_123"),
        ("MAIL_FROM", "web@wireworks.test"),
        ("MAIL_NOTIFY_TO", "sales@wireworks.test"),
        ("MAIL_REPLY_SUBJECT", "We got your message"),
        ("MAIL_REQUEST_TIMEOUT_SECS", "5"),
        ("MAIL_CONNECT_TIMEOUT_SECS", "not-a-number"),
    ]))
    .unwrap();
    let mail = cfg.mail.unwrap().unwrap();
    assert_eq!(mail.provider, MailProvider::Resend { api_key: "re_123".to_owned() });
    assert_eq!(mail.reply_subject, "We got your message");
    assert_eq!(mail.timeouts.request_secs, 5);
    assert_eq!(mail.timeouts.connect_secs, DEFAULT_MAIL_CONNECT_TIMEOUT_SECS);
}

#[test]
fn unknown_provider_is_rejected() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("MAIL_PROVIDER", "smtp")])).unwrap();
    assert_eq!(cfg.mail, Err(ConfigError::Invalid { var: "MAIL_PROVIDER", value: "smtp".to_owned() }));
}

#[test]
fn blank_provider_means_mail_disabled() {
    let cfg = AppConfig::from_lookup(lookup_from(&[("MAIL_PROVIDER", "  ")])).unwrap();
    assert_eq!(cfg.mail, Ok(None));
}

mod config;
mod mail;
mod routes;
mod services;
mod state;

use crate::config::AppConfig;
use crate::services::contact::MailRouting;
use crate::state::{AppState, MailService};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().expect("invalid configuration");

    // Mail is optional: without it the site renders and the contact route fails closed.
    let mail = match &config.mail {
        Ok(Some(mail_config)) => match mail::from_config(mail_config) {
            Ok(mailer) => {
                tracing::info!(provider = mailer.provider(), notify_to = %mail_config.notify_to, "mail client initialized");
                Some(MailService {
                    mailer,
                    routing: MailRouting {
                        notify_to: mail_config.notify_to.clone(),
                        reply_subject: mail_config.reply_subject.clone(),
                    },
                })
            }
            Err(e) => {
                tracing::warn!(error = %e, "mail client failed to initialize; contact delivery disabled");
                None
            }
        },
        Ok(None) => {
            tracing::warn!("MAIL_PROVIDER not set; contact delivery disabled");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "mail configuration invalid; contact delivery disabled");
            None
        }
    };

    let state = AppState::new(mail, config.expose_error_details());

    let app = routes::leptos_app(state).expect("failed to build router");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, environment = ?config.environment, "wireworks site listening");
    axum::serve(listener, app).await.expect("server failed");
}

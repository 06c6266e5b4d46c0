use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::{Form, Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};

use super::*;

fn credentials() -> GraphCredentials {
    GraphCredentials {
        tenant_id: "tenant-1".to_owned(),
        client_id: "client-1".to_owned(),
        client_secret: "secret-1".to_owned(),
    }
}

fn timeouts() -> MailTimeouts {
    MailTimeouts { request_secs: 5, connect_secs: 5 }
}

fn sample_email(subject: &str) -> OutboundEmail {
    OutboundEmail {
        to: "buyer@example.com".to_owned(),
        reply_to: None,
        subject: subject.to_owned(),
        body: EmailBody::Text("hello".to_owned()),
    }
}

// =============================================================================
// Pure helpers
// =============================================================================

#[test]
fn urls_use_tenant_and_sender() {
    let mailer = GraphMailer::new(credentials(), "web@wireworks.test".to_owned(), timeouts()).unwrap();
    assert_eq!(mailer.token_url(), "https://login.microsoftonline.com/tenant-1/oauth2/v2.0/token");
    assert_eq!(mailer.send_mail_url(), "https://graph.microsoft.com/v1.0/users/web@wireworks.test/sendMail");

    let mailer = mailer.with_base_urls("http://login.local/", "http://graph.local/v1.0/");
    assert_eq!(mailer.token_url(), "http://login.local/tenant-1/oauth2/v2.0/token");
    assert_eq!(mailer.send_mail_url(), "http://graph.local/v1.0/users/web@wireworks.test/sendMail");
}

#[test]
fn payload_for_text_message() {
    let payload = send_mail_payload(&sample_email("New inquiry"));
    assert_eq!(payload["message"]["subject"], "New inquiry");
    assert_eq!(payload["message"]["body"]["contentType"], "Text");
    assert_eq!(payload["message"]["toRecipients"][0]["emailAddress"]["address"], "buyer@example.com");
    assert!(payload["message"].get("replyTo").is_none());
    assert_eq!(payload["saveToSentItems"], true);
}

#[test]
fn payload_for_html_message_with_reply_to() {
    let email = OutboundEmail {
        reply_to: Some("sales@wireworks.test".to_owned()),
        body: EmailBody::Html("<p>hi</p>".to_owned()),
        ..sample_email("Thanks")
    };
    let payload = send_mail_payload(&email);
    assert_eq!(payload["message"]["body"]["contentType"], "HTML");
    assert_eq!(payload["message"]["body"]["content"], "<p>hi</p>");
    assert_eq!(payload["message"]["replyTo"][0]["emailAddress"]["address"], "sales@wireworks.test");
}

#[test]
fn cached_token_freshness_respects_margin() {
    let now = Instant::now();
    assert!(CachedToken::new("t".to_owned(), 3600, now).is_fresh(now));
    assert!(!CachedToken::new("t".to_owned(), 30, now).is_fresh(now));
    assert!(!CachedToken::new("t".to_owned(), 0, now).is_fresh(now));
}

// =============================================================================
// Against a local stand-in for the login + Graph endpoints
// =============================================================================

#[derive(Clone, Default)]
struct Upstream {
    token_calls: Arc<AtomicUsize>,
    send_calls: Arc<AtomicUsize>,
    reject_send: bool,
}

async fn token_endpoint(
    State(up): State<Upstream>,
    Path(tenant): Path<String>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    up.token_calls.fetch_add(1, Ordering::SeqCst);
    let ok = tenant == "tenant-1"
        && form.get("grant_type").map(String::as_str) == Some("client_credentials")
        && form.get("client_secret").map(String::as_str) == Some("secret-1")
        && form.get("scope").map(String::as_str) == Some(GRAPH_SCOPE);
    if !ok {
        return (StatusCode::UNAUTHORIZED, Json(serde_json::json!({ "error": "invalid_client" })));
    }
    (
        StatusCode::OK,
        Json(serde_json::json!({ "token_type": "Bearer", "expires_in": 3599, "access_token": "tok-abc" })),
    )
}

async fn send_endpoint(
    State(up): State<Upstream>,
    Path(sender): Path<String>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    up.send_calls.fetch_add(1, Ordering::SeqCst);
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer tok-abc");
    if !authorized || sender != "web@wireworks.test" || body["message"]["subject"].is_null() {
        return StatusCode::BAD_REQUEST;
    }
    if up.reject_send { StatusCode::SERVICE_UNAVAILABLE } else { StatusCode::ACCEPTED }
}

async fn spawn_upstream(up: Upstream) -> String {
    let app = Router::new()
        .route("/login/{tenant}/oauth2/v2.0/token", post(token_endpoint))
        .route("/graph/users/{sender}/sendMail", post(send_endpoint))
        .with_state(up);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn local_mailer(base: &str, creds: GraphCredentials) -> GraphMailer {
    GraphMailer::new(creds, "web@wireworks.test".to_owned(), timeouts())
        .unwrap()
        .with_base_urls(&format!("{base}/login"), &format!("{base}/graph"))
}

#[tokio::test]
async fn two_sends_share_one_token() {
    let up = Upstream::default();
    let base = spawn_upstream(up.clone()).await;
    let mailer = local_mailer(&base, credentials());

    let a = sample_email("one");
    let b = sample_email("two");
    let (ra, rb) = futures::future::join(mailer.send(&a), mailer.send(&b)).await;
    ra.unwrap();
    rb.unwrap();

    assert_eq!(up.token_calls.load(Ordering::SeqCst), 1);
    assert_eq!(up.send_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn rejected_credentials_surface_as_token_error() {
    let up = Upstream::default();
    let base = spawn_upstream(up.clone()).await;
    let bad = GraphCredentials { client_secret: "wrong".to_owned(), ..credentials() };
    let mailer = local_mailer(&base, bad);

    let err = mailer.send(&sample_email("x")).await.unwrap_err();
    assert!(matches!(err, MailError::TokenRejected { status: 401, .. }), "got {err:?}");
    assert_eq!(up.send_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_rejection_surfaces_status() {
    let up = Upstream { reject_send: true, ..Upstream::default() };
    let base = spawn_upstream(up.clone()).await;
    let mailer = local_mailer(&base, credentials());

    let err = mailer.send(&sample_email("x")).await.unwrap_err();
    assert!(matches!(err, MailError::SendRejected { status: 503, .. }), "got {err:?}");
    assert_eq!(up.send_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unreachable_login_host_is_token_request_error() {
    let mailer = GraphMailer::new(credentials(), "web@wireworks.test".to_owned(), timeouts())
        .unwrap()
        .with_base_urls("http://127.0.0.1:1", "http://127.0.0.1:1");
    let err = mailer.send(&sample_email("x")).await.unwrap_err();
    assert!(matches!(err, MailError::TokenRequest(_)), "got {err:?}");
}

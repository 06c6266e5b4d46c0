use contact::UtmParams;

use super::*;
use crate::mail::test_helpers::RecordingMailer;

fn routing() -> MailRouting {
    MailRouting { notify_to: "sales@wireworks.test".to_owned(), reply_subject: "Thank you for contacting us".to_owned() }
}

fn submission() -> ContactSubmission {
    ContactSubmission {
        first_name: "Grace".to_owned(),
        last_name: "Hopper".to_owned(),
        email: " grace@navy.test ".to_owned(),
        company: "Fleet Systems".to_owned(),
        project_type: Some("panel-wiring".to_owned()),
        message: "Need <b>twelve</b> cabinets wired & tested.".to_owned(),
        gdpr_consent: true,
        marketing_consent: true,
        ..ContactSubmission::default()
    }
}

// =========================================================================
// notification_email
// =========================================================================

#[test]
fn notification_goes_to_sales_with_reply_to_submitter() {
    let email = notification_email(&submission(), &routing(), Uuid::nil(), OffsetDateTime::UNIX_EPOCH);
    assert_eq!(email.to, "sales@wireworks.test");
    assert_eq!(email.reply_to.as_deref(), Some("grace@navy.test"));
    assert_eq!(email.subject, "New inquiry from Grace Hopper (Fleet Systems)");
}

#[test]
fn notification_text_lists_fields_and_consents() {
    let email = notification_email(&submission(), &routing(), Uuid::nil(), OffsetDateTime::UNIX_EPOCH);
    let EmailBody::Text(text) = email.body else {
        panic!("notification should be plain text");
    };
    assert!(text.contains("Reference: 00000000-0000-0000-0000-000000000000"));
    assert!(text.contains("Received: 1970-01-01T00:00:00Z"));
    assert!(text.contains("Project type: Control panel wiring"));
    assert!(text.contains("GDPR consent: Yes"));
    assert!(text.contains("Marketing consent: Yes"));
    assert!(text.contains("Attribution:\n  none"));
    assert!(text.contains("<b>twelve</b>"), "plain text is not escaped");
}

#[test]
fn notification_includes_present_utm_fields_only() {
    let s = submission().with_attribution(&UtmParams {
        source: Some("li".to_owned()),
        campaign: Some("q1".to_owned()),
        ..UtmParams::default()
    });
    let email = notification_email(&s, &routing(), Uuid::nil(), OffsetDateTime::UNIX_EPOCH);
    let EmailBody::Text(text) = email.body else {
        panic!("notification should be plain text");
    };
    assert!(text.contains("  utm_source: li\n  utm_campaign: q1"));
    assert!(!text.contains("utm_medium"));
}

#[test]
fn notification_without_project_type() {
    let s = ContactSubmission { project_type: None, ..submission() };
    let email = notification_email(&s, &routing(), Uuid::nil(), OffsetDateTime::UNIX_EPOCH);
    let EmailBody::Text(text) = email.body else {
        panic!("notification should be plain text");
    };
    assert!(text.contains("Project type: Not specified"));
}

// =========================================================================
// auto_reply_email
// =========================================================================

#[test]
fn auto_reply_goes_to_submitter_as_html() {
    let email = auto_reply_email(&submission(), &routing());
    assert_eq!(email.to, "grace@navy.test");
    assert_eq!(email.reply_to.as_deref(), Some("sales@wireworks.test"));
    assert_eq!(email.subject, "Thank you for contacting us");
    assert!(matches!(email.body, EmailBody::Html(_)));
}

#[test]
fn auto_reply_template_is_filled_and_escaped() {
    let html = render_auto_reply(&submission(), "Thanks & welcome");
    assert!(html.contains("Hello Grace,"));
    assert!(html.contains("Control panel wiring"));
    assert!(html.contains("Need &lt;b&gt;twelve&lt;/b&gt; cabinets wired &amp; tested."));
    assert!(html.contains("Thanks &amp; welcome"));
    assert!(!html.contains("{{"));
}

#[test]
fn escape_html_handles_quotes() {
    assert_eq!(escape_html(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
}

// =========================================================================
// deliver
// =========================================================================

#[tokio::test]
async fn deliver_sends_exactly_two_messages() {
    let mailer = RecordingMailer::default();
    deliver(&mailer, &routing(), &submission(), Uuid::new_v4())
        .await
        .unwrap();
    let sent = mailer.attempts();
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().any(|m| m.to == "sales@wireworks.test"));
    assert!(sent.iter().any(|m| m.to == "grace@navy.test"));
}

#[tokio::test]
async fn deliver_fails_when_auto_reply_fails_after_notification() {
    let mailer = RecordingMailer::failing_on("Thank you");
    let err = deliver(&mailer, &routing(), &submission(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DeliveryError::Send { kind: MessageKind::AutoReply, .. }));
    assert_eq!(mailer.attempts().len(), 2);
}

#[tokio::test]
async fn deliver_fails_when_notification_fails() {
    let mailer = RecordingMailer::failing_on("New inquiry");
    let err = deliver(&mailer, &routing(), &submission(), Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DeliveryError::Send { kind: MessageKind::Notification, .. }));
    assert_eq!(err.to_string(), "notification email failed: send rejected: status 503");
    assert_eq!(mailer.attempts().len(), 2);
}

//! Contact inquiry delivery.
//!
//! DESIGN
//! ======
//! A valid submission produces two messages: a plain-text notification to the
//! internal sales inbox and an HTML auto-reply to the submitter. Both are sent
//! concurrently and both run to completion; the inquiry counts as delivered
//! only when both succeed. A half-delivered inquiry is logged with the
//! message that failed so sales can follow up by hand.

use std::fmt;

use contact::{ContactSubmission, project_type_label};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::mail::{EmailBody, MailError, Mailer, OutboundEmail};

const AUTO_REPLY_TEMPLATE: &str = include_str!("../../templates/auto_reply.html");

/// Where inquiries go and how the auto-reply is titled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRouting {
    pub notify_to: String,
    pub reply_subject: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Notification,
    AutoReply,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Notification => f.write_str("notification"),
            Self::AutoReply => f.write_str("auto-reply"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("mail delivery is not configured")]
    NotConfigured,
    #[error("{kind} email failed: {source}")]
    Send {
        kind: MessageKind,
        #[source]
        source: MailError,
    },
}

// =============================================================================
// COMPOSITION
// =============================================================================

/// Plain-text notice for the sales inbox. Replies go straight to the submitter.
#[must_use]
pub fn notification_email(
    submission: &ContactSubmission,
    routing: &MailRouting,
    reference: Uuid,
    received_at: OffsetDateTime,
) -> OutboundEmail {
    let received = received_at
        .format(&Rfc3339)
        .unwrap_or_else(|_| received_at.to_string());
    let project = submission
        .project_type
        .as_deref()
        .map_or("Not specified", project_type_label);

    let utm = submission.attribution();
    let attribution = [
        ("utm_source", &utm.source),
        ("utm_medium", &utm.medium),
        ("utm_campaign", &utm.campaign),
        ("utm_term", &utm.term),
        ("utm_content", &utm.content),
    ]
    .iter()
    .filter_map(|(key, value)| value.as_deref().map(|v| format!("  {key}: {v}")))
    .collect::<Vec<_>>();
    let attribution = if attribution.is_empty() { "  none".to_owned() } else { attribution.join("\n") };

    let text = format!(
        "New contact form submission\n\n\
         Reference: {reference}\n\
         Received: {received}\n\n\
         Name: {name}\n\
         Email: {email}\n\
         Company: {company}\n\
         Project type: {project}\n\n\
         Message:\n{message}\n\n\
         GDPR consent: {gdpr}\n\
         Marketing consent: {marketing}\n\n\
         Attribution:\n{attribution}\n",
        name = submission.full_name(),
        email = submission.email.trim(),
        company = submission.company.trim(),
        message = submission.message.trim(),
        gdpr = yes_no(submission.gdpr_consent),
        marketing = yes_no(submission.marketing_consent),
    );

    OutboundEmail {
        to: routing.notify_to.clone(),
        reply_to: Some(submission.email.trim().to_owned()),
        subject: format!("New inquiry from {} ({})", submission.full_name(), submission.company.trim()),
        body: EmailBody::Text(text),
    }
}

/// HTML acknowledgement for the submitter. Replies go to the sales inbox.
#[must_use]
pub fn auto_reply_email(submission: &ContactSubmission, routing: &MailRouting) -> OutboundEmail {
    OutboundEmail {
        to: submission.email.trim().to_owned(),
        reply_to: Some(routing.notify_to.clone()),
        subject: routing.reply_subject.clone(),
        body: EmailBody::Html(render_auto_reply(submission, &routing.reply_subject)),
    }
}

#[must_use]
pub fn render_auto_reply(submission: &ContactSubmission, subject: &str) -> String {
    let project = submission
        .project_type
        .as_deref()
        .map_or("your project", project_type_label);
    AUTO_REPLY_TEMPLATE
        .replace("{{SUBJECT}}", &escape_html(subject))
        .replace("{{FIRST_NAME}}", &escape_html(submission.first_name.trim()))
        .replace("{{PROJECT_TYPE}}", &escape_html(project))
        .replace("{{MESSAGE}}", &escape_html(submission.message.trim()))
        .replace("{{EMAIL}}", &escape_html(submission.email.trim()))
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// DELIVERY
// =============================================================================

/// Send notification and auto-reply. Each is attempted exactly once.
///
/// # Errors
///
/// Returns [`DeliveryError::Send`] naming the failed message. When both
/// fail, the notification error is reported.
pub async fn deliver(
    mailer: &dyn Mailer,
    routing: &MailRouting,
    submission: &ContactSubmission,
    reference: Uuid,
) -> Result<(), DeliveryError> {
    let notification = notification_email(submission, routing, reference, OffsetDateTime::now_utc());
    let reply = auto_reply_email(submission, routing);

    let (notified, replied) = futures::future::join(mailer.send(&notification), mailer.send(&reply)).await;

    match (notified, replied) {
        (Ok(()), Ok(())) => {
            tracing::info!(%reference, provider = mailer.provider(), "inquiry delivered");
            Ok(())
        }
        (Ok(()), Err(e)) => {
            tracing::error!(%reference, error = %e, "notification delivered but auto-reply failed");
            Err(DeliveryError::Send { kind: MessageKind::AutoReply, source: e })
        }
        (Err(e), Ok(())) => {
            tracing::error!(%reference, error = %e, "auto-reply delivered but notification failed");
            Err(DeliveryError::Send { kind: MessageKind::Notification, source: e })
        }
        (Err(e), Err(reply_err)) => {
            tracing::error!(%reference, error = %e, reply_error = %reply_err, "inquiry delivery failed");
            Err(DeliveryError::Send { kind: MessageKind::Notification, source: e })
        }
    }
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;

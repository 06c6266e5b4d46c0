//! Resend mail client.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use super::{EmailBody, MailError, Mailer, OutboundEmail};

pub struct ResendMailer {
    client: Resend,
    from: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(api_key: &str, from: String) -> Self {
        Self { client: Resend::new(api_key), from }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    fn provider(&self) -> &'static str {
        "resend"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let to = [email.to.as_str()];
        let mut options = CreateEmailBaseOptions::new(&self.from, to, &email.subject);
        options = match &email.body {
            EmailBody::Text(text) => options.with_text(text),
            EmailBody::Html(html) => options.with_html(html),
        };
        if let Some(reply_to) = &email.reply_to {
            options = options.with_reply(reply_to);
        }
        self.client
            .emails
            .send(options)
            .await
            .map_err(|e| MailError::SendRequest(e.to_string()))?;
        Ok(())
    }
}

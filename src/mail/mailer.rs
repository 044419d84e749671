//! Mailer trait and SMTP implementation.

use std::fs;
use std::time::Duration;

use lettre::message::header::ContentType;
use lettre::message::{Attachment as InlinePart, Mailbox, MultiPart, SinglePart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

use super::{Email, MailError};
use crate::config::MailSettings;

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking mail submission.
pub(crate) trait Mailer {
    fn send(&self, email: &Email) -> Result<(), MailError>;
}

/// SMTP relay mailer using lettre.
///
/// Construction never fails: a bad relay or sender address surfaces as an
/// error on every `send`, so the rest of the run still happens.
pub(crate) struct SmtpMailer {
    transport: Result<SmtpTransport, String>,
    sender: String,
    sender_name: String,
}

impl SmtpMailer {
    pub(crate) fn new(settings: &MailSettings) -> Self {
        let builder = match settings.smtp_tls.as_str() {
            "none" => Ok(SmtpTransport::builder_dangerous(&settings.smtp_host)),
            "starttls" => SmtpTransport::starttls_relay(&settings.smtp_host),
            _ => SmtpTransport::relay(&settings.smtp_host),
        };

        let transport = builder
            .map(|builder| {
                builder
                    .port(settings.smtp_port)
                    .timeout(Some(SMTP_TIMEOUT))
                    .credentials(Credentials::new(
                        settings.sender.clone(),
                        settings.password.clone(),
                    ))
                    .build()
            })
            .map_err(|e| e.to_string());

        if let Err(e) = &transport {
            tracing::error!("SMTP relay {} unusable: {}", settings.smtp_host, e);
        }

        Self {
            transport,
            sender: settings.sender.clone(),
            sender_name: settings.sender_name.clone(),
        }
    }

    /// Build a lettre Message from our Email type.
    fn build_message(&self, email: &Email) -> Result<Message, MailError> {
        let from = Mailbox::new(
            Some(self.sender_name.clone()),
            self.sender
                .parse()
                .map_err(|_| MailError::InvalidAddress(self.sender.clone()))?,
        );
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let builder = Message::builder()
            .from(from)
            .to(to)
            .subject(&email.subject);

        let html = SinglePart::html(email.html.clone());
        let message = if email.attachments.is_empty() {
            builder.singlepart(html)
        } else {
            let mut related = MultiPart::related().singlepart(html);
            for attachment in &email.attachments {
                let bytes = fs::read(&attachment.path).map_err(|source| MailError::Attachment {
                    path: attachment.path.display().to_string(),
                    source,
                })?;
                let content_type = ContentType::parse(attachment.mime_type())
                    .map_err(|e| MailError::Build(e.to_string()))?;
                related = related.singlepart(
                    InlinePart::new_inline(attachment.content_id.clone()).body(bytes, content_type),
                );
            }
            builder.multipart(related)
        };

        message.map_err(|e| MailError::Build(e.to_string()))
    }
}

impl Mailer for SmtpMailer {
    fn send(&self, email: &Email) -> Result<(), MailError> {
        let transport = self.transport.as_ref().map_err(|e| MailError::Smtp(e.clone()))?;
        let message = self.build_message(email)?;

        transport
            .send(&message)
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        Ok(())
    }
}

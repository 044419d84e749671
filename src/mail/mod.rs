//! Email composition and delivery.
//!
//! A thin layer over [lettre](https://lettre.rs): the dispatcher decides who
//! gets what, the mailer submits one message per recipient over SMTP.

mod dispatch;
pub(crate) mod mailer;
mod message;
mod recipients;

pub(crate) use dispatch::{DispatchOutcome, Dispatcher};
pub(crate) use mailer::{Mailer, SmtpMailer};
pub(crate) use message::Email;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum MailError {
    #[error("invalid email address: {0}")]
    InvalidAddress(String),

    #[error("failed to read attachment {path}: {source}")]
    Attachment {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build message: {0}")]
    Build(String),

    #[error("SMTP error: {0}")]
    Smtp(String),
}

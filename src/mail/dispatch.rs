//! Compose and send the photo mail, or the "no photos" notice to admins.

use maud::html;

use super::mailer::Mailer;
use super::message::{Attachment, Email};
use super::recipients::effective_recipients;
use crate::config::MailSettings;
use crate::dates::TimeWindow;
use crate::imaging;
use crate::report::BatchReport;
use crate::utils::ScratchDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DispatchOutcome {
    /// Scratch storage was empty, nothing to mail.
    NoPhotos,
    /// Photos were ready but the effective recipient set is empty.
    NoRecipients,
    Sent(BatchReport),
}

pub(crate) struct Dispatcher<'a, M: Mailer> {
    settings: &'a MailSettings,
    mailer: &'a M,
    scratch: &'a ScratchDir,
}

impl<'a, M: Mailer> Dispatcher<'a, M> {
    pub(crate) fn new(settings: &'a MailSettings, mailer: &'a M, scratch: &'a ScratchDir) -> Self {
        Self {
            settings,
            mailer,
            scratch,
        }
    }

    /// Mail everything in scratch storage, stamped with `label`, to the
    /// effective recipient set.
    pub(crate) fn compose_and_send(&self, label: &str, window: &TimeWindow) -> DispatchOutcome {
        let files = self.scratch.files();
        if files.is_empty() {
            tracing::info!("No photos in {}", self.scratch.path().display());
            return DispatchOutcome::NoPhotos;
        }
        tracing::info!("Preparing mail with {} photo(s)", files.len());

        let heading = window.heading(self.settings.lang);
        let mut attachments = Vec::with_capacity(files.len());
        for path in files {
            if let Err(e) = imaging::annotate(&path, label) {
                tracing::warn!("Could not add text to {}: {}", path.display(), e);
            }
            attachments.push(Attachment::inline(path));
        }
        let body = photos_body(&heading, &attachments);

        let recipients =
            effective_recipients(&self.settings.recipients, &self.settings.admin_recipients);
        if recipients.is_empty() {
            tracing::error!("Could not send mail: no recipients configured");
            return DispatchOutcome::NoRecipients;
        }

        DispatchOutcome::Sent(self.send_each(&recipients, &heading, &body, &attachments))
    }

    /// Tell the admins nothing matched today. No-op without admins.
    pub(crate) fn notify_admins_no_photos(&self, window: &TimeWindow) -> BatchReport {
        let admins = &self.settings.admin_recipients;
        if admins.is_empty() {
            return BatchReport::default();
        }
        tracing::info!("Sending no-photos notice to {} admin(s)", admins.len());

        let heading = window.heading(self.settings.lang);
        let body = html! {
            h2 { (heading) }
            h2 { (self.settings.lang.no_photos()) }
        }
        .into_string();

        self.send_each(admins, &heading, &body, &[])
    }

    fn send_each(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
        attachments: &[Attachment],
    ) -> BatchReport {
        let mut report = BatchReport::default();
        for to in recipients {
            let email = Email {
                to: to.clone(),
                subject: subject.to_string(),
                html: body.to_string(),
                attachments: attachments.to_vec(),
            };
            match self.mailer.send(&email) {
                Ok(()) => {
                    tracing::info!("Sent mail to {to}");
                    report.record_ok(to);
                }
                Err(e) => {
                    tracing::warn!("Could not send mail to {to}: {e}");
                    report.record_err(to, e);
                }
            }
        }
        report
    }
}

fn photos_body(heading: &str, attachments: &[Attachment]) -> String {
    html! {
        h2 { (heading) }
        @for attachment in attachments {
            div {
                p { "Name: " (attachment.filename) }
                img src=(format!("cid:{}", attachment.content_id));
            }
        }
    }
    .into_string()
}

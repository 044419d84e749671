use std::path::PathBuf;

/// Inline image referenced from the HTML body as `cid:<content_id>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Attachment {
    pub(crate) filename: String,
    pub(crate) path: PathBuf,
    pub(crate) content_id: String,
}

impl Attachment {
    /// Content id is the file name up to its first `.`.
    pub(crate) fn inline(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_id = filename.split('.').next().unwrap_or_default().to_string();
        Self {
            filename,
            path,
            content_id,
        }
    }

    pub(crate) fn mime_type(&self) -> &'static str {
        let ext = self
            .filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "heic" => "image/heic",
            _ => "application/octet-stream",
        }
    }
}

/// One message to one recipient; the sender comes from the mailer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Email {
    pub(crate) to: String,
    pub(crate) subject: String,
    pub(crate) html: String,
    pub(crate) attachments: Vec<Attachment>,
}

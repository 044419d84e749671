use super::PhotoApi;
use super::client::{ApiRequest, Transport};
use super::session::SessionToken;
use super::types::{PhotoRecord, Thumbnail};
use crate::consts::THUMBNAIL_SIZE;
use crate::report::BatchReport;
use crate::utils::ScratchDir;

impl<T: Transport> PhotoApi<'_, T> {
    fn thumbnail_request(&self, token: &SessionToken, thumbnail: &Thumbnail) -> ApiRequest {
        ApiRequest::new(self.settings.entry_url())
            .param("_sid", token.sid())
            .param("api", "SYNO.FotoTeam.Thumbnail")
            .param("method", "get")
            .param("version", 1)
            .param("cache_key", &thumbnail.cache_key)
            .param("id", thumbnail.unit_id)
            .param("size", THUMBNAIL_SIZE)
            .param("type", "unit")
    }

    /// Download every thumbnail into `scratch`. A failed photo is recorded
    /// and the remaining downloads still run.
    pub(crate) fn fetch_all(
        &self,
        token: &SessionToken,
        photos: &[PhotoRecord],
        scratch: &ScratchDir,
    ) -> BatchReport {
        let mut report = BatchReport::default();

        for photo in photos {
            let Some(thumbnail) = &photo.additional.thumbnail else {
                tracing::warn!("{} has no thumbnail descriptor", photo.filename);
                report.record_err(&photo.filename, "missing thumbnail descriptor");
                continue;
            };

            tracing::debug!("Fetching thumbnail of item {:?}", photo.id);
            let request = self.thumbnail_request(token, thumbnail);
            let saved = self
                .transport
                .get_bytes(&request)
                .map_err(|e| e.to_string())
                .and_then(|bytes| {
                    scratch
                        .write(&photo.filename, &bytes)
                        .map_err(|e| e.to_string())
                });

            match saved {
                Ok(path) => {
                    tracing::info!("Downloaded image: {}", path.display());
                    report.record_ok(&photo.filename);
                }
                Err(reason) => {
                    tracing::warn!("Could not download {}: {}", photo.filename, reason);
                    report.record_err(&photo.filename, reason);
                }
            }
        }

        report
    }
}

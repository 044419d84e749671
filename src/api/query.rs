use serde_json::Value;

use super::PhotoApi;
use super::client::{ApiRequest, Transport};
use super::session::SessionToken;
use super::types::{ListData, PhotoRecord, Tag, decode};
use crate::consts::{PHOTO_PAGE_SIZE, TAG_LIST_LIMIT};
use crate::dates::TimeWindow;
use crate::utils::Timezone;

impl<T: Transport> PhotoApi<'_, T> {
    fn entry_request(&self, api: &str, method: &str, token: &SessionToken) -> ApiRequest {
        ApiRequest::new(self.settings.entry_url())
            .param("api", api)
            .param("method", method)
            .param("version", 1)
            .param("_sid", token.sid())
    }

    /// Ids of the tags whose name is in `wanted`; empty on any error.
    pub(crate) fn list_tag_ids(&self, token: &SessionToken, wanted: &[String]) -> Vec<String> {
        if wanted.is_empty() {
            return Vec::new();
        }
        tracing::info!("Looking for tags {:?}", wanted);

        let request = self
            .entry_request("SYNO.FotoTeam.Browse.GeneralTag", "list", token)
            .param("offset", 0)
            .param("limit", TAG_LIST_LIMIT);

        let tags = match self.transport.get_json(&request).and_then(decode::<ListData<Tag>>) {
            Ok(data) => data.list,
            Err(e) => {
                tracing::warn!("Could not list tags: {e}");
                return Vec::new();
            }
        };

        let ids: Vec<String> = tags
            .iter()
            .filter(|tag| wanted.contains(&tag.name))
            .filter_map(Tag::id_string)
            .collect();
        tracing::info!("Found tag id(s) {:?}", ids);
        ids
    }

    /// Photos taken inside `window`, OR-filtered by `tag_ids` when given.
    pub(crate) fn query_photos(
        &self,
        token: &SessionToken,
        window: &TimeWindow,
        tag_ids: &[String],
        timezone: Timezone,
    ) -> Vec<PhotoRecord> {
        let (start, end) = window.timestamps(timezone);

        let mut request = self
            .entry_request("SYNO.FotoTeam.Browse.Item", "list_with_filter", token)
            .param("offset", 0)
            .param("limit", PHOTO_PAGE_SIZE)
            .param("additional", r#"["thumbnail"]"#)
            .param("time", format!(r#"[{{"start_time":{start},"end_time":{end}}}]"#))
            .param("item_type", "[0]");
        if !tag_ids.is_empty() {
            request = request
                .param("general_tag", format!("[{}]", tag_ids.join(",")))
                .param("general_tag_policy", "or");
        }

        let items = match self
            .transport
            .get_json(&request)
            .and_then(decode::<ListData<Value>>)
        {
            Ok(data) => data.list,
            Err(e) => {
                tracing::warn!("Photo query failed: {e}");
                return Vec::new();
            }
        };

        // one malformed item must not hide the rest
        let photos: Vec<PhotoRecord> = items
            .into_iter()
            .filter_map(|item| match serde_json::from_value::<PhotoRecord>(item) {
                Ok(photo) => Some(photo),
                Err(e) => {
                    tracing::warn!("Skipping unreadable photo record: {e}");
                    None
                }
            })
            .collect();
        tracing::info!("Found {} photo(s)", photos.len());
        photos
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::fake::FakeTransport;
    use crate::config::test_config;
    use crate::dates::selector::YearPick;
    use chrono::NaiveDate;
    use serde_json::json;

    fn token() -> SessionToken {
        SessionToken::Authenticated("sid-1".to_string())
    }

    fn window() -> TimeWindow {
        let start = NaiveDate::from_ymd_opt(2021, 6, 10).unwrap();
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        TimeWindow::new(start, today, YearPick::Accepted(2021))
    }

    const UTC: Timezone = Timezone::Named(chrono_tz::UTC);

    #[test]
    fn tag_ids_filtered_by_name() {
        let config = test_config(&[]);
        let transport = FakeTransport::default().with_json(
            "SYNO.FotoTeam.Browse.GeneralTag.list",
            json!({"success": true, "data": {"list": [
                {"id": 1, "name": "Holiday"},
                {"id": 2, "name": "Work"},
                {"id": 3, "name": "Family"}
            ]}}),
        );
        let api = PhotoApi::new(&config.api, &transport);

        let ids = api.list_tag_ids(&token(), &["Family".to_string(), "Holiday".to_string()]);
        assert_eq!(ids, vec!["1", "3"]);

        let call = &transport.calls_to("SYNO.FotoTeam.Browse.GeneralTag.list")[0];
        assert_eq!(call.get("limit"), Some("5000"));
        assert_eq!(call.get("_sid"), Some("sid-1"));
    }

    #[test]
    fn no_configured_tags_skips_request() {
        let config = test_config(&[]);
        let transport = FakeTransport::default();
        let api = PhotoApi::new(&config.api, &transport);

        assert!(api.list_tag_ids(&token(), &[]).is_empty());
        assert!(transport.calls.borrow().is_empty());
    }

    #[test]
    fn tag_listing_error_is_empty() {
        let config = test_config(&[]);
        let transport = FakeTransport::default();
        let api = PhotoApi::new(&config.api, &transport);
        assert!(api.list_tag_ids(&token(), &["Family".to_string()]).is_empty());
    }

    #[test]
    fn photo_query_parameters() {
        let config = test_config(&[]);
        let transport = FakeTransport::default().with_json(
            "SYNO.FotoTeam.Browse.Item.list_with_filter",
            json!({"success": true, "data": {"list": [
                {"id": 1, "filename": "a.jpg", "additional": {"thumbnail": {"cache_key": "1_a", "unit_id": 1}}}
            ]}}),
        );
        let api = PhotoApi::new(&config.api, &transport);

        let photos = api.query_photos(&token(), &window(), &[], UTC);
        assert_eq!(photos.len(), 1);

        let call = &transport.calls_to("SYNO.FotoTeam.Browse.Item.list_with_filter")[0];
        assert_eq!(call.get("offset"), Some("0"));
        assert_eq!(call.get("limit"), Some("10"));
        assert_eq!(call.get("additional"), Some(r#"["thumbnail"]"#));
        assert_eq!(
            call.get("time"),
            Some(r#"[{"start_time":1623283200,"end_time":1623369600}]"#)
        );
        assert_eq!(call.get("item_type"), Some("[0]"));
        assert_eq!(call.get("general_tag"), None);
        assert_eq!(call.get("general_tag_policy"), None);
    }

    #[test]
    fn photo_query_with_tags_uses_or_policy() {
        let config = test_config(&[]);
        let transport = FakeTransport::default().with_json(
            "SYNO.FotoTeam.Browse.Item.list_with_filter",
            json!({"success": true, "data": {"list": []}}),
        );
        let api = PhotoApi::new(&config.api, &transport);

        let photos = api.query_photos(&token(), &window(), &["1".into(), "3".into()], UTC);
        assert!(photos.is_empty());

        let call = &transport.calls_to("SYNO.FotoTeam.Browse.Item.list_with_filter")[0];
        assert_eq!(call.get("general_tag"), Some("[1,3]"));
        assert_eq!(call.get("general_tag_policy"), Some("or"));
    }

    #[test]
    fn photo_query_failure_is_empty() {
        let config = test_config(&[]);
        let transport = FakeTransport::default().with_json(
            "SYNO.FotoTeam.Browse.Item.list_with_filter",
            json!({"success": false, "error": {"code": 119}}),
        );
        let api = PhotoApi::new(&config.api, &transport);
        assert!(api
            .query_photos(&SessionToken::Unauthenticated, &window(), &[], UTC)
            .is_empty());
        assert_eq!(
            transport.calls_to("SYNO.FotoTeam.Browse.Item.list_with_filter")[0].get("_sid"),
            Some("-1")
        );
    }

    #[test]
    fn malformed_items_are_skipped_not_fatal() {
        let config = test_config(&[]);
        let transport = FakeTransport::default().with_json(
            "SYNO.FotoTeam.Browse.Item.list_with_filter",
            json!({"success": true, "data": {"list": [
                {"id": 1, "filename": "a.jpg"},
                {"id": 2},
                {"id": 3, "filename": "c.jpg", "additional": {"thumbnail": {"cache_key": "3_c", "unit_id": 3}}}
            ]}}),
        );
        let api = PhotoApi::new(&config.api, &transport);

        let photos = api.query_photos(&token(), &window(), &[], UTC);
        let names: Vec<&str> = photos.iter().map(|p| p.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "c.jpg"]);
        assert!(photos[0].additional.thumbnail.is_none());
    }
}

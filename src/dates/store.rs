//! Used-date store
//!
//! Flat append log of `YYYY-MM-DD` strings persisted as `{"dates": [...]}`.
//! The store never deduplicates or validates; callers check before appending.

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use crate::error::StateError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct UsedDates {
    #[serde(default)]
    pub(crate) dates: Vec<String>,
}

impl UsedDates {
    pub(crate) fn contains(&self, key: &str) -> bool {
        self.dates.iter().any(|d| d == key)
    }

    pub(crate) fn push(&mut self, key: String) {
        self.dates.push(key);
    }
}

#[derive(Debug, Clone)]
pub(crate) struct DateStore {
    path: PathBuf,
}

impl DateStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Missing, unreadable or corrupt state all load as empty.
    pub(crate) fn load(&self) -> UsedDates {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(_) => {
                tracing::info!("Dates used file {} not found", self.path.display());
                return UsedDates::default();
            }
        };
        match serde_json::from_reader::<_, UsedDates>(file) {
            Ok(used) => {
                tracing::info!("Dates used read ({} entries)", used.dates.len());
                used
            }
            Err(e) => {
                tracing::warn!(
                    "Dates used file {} is unreadable ({}), starting empty",
                    self.path.display(),
                    e
                );
                UsedDates::default()
            }
        }
    }

    pub(crate) fn save(&self, used: &UsedDates) -> Result<(), StateError> {
        let data = serde_json::to_vec(used)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            let _ = fs::create_dir_all(parent);
        }
        fs::write(&self.path, data).map_err(|source| StateError::Write {
            path: self.path.display().to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DateStore::new(tmp.path().join("datesused.json"));
        assert!(store.load().dates.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("datesused.json");
        fs::write(&path, "{\"dates\": [1, 2").unwrap();
        assert!(DateStore::new(&path).load().dates.is_empty());

        fs::write(&path, "").unwrap();
        assert!(DateStore::new(&path).load().dates.is_empty());
    }

    #[test]
    fn object_without_dates_loads_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("datesused.json");
        fs::write(&path, "{}").unwrap();
        assert!(DateStore::new(&path).load().dates.is_empty());
    }

    #[test]
    fn append_and_reload_keeps_order() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DateStore::new(tmp.path().join("state").join("datesused.json"));

        let mut used = store.load();
        used.push("2019-06-10".to_string());
        used.push("2012-06-10".to_string());
        store.save(&used).unwrap();

        let mut reloaded = store.load();
        assert_eq!(reloaded.dates, vec!["2019-06-10", "2012-06-10"]);

        reloaded.push("2015-06-10".to_string());
        store.save(&reloaded).unwrap();
        assert_eq!(store.load().dates[2], "2015-06-10");
    }

    #[test]
    fn duplicates_are_kept() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DateStore::new(tmp.path().join("datesused.json"));
        let used = UsedDates {
            dates: vec!["2019-06-10".into(), "2019-06-10".into()],
        };
        store.save(&used).unwrap();
        assert_eq!(store.load(), used);
    }

    #[test]
    fn writes_the_documented_shape() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("datesused.json");
        let store = DateStore::new(&path);
        store
            .save(&UsedDates {
                dates: vec!["2019-06-10".into()],
            })
            .unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            r#"{"dates":["2019-06-10"]}"#
        );
    }

    #[test]
    fn save_into_directory_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let store = DateStore::new(tmp.path());
        let err = store.save(&UsedDates::default()).unwrap_err();
        assert!(matches!(err, StateError::Write { .. }));
    }
}

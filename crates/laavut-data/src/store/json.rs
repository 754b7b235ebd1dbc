use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use super::{LocationSnapshot, LocationStore};
use crate::{DATA_DIR, Result, location::Location};

pub const SNAPSHOT_FILE_NAME: &str = "locations.json";

/// Store backed by a JSON array of [`Location`]s, read once on open.
///
/// The save time is the file's modification time. A missing file opens as an
/// empty store so a first launch simply reports that a refresh is needed.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    snapshot: Option<LocationSnapshot>,
    saved_at: Option<DateTime<Utc>>,
}

impl JsonFileStore {
    #[instrument(name = "Open JSON location store", level = "info", skip_all, fields(path = ?path.as_ref()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            info!("No cached snapshot yet");
            return Ok(Self {
                path,
                snapshot: None,
                saved_at: None,
            });
        }

        let raw = fs::read_to_string(&path)?;
        let locations: Vec<Location> = serde_json::from_str(&raw)?;
        let saved_at = fs::metadata(&path)?.modified().ok().map(DateTime::<Utc>::from);

        info!(locations = locations.len(), ?saved_at, "Loaded cached snapshot");

        Ok(Self {
            path,
            snapshot: Some(locations.into()),
            saved_at,
        })
    }

    /// Open the snapshot in [`DATA_DIR`].
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path())
    }

    #[must_use]
    pub fn default_path() -> PathBuf {
        DATA_DIR.join(SNAPSHOT_FILE_NAME)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LocationStore for JsonFileStore {
    fn snapshot(&self) -> Option<LocationSnapshot> {
        self.snapshot.clone()
    }

    fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved_at
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{DataError, test_data};

    #[test]
    fn test_missing_file_is_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("nope.json")).unwrap();
        assert!(store.snapshot().is_none());
        assert!(store.needs_refresh());
    }

    #[test]
    fn test_loads_written_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let locations = test_data::sample_locations();
        file.write_all(serde_json::to_string(&locations).unwrap().as_bytes())
            .unwrap();

        let store = JsonFileStore::open(file.path()).unwrap();
        let snapshot = store.snapshot().unwrap();

        assert_eq!(snapshot.locations(), locations.as_slice());
        assert!(store.saved_at().is_some());
        assert!(!store.needs_refresh());
    }

    #[test]
    fn test_reads_hand_written_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            br#"[
                {"title": "Kuusilaavu", "subtitle": "Laavu maastossa",
                 "latitude": 61.2, "longitude": 25.1,
                 "time": "2016-08-01T08:00:00Z", "comment": null}
            ]"#,
        )
        .unwrap();

        let store = JsonFileStore::open(file.path()).unwrap();
        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].title(), Some("Kuusilaavu"));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        let err = JsonFileStore::open(file.path()).unwrap_err();
        assert!(matches!(err, DataError::Serde(_)));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        assert!(JsonFileStore::default_path().ends_with(SNAPSHOT_FILE_NAME));
    }
}

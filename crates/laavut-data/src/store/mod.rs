//! Cached location snapshots.
//!
//! A [`LocationStore`] hands out immutable [`LocationSnapshot`]s. Whatever
//! fetches the remote feed writes into a store; searches only ever read a
//! snapshot, so a refresh in the middle of a search never changes its input.

use std::{
    ops::Deref,
    sync::{Arc, PoisonError, RwLock},
};

use chrono::{DateTime, Utc};
use tracing::info;

use crate::{freshness, location::Location};

mod json;

pub use json::JsonFileStore;

/// Cheaply clonable, read-only view of the cached locations.
#[derive(Debug, Clone, Default)]
pub struct LocationSnapshot(Arc<[Location]>);

impl LocationSnapshot {
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.0
    }
}

impl Deref for LocationSnapshot {
    type Target = [Location];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Location>> for LocationSnapshot {
    fn from(locations: Vec<Location>) -> Self {
        Self(locations.into())
    }
}

impl FromIterator<Location> for LocationSnapshot {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Source of the cached location set.
pub trait LocationStore: Send + Sync {
    /// Current snapshot, `None` when nothing has been cached yet.
    fn snapshot(&self) -> Option<LocationSnapshot>;

    /// When the current snapshot was written, if known.
    fn saved_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Whether the remote feed should be fetched again.
    fn needs_refresh(&self) -> bool {
        freshness::needs_refresh(self.saved_at(), Utc::now())
    }
}

/// A fixed snapshot is a store that never changes.
impl LocationStore for LocationSnapshot {
    fn snapshot(&self) -> Option<LocationSnapshot> {
        Some(self.clone())
    }
}

/// In-memory store, written by the fetch routine through [`MemoryStore::replace`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Option<Saved>>,
}

#[derive(Debug, Clone)]
struct Saved {
    snapshot: LocationSnapshot,
    saved_at: DateTime<Utc>,
}

impl MemoryStore {
    /// An empty store; [`LocationStore::snapshot`] returns `None` until the first write.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_locations(locations: Vec<Location>) -> Self {
        let store = Self::new();
        store.replace(locations);
        store
    }

    /// Install a freshly fetched location set, stamped with the current time.
    pub fn replace(&self, locations: Vec<Location>) {
        self.replace_at(locations, Utc::now());
    }

    /// Install a location set with an explicit save time.
    pub fn replace_at(&self, locations: Vec<Location>, saved_at: DateTime<Utc>) {
        let snapshot = LocationSnapshot::from(locations);
        info!(locations = snapshot.len(), %saved_at, "Replacing cached locations");
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(Saved {
            snapshot,
            saved_at,
        });
    }

    /// Drop the cached snapshot.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn saved(&self) -> Option<Saved> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LocationStore for MemoryStore {
    fn snapshot(&self) -> Option<LocationSnapshot> {
        self.saved().map(|saved| saved.snapshot)
    }

    fn saved_at(&self) -> Option<DateTime<Utc>> {
        self.saved().map(|saved| saved.saved_at)
    }
}

impl<S: LocationStore + ?Sized> LocationStore for Arc<S> {
    fn snapshot(&self) -> Option<LocationSnapshot> {
        (**self).snapshot()
    }

    fn saved_at(&self) -> Option<DateTime<Utc>> {
        (**self).saved_at()
    }

    fn needs_refresh(&self) -> bool {
        (**self).needs_refresh()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::test_data;

    #[test]
    fn test_empty_memory_store() {
        let store = MemoryStore::new();
        assert!(store.snapshot().is_none());
        assert!(store.saved_at().is_none());
        assert!(store.needs_refresh());
    }

    #[test]
    fn test_replace_installs_snapshot() {
        let store = MemoryStore::new();
        store.replace(test_data::sample_locations());

        let snapshot = store.snapshot().unwrap();
        assert_eq!(snapshot.len(), test_data::sample_locations().len());
        assert!(!store.needs_refresh());
    }

    #[test]
    fn test_old_snapshot_needs_refresh() {
        let store = MemoryStore::new();
        store.replace_at(test_data::sample_locations(), Utc::now() - Duration::days(2));
        assert!(store.needs_refresh());
    }

    #[test]
    fn test_snapshot_survives_replace() {
        let store = MemoryStore::with_locations(test_data::sample_locations());
        let before = store.snapshot().unwrap();

        store.replace(Vec::new());

        assert_eq!(before.len(), test_data::sample_locations().len());
        assert!(store.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::with_locations(test_data::sample_locations());
        store.clear();
        assert!(store.snapshot().is_none());
    }

    #[test]
    fn test_fixed_snapshot_store() {
        let snapshot: LocationSnapshot = test_data::sample_locations().into_iter().collect();
        let again = LocationStore::snapshot(&snapshot).unwrap();
        assert_eq!(again.locations(), snapshot.locations());
        assert!(snapshot.needs_refresh());
    }
}

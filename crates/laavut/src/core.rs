//! Core location search functionality for the Laavut library.
//!
//! This module provides the main [`LocationSearcher`] interface. It wires the
//! pure search routine to its collaborators: a [`LocationStore`] that hands out
//! the cached snapshot and a [`PositionProvider`] that may know where the user is.
//!
//! # Quick Start
//!
//! ```rust
//! use laavut::{FixedPosition, LocationSearcher};
//! use laavut_data::{MemoryStore, test_data};
//!
//! let store = MemoryStore::with_locations(test_data::sample_locations());
//! let searcher = LocationSearcher::builder()
//!     .store(store)
//!     .position_provider(FixedPosition(test_data::HELSINKI))
//!     .build()?;
//!
//! let outcome = searcher.search("kota");
//! assert_eq!(outcome.locations()[0].title(), Some("Kaunissaaren kota"));
//! # Ok::<(), laavut::error::LaavutError>(())
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use laavut_data::{Coordinate, JsonFileStore, LocationSnapshot, LocationStore};
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    error::{LaavutError, Result},
    position::{NoPosition, PositionProvider},
    search::{SearchConfig, SearchOutcome, search_locations_with_config},
};

pub type SearchOutcomes = Vec<SearchOutcome>;

/// Searches the cached locations, ranked for the user's current position.
///
/// The searcher never caches anything itself: every call takes a fresh
/// snapshot from the store and reads the position once, so a refresh or a new
/// fix between calls is picked up by the next call and never changes a result
/// already returned. Cloning is cheap; the collaborators are shared.
///
/// # Examples
///
/// ```rust
/// use laavut::LocationSearcher;
/// use laavut_data::{MemoryStore, test_data};
///
/// let searcher = LocationSearcher::new(MemoryStore::with_locations(test_data::sample_locations()));
///
/// // No position: alphabetical
/// let outcome = searcher.search("laavu");
/// assert_eq!(outcome.locations()[0].title(), Some("Aulangon laavu"));
///
/// // Nothing matches
/// let outcome = searcher.search("zzz");
/// assert_eq!(outcome.message().as_deref(), Some("No results for 'zzz'"));
/// ```
#[derive(Clone)]
pub struct LocationSearcher {
    store: Arc<dyn LocationStore>,
    position: Arc<dyn PositionProvider>,
    config: SearchConfig,
}

impl LocationSearcher {
    /// Search `store` without a position, ranking by title.
    pub fn new(store: impl LocationStore + 'static) -> Self {
        Self::with_position_provider(store, NoPosition)
    }

    /// Search `store`, ranking by distance whenever `position` has a fix.
    pub fn with_position_provider(
        store: impl LocationStore + 'static,
        position: impl PositionProvider + 'static,
    ) -> Self {
        Self {
            store: Arc::new(store),
            position: Arc::new(position),
            config: SearchConfig::default(),
        }
    }

    /// Open the cached snapshot in the default data directory.
    #[instrument(name = "Open default LocationSearcher", level = "info")]
    pub fn open_default() -> Result<Self> {
        let t_init = std::time::Instant::now();
        let store = JsonFileStore::open_default()?;
        info!(
            elapsed_seconds = ?t_init.elapsed(),
            path = ?store.path(),
            "LocationSearcher ready"
        );
        Ok(Self::new(store))
    }

    pub fn builder() -> LocationSearcherBuilder {
        LocationSearcherBuilder::new()
    }

    /// Search with this searcher's configuration.
    pub fn search(&self, query: impl AsRef<str>) -> SearchOutcome {
        self.search_with_config(query, &self.config)
    }

    /// Search with an explicit configuration.
    #[instrument(name = "Location Search", level = "debug", skip_all, fields(query = query.as_ref()))]
    pub fn search_with_config(&self, query: impl AsRef<str>, config: &SearchConfig) -> SearchOutcome {
        let query = query.as_ref();
        let snapshot = self.store.snapshot();
        let position = self.position.current_position();

        let outcome = run_search(query, snapshot.as_ref(), position, config);
        debug!(
            cached = snapshot.as_ref().map_or(0, |snapshot| snapshot.len()),
            results = outcome.len(),
            has_position = position.is_some(),
            "Search complete"
        );
        outcome
    }

    /// Search several queries in parallel against one snapshot and one position reading.
    ///
    /// ```rust
    /// # use laavut::LocationSearcher;
    /// # use laavut_data::{MemoryStore, test_data};
    /// # let searcher = LocationSearcher::new(MemoryStore::with_locations(test_data::sample_locations()));
    /// let outcomes = searcher.search_bulk(&["laavu", "kota", ""]);
    /// assert_eq!(outcomes.len(), 3);
    /// assert!(outcomes[2].is_idle());
    /// ```
    pub fn search_bulk<Query>(&self, queries: &[Query]) -> SearchOutcomes
    where
        Query: AsRef<str> + Sync,
    {
        self.search_bulk_with_config(queries, &self.config)
    }

    #[instrument(name = "Bulk Location Search", level = "debug", skip_all, fields(queries = queries.len()))]
    pub fn search_bulk_with_config<Query>(
        &self,
        queries: &[Query],
        config: &SearchConfig,
    ) -> SearchOutcomes
    where
        Query: AsRef<str> + Sync,
    {
        let snapshot = self.store.snapshot();
        let position = self.position.current_position();

        queries
            .par_iter()
            .map(|query| run_search(query.as_ref(), snapshot.as_ref(), position, config))
            .collect()
    }

    /// Whether the cached snapshot is due for a refresh from the remote feed.
    pub fn needs_refresh(&self) -> bool {
        self.store.needs_refresh()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get information about the searcher's current state.
    pub fn info(&self) -> SearcherInfo {
        SearcherInfo {
            cached_locations: self.store.snapshot().map_or(0, |snapshot| snapshot.len()),
            saved_at: self.store.saved_at(),
            needs_refresh: self.store.needs_refresh(),
            has_position: self.position.current_position().is_some(),
        }
    }
}

fn run_search(
    query: &str,
    snapshot: Option<&LocationSnapshot>,
    position: Option<Coordinate>,
    config: &SearchConfig,
) -> SearchOutcome {
    let results =
        search_locations_with_config(query, snapshot.map(LocationSnapshot::locations), position, config);
    SearchOutcome::new(query, results)
}

/// Information about a `LocationSearcher`'s collaborators.
#[derive(Debug, Clone)]
pub struct SearcherInfo {
    pub cached_locations: usize,
    pub saved_at: Option<DateTime<Utc>>,
    pub needs_refresh: bool,
    pub has_position: bool,
}

impl SearcherInfo {
    /// Get a human-readable summary of the searcher.
    pub fn summary(&self) -> String {
        let saved = self
            .saved_at
            .map_or_else(|| "never".to_string(), |saved_at| saved_at.to_rfc3339());
        format!(
            "LocationSearcher with {} cached locations (saved {}{}), {}",
            self.cached_locations,
            saved,
            if self.needs_refresh { ", refresh due" } else { "" },
            if self.has_position {
                "ranking by distance"
            } else {
                "ranking by title"
            }
        )
    }
}

/// Builder for creating a `LocationSearcher` from its collaborators.
#[derive(Default)]
pub struct LocationSearcherBuilder {
    store: Option<Arc<dyn LocationStore>>,
    position: Option<Arc<dyn PositionProvider>>,
    config: SearchConfig,
}

impl LocationSearcherBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the location store. Required.
    #[must_use]
    pub fn store(mut self, store: impl LocationStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Share an existing store, e.g. one the fetch routine also writes to.
    #[must_use]
    pub fn shared_store(mut self, store: Arc<dyn LocationStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the position provider. Defaults to [`NoPosition`].
    #[must_use]
    pub fn position_provider(mut self, position: impl PositionProvider + 'static) -> Self {
        self.position = Some(Arc::new(position));
        self
    }

    /// Share an existing position provider.
    #[must_use]
    pub fn shared_position_provider(mut self, position: Arc<dyn PositionProvider>) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the search configuration used by `search` and `search_bulk`.
    #[must_use]
    pub fn config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the `LocationSearcher`.
    pub fn build(self) -> Result<LocationSearcher> {
        let store = self.store.ok_or_else(|| {
            LaavutError::ConfigError("a location store is required".to_string())
        })?;

        Ok(LocationSearcher {
            store,
            position: self.position.unwrap_or_else(|| Arc::new(NoPosition)),
            config: self.config,
        })
    }
}

#[cfg(test)]
mod tests {
    use laavut_data::{Location, MemoryStore, test_data};

    use super::*;
    use crate::{SearchConfigBuilder, SharedPosition};

    fn searcher() -> LocationSearcher {
        LocationSearcher::new(MemoryStore::with_locations(test_data::sample_locations()))
    }

    #[test]
    fn test_builder_requires_store() {
        let result = LocationSearcher::builder().build();
        assert!(matches!(result, Err(LaavutError::ConfigError(_))));
    }

    #[test]
    fn test_empty_store_yields_no_results() {
        let searcher = LocationSearcher::new(MemoryStore::new());
        let outcome = searcher.search("laavu");
        assert_eq!(outcome.message().as_deref(), Some("No results for 'laavu'"));
        assert!(searcher.needs_refresh());
    }

    #[test]
    fn test_search_outcomes() {
        let searcher = searcher();
        assert!(searcher.search("").is_idle());
        assert!(matches!(
            searcher.search("zzz"),
            SearchOutcome::NoResults { .. }
        ));
        assert!(matches!(searcher.search("laavu"), SearchOutcome::Results(_)));
    }

    #[test]
    fn test_position_changes_between_calls() {
        let position = Arc::new(SharedPosition::new());
        let searcher = LocationSearcher::builder()
            .store(MemoryStore::with_locations(test_data::sample_locations()))
            .shared_position_provider(position.clone())
            .build()
            .unwrap();

        let by_title = searcher.search("kota");
        assert_eq!(by_title.locations()[0].title(), Some("Kaunissaaren kota"));

        // Lahti area: Öljymäki is now the closest hut
        position.update(Coordinate::new(60.98, 25.66));
        let by_distance = searcher.search("kota");
        assert_eq!(by_distance.locations()[0].title(), Some("Öljymäen kota"));

        // Earlier results are untouched
        assert_eq!(by_title.locations()[0].title(), Some("Kaunissaaren kota"));
    }

    #[test]
    fn test_refresh_is_visible_to_next_search() {
        let store = Arc::new(MemoryStore::new());
        let searcher = LocationSearcher::builder()
            .shared_store(store.clone())
            .build()
            .unwrap();

        assert!(searcher.search("uusi").is_empty());

        store.replace(vec![Location::new("Uusi laavu", 60.0, 24.0)]);
        assert_eq!(searcher.search("uusi").len(), 1);
        assert!(!searcher.needs_refresh());
    }

    #[test]
    fn test_searcher_config_is_used() {
        let searcher = LocationSearcher::builder()
            .store(MemoryStore::with_locations(test_data::sample_locations()))
            .config(SearchConfigBuilder::new().limit(2).build())
            .build()
            .unwrap();

        assert_eq!(searcher.search("laavu").len(), 2);
        assert_eq!(searcher.config().limit, Some(2));
    }

    #[test]
    fn test_bulk_matches_single_searches() {
        let searcher = LocationSearcher::with_position_provider(
            MemoryStore::with_locations(test_data::sample_locations()),
            crate::FixedPosition(test_data::HELSINKI),
        );
        let queries = ["laavu", "kota", "", "zzz", "mäen laavu"];

        let bulk = searcher.search_bulk(&queries);
        let single = queries.iter().map(|q| searcher.search(q)).collect::<Vec<_>>();
        assert_eq!(bulk, single);
    }

    #[test]
    fn test_info_summary() {
        let info = searcher().info();
        assert_eq!(info.cached_locations, test_data::sample_locations().len());
        assert!(!info.needs_refresh);
        assert!(!info.has_position);
        assert!(info.summary().contains("ranking by title"));

        let empty = LocationSearcher::new(MemoryStore::new()).info();
        assert!(empty.summary().contains("saved never, refresh due"));
    }
}

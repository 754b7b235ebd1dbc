//! Laavut - Campsite and Shelter Search
//!
//! Laavut searches a cached set of lean-tos ("laavu") and huts ("kota") by free
//! text and ranks the matches for the person holding the phone: nearest first
//! when their position is known, alphabetically otherwise.
//!
//! # Quick Start
//!
//! ```rust
//! use laavut::{FixedPosition, LocationSearcher, SearchOutcome};
//! use laavut_data::{MemoryStore, test_data};
//!
//! let store = MemoryStore::with_locations(test_data::sample_locations());
//! let searcher = LocationSearcher::with_position_provider(store, FixedPosition(test_data::HELSINKI));
//!
//! match searcher.search("nuuksio laavu") {
//!     SearchOutcome::Idle => println!("Type to search"),
//!     SearchOutcome::NoResults { query } => println!("No results for '{query}'"),
//!     SearchOutcome::Results(locations) => {
//!         for location in locations {
//!             println!("{location}");
//!         }
//!     }
//! }
//! ```
//!
//! # How matching works
//!
//! - The query is split on whitespace and lowercased; every token must match.
//! - A token matches a location when its title, or the first word of its
//!   subtitle, contains the token.
//! - Value-identical locations are reported once.
//! - With a valid position results are ordered by great-circle distance at
//!   0.1 km resolution, otherwise by title in Finnish alphabetical order.
//!
//! The routine itself ([`search_locations`]) is a pure function over a
//! snapshot; [`LocationSearcher`] only wires it to a store and a position
//! provider.

use once_cell::sync::OnceCell;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

mod config;
mod core;
pub mod error;
mod position;
mod search;

pub use core::{LocationSearcher, LocationSearcherBuilder, SearchOutcomes, SearcherInfo};

pub use config::{MAX_DISTANCE_PRECISION, SearchConfigBuilder};
pub use laavut_data as data;
pub use laavut_data::{Coordinate, Location, LocationSnapshot, LocationStore};
pub use position::{FixedPosition, NoPosition, PositionProvider, SharedPosition};
pub use search::{
    RankingStrategy, SearchConfig, SearchOutcome, SubtitleMatch, collation_key, filter_locations,
    rank_locations, rounded_distance, search_locations, search_locations_with_config, tokenize,
};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Initialize logging for the Laavut library.
///
/// Installs a `tracing` subscriber that honours `RUST_LOG` and otherwise shows
/// events at `level` and above. Safe to call more than once; only the first
/// call installs anything.
///
/// # Examples
///
/// ```rust
/// use laavut::init_logging;
/// use tracing::Level;
///
/// init_logging(Level::INFO)?;
/// # Ok::<(), laavut::error::LaavutError>(())
/// ```
pub fn init_logging(level: impl Into<LevelFilter>) -> error::Result<&'static ()> {
    LOGGER_INIT.get_or_try_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level.into().to_string()))?;

        tracing_subscriber::fmt::fmt()
            .with_env_filter(filter)
            .with_span_events(FmtSpan::CLOSE)
            .try_init()
            .map_err(|e| error::LaavutError::Other(anyhow::anyhow!(e)))?;
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use laavut_data::{MemoryStore, test_data};

    use super::*;

    fn setup_test_env() {
        let _ = init_logging(tracing::Level::WARN);
    }

    #[test]
    fn test_init_logging_twice() {
        setup_test_env();
        assert!(init_logging(tracing::Level::DEBUG).is_ok());
    }

    #[test]
    fn test_searcher_creation() {
        setup_test_env();

        let searcher = LocationSearcher::builder()
            .store(MemoryStore::with_locations(test_data::sample_locations()))
            .build();
        assert!(searcher.is_ok(), "Should be able to create searcher with test data");
    }

    #[test]
    fn test_basic_search() {
        setup_test_env();

        let searcher = LocationSearcher::new(MemoryStore::with_locations(test_data::sample_locations()));

        for term in ["nuuksio", "kota", "laavu", "AULANGON"] {
            let outcome = searcher.search(term);
            assert!(!outcome.is_empty(), "Search for '{term}' should find something");
        }

        // Substring matching only, no stemming
        assert!(searcher.search("Aulanko").is_empty());
    }

    #[test]
    fn test_configuration() {
        setup_test_env();

        let config = SearchConfigBuilder::quick_pick().limit(1).build();
        let searcher = LocationSearcher::new(MemoryStore::with_locations(test_data::sample_locations()));
        let outcome = searcher.search_with_config("laavu", &config);
        assert_eq!(outcome.len(), 1);
    }
}

//! Text search over a cached location snapshot.
//!
//! A query is split into lowercase tokens. Every token selects the locations
//! whose title, or the first word of whose subtitle, contains it. The selections
//! are intersected, so a location must match every token. Survivors are ranked
//! by distance when a usable position is known and by title otherwise.
//!
//! Everything here is a pure function of its inputs. It never fails: an empty
//! query, a missing cache or an unusable position each have a defined result.

mod filter;
mod outcome;
mod ranking;
mod tokenize;

pub use filter::{SubtitleMatch, filter_locations};
pub use outcome::SearchOutcome;
pub use ranking::{RankingStrategy, collation_key, rank_locations, rounded_distance};
pub use tokenize::tokenize;

use laavut_data::{Coordinate, Location};
use tracing::trace;

use crate::SearchConfigBuilder;

/// Configuration for location search operations.
///
/// Use [`SearchConfigBuilder`] (or [`SearchConfig::builder`]) for an ergonomic
/// way to adjust the defaults.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of results after ranking, `None` for all of them
    pub limit: Option<usize>,
    /// Decimal places of kilometers compared when ranking by distance
    pub distance_precision: u8,
    /// Which part of the subtitle a token may match
    pub subtitle_match: SubtitleMatch,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            limit: None,
            distance_precision: 1,
            subtitle_match: SubtitleMatch::FirstWord,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::new()
    }
}

/// Search `cache` for `query` with the default configuration.
///
/// ```rust
/// use laavut::search_locations;
/// use laavut_data::{Location, test_data::HELSINKI};
///
/// let cache = vec![
///     Location::new("Alpha", 60.25, 24.9),
///     Location::new("Beta", 60.18, 24.94),
/// ];
///
/// // No position: alphabetical
/// let by_title = search_locations("a", Some(&cache), None);
/// assert_eq!(by_title[0].title(), Some("Alpha"));
///
/// // With position: nearest first
/// let by_distance = search_locations("a", Some(&cache), Some(HELSINKI));
/// assert_eq!(by_distance[0].title(), Some("Beta"));
/// ```
#[must_use]
pub fn search_locations(
    query: &str,
    cache: Option<&[Location]>,
    position: Option<Coordinate>,
) -> Vec<Location> {
    search_locations_with_config(query, cache, position, &SearchConfig::default())
}

/// Search `cache` for `query`.
///
/// The result is a subset of `cache`, free of value duplicates, ranked by
/// [`RankingStrategy::for_position`] and cut to `config.limit`.
#[must_use]
pub fn search_locations_with_config(
    query: &str,
    cache: Option<&[Location]>,
    position: Option<Coordinate>,
    config: &SearchConfig,
) -> Vec<Location> {
    let Some(cache) = cache.filter(|cache| !cache.is_empty()) else {
        return Vec::new();
    };

    let tokens = tokenize(query);
    let mut matches = filter_locations(&tokens, cache, config.subtitle_match);

    let strategy = RankingStrategy::for_position(position);
    rank_locations(&mut matches, strategy, config.distance_precision);

    if let Some(limit) = config.limit {
        matches.truncate(limit);
    }

    trace!(
        tokens = tokens.len(),
        matches = matches.len(),
        ?strategy,
        "Filtered cached locations"
    );

    matches.into_iter().cloned().collect()
}

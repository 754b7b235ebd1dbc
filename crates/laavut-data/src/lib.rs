//! Data side of the Laavut search engine.
//!
//! This crate owns everything the search engine consumes but does not compute:
//! - [`Location`] records and their value identity ([`LocationKey`])
//! - conversion of decoded feed waypoints into locations ([`Waypoint`], [`Category`])
//! - great-circle distance on [`Coordinate`]s
//! - cached snapshot stores ([`LocationStore`], [`MemoryStore`], [`JsonFileStore`])
//! - the refresh policy that decides when a cached snapshot is stale

use once_cell::sync::Lazy;
use std::path::PathBuf;
use tracing::debug;

pub mod freshness;
pub mod geo;
pub mod location;
pub mod store;
pub mod test_data;

mod error;

pub use error::{DataError, Result};
pub use geo::{Coordinate, EARTH_RADIUS_KM, haversine_distance};
pub use location::{Category, DegreesKey, Location, LocationKey, Waypoint};
pub use store::{JsonFileStore, LocationSnapshot, LocationStore, MemoryStore};

pub const DATA_DIR_DEFAULT: &str = "./laavut_data";
pub const DATA_DIR_ENV: &str = "LAAVUT_DATA_DIR";

/// Directory that holds cached location snapshots.
///
/// Resolved once: `LAAVUT_DATA_DIR` wins, then the platform data directory
/// (with the `system-dirs` feature), then [`DATA_DIR_DEFAULT`].
pub static DATA_DIR: Lazy<PathBuf> = Lazy::new(|| {
    let dir = std::env::var(DATA_DIR_ENV)
        .map(PathBuf::from)
        .ok()
        .or_else(system_data_dir)
        .unwrap_or_else(|| PathBuf::from(DATA_DIR_DEFAULT));
    debug!(data_dir = ?dir, "Resolved data directory");
    dir
});

#[cfg(feature = "system-dirs")]
fn system_data_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("fi", "Laavut", "laavut").map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(not(feature = "system-dirs"))]
fn system_data_dir() -> Option<PathBuf> {
    None
}

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::geo::Coordinate;

/// A campsite or shelter from the cached feed.
///
/// Equality and hashing are by value, through [`LocationKey`]. Two records with
/// the same fields (coordinates compared at micro-degree resolution) are the
/// same location, whichever slot of the cache they came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    /// Display name
    pub title: Option<String>,
    /// Category label, see [`Category::label`]
    pub subtitle: Option<String>,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// When the feed last touched this record
    pub time: Option<DateTime<Utc>>,
    pub comment: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(title: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            title: Some(title.into()),
            latitude,
            longitude,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    #[must_use]
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = Some(time);
        self
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Convert a decoded feed waypoint.
    ///
    /// Returns `None` when any of `lat`, `lon`, `name`, `time` or `sym` is missing
    /// or does not parse. The symbol only picks the subtitle; unknown symbols
    /// keep the location but leave it without one.
    #[must_use]
    pub fn from_waypoint(waypoint: &Waypoint) -> Option<Self> {
        let (Some(lat), Some(lon), Some(name), Some(time), Some(sym)) = (
            waypoint.lat.as_deref(),
            waypoint.lon.as_deref(),
            waypoint.name.as_deref(),
            waypoint.time.as_deref(),
            waypoint.sym.as_deref(),
        ) else {
            debug!(?waypoint, "Skipping waypoint with missing fields");
            return None;
        };

        let (Ok(latitude), Ok(longitude)) = (lat.trim().parse::<f64>(), lon.trim().parse::<f64>())
        else {
            debug!(lat, lon, "Skipping waypoint with unparseable coordinates");
            return None;
        };

        let Some(time) = parse_timestamp(time) else {
            debug!(time, "Skipping waypoint with unparseable timestamp");
            return None;
        };

        Some(Self {
            title: Some(name.to_string()),
            subtitle: Category::from_symbol(sym).map(|category| category.label().to_string()),
            latitude,
            longitude,
            time: Some(time),
            comment: waypoint.cmt.clone(),
        })
    }

    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    /// Value identity used for set membership.
    #[must_use]
    pub fn key(&self) -> LocationKey<'_> {
        LocationKey {
            title: self.title.as_deref(),
            subtitle: self.subtitle.as_deref(),
            latitude: DegreesKey::new(self.latitude),
            longitude: DegreesKey::new(self.longitude),
            time: self.time.map(|time| time.timestamp_millis()),
            comment: self.comment.as_deref(),
        }
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Location {}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:.5}, {:.5})",
            self.title().unwrap_or("<untitled>"),
            self.latitude,
            self.longitude
        )
    }
}

/// Borrowed value key of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationKey<'a> {
    pub title: Option<&'a str>,
    pub subtitle: Option<&'a str>,
    pub latitude: DegreesKey,
    pub longitude: DegreesKey,
    pub time: Option<i64>,
    pub comment: Option<&'a str>,
}

/// A coordinate component as compared for value identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DegreesKey {
    /// Finite degrees rounded to micro-degrees
    Micro(i64),
    /// NaN or infinity, kept by bit pattern
    NonFinite(u64),
}

impl DegreesKey {
    #[must_use]
    pub fn new(degrees: f64) -> Self {
        if degrees.is_finite() {
            Self::Micro((degrees * 1e6).round() as i64)
        } else {
            Self::NonFinite(degrees.to_bits())
        }
    }
}

/// Accepts `yyyy-MM-ddTHH:mm:ssZ` and any other RFC 3339 offset.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw.trim())
        .or_else(|_| DateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S%z"))
        .map(|time| time.with_timezone(&Utc))
        .ok()
}

/// Shelter category, derived from the feed's waypoint symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Hut next to a road
    Campground,
    /// Lean-to out in the terrain
    Lodge,
    /// Lean-to next to a road
    PicnicArea,
}

impl Category {
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "Campground" => Some(Self::Campground),
            "Lodge" => Some(Self::Lodge),
            "Picnic Area" => Some(Self::PicnicArea),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Campground => "Kota tien varressa",
            Self::Lodge => "Laavu maastossa",
            Self::PicnicArea => "Laavu tien varressa",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A feed waypoint as delivered by the feed decoder, every field still text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub name: Option<String>,
    pub time: Option<String>,
    pub sym: Option<String>,
    pub cmt: Option<String>,
}

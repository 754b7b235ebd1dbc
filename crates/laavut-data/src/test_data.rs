//! Small, hand-picked location set for tests, examples and doctests.
//!
//! Coordinates are around southern Finland so distance rankings are easy to
//! reason about from Helsinki ([`HELSINKI`]).

use chrono::{TimeZone, Utc};

use crate::{Category, Coordinate, Location};

pub const HELSINKI: Coordinate = Coordinate::new(60.1699, 24.9384);

fn location(title: &str, category: Category, latitude: f64, longitude: f64) -> Location {
    Location::new(title, latitude, longitude)
        .with_subtitle(category.label())
        .with_time(Utc.with_ymd_and_hms(2016, 7, 20, 12, 0, 0).unwrap())
}

/// Eight shelters, in no particular order.
#[must_use]
pub fn sample_locations() -> Vec<Location> {
    vec![
        location("Nuuksion laavu", Category::Lodge, 60.3083, 24.5005),
        location("Sipoonkorven kota", Category::Campground, 60.3333, 25.2333),
        location("Aulangon laavu", Category::PicnicArea, 61.0167, 24.4500),
        location("Pirttimäen laavu", Category::Lodge, 60.2833, 24.4667),
        location("Öljymäen kota", Category::Campground, 60.9800, 25.6600),
        location("Ämmänsuon laavu", Category::Lodge, 61.4000, 23.9500),
        location("Kaunissaaren kota", Category::Campground, 60.2300, 25.2000),
        location("Haukkalammen laavu", Category::Lodge, 60.3200, 24.4800),
    ]
}

//! Coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::{DataError, Result};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic coordinate in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a coordinate, rejecting values outside the valid degree ranges.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self::new(latitude, longitude);
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(DataError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Both components finite, latitude within ±90 and longitude within ±180.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in kilometers.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        haversine_distance(self, other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// Haversine distance between two coordinates, in kilometers.
#[must_use]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let d_lat = (to.latitude - from.latitude).to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELSINKI: Coordinate = Coordinate::new(60.1699, 24.9384);
    const TAMPERE: Coordinate = Coordinate::new(61.4978, 23.7610);

    #[test]
    fn test_zero_distance() {
        assert_eq!(haversine_distance(&HELSINKI, &HELSINKI), 0.0);
    }

    #[test]
    fn test_helsinki_to_tampere() {
        let distance = HELSINKI.distance_km(&TAMPERE);
        // Roughly 160 km as the crow flies
        assert!((distance - 160.0).abs() < 5.0, "got {distance}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let there = HELSINKI.distance_km(&TAMPERE);
        let back = TAMPERE.distance_km(&HELSINKI);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn test_validity() {
        assert!(HELSINKI.is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, -180.5).is_valid());
        assert!(!Coordinate::new(f64::NAN, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(Coordinate::try_new(60.0, 25.0).is_ok());
        let err = Coordinate::try_new(120.0, 25.0).unwrap_err();
        assert!(matches!(err, DataError::InvalidCoordinate { .. }));
    }
}

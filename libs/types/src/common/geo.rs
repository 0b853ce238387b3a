//! Geographic primitives shared by waypoint and avoid-area handling

use super::errors::{Result, ValidationError};
use serde::{Deserialize, Serialize};

/// A WGS84 position in degrees
///
/// Range is checked on demand through [`Coordinate::validate`], not at
/// construction, so out-of-range positions from a request can still be
/// represented and reported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const MIN_LAT: f64 = -90.0;
    pub const MAX_LAT: f64 = 90.0;
    pub const MIN_LON: f64 = -180.0;
    pub const MAX_LON: f64 = 180.0;

    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Check latitude, then longitude, against their degree ranges
    pub fn validate(&self) -> Result<()> {
        if !(Self::MIN_LAT..=Self::MAX_LAT).contains(&self.lat) {
            return Err(ValidationError::InvalidLatitude(self.lat));
        }
        if !(Self::MIN_LON..=Self::MAX_LON).contains(&self.lon) {
            return Err(ValidationError::InvalidLongitude(self.lon));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Axis-aligned rectangle given by its south-west and north-east corners
///
/// Invariant when produced by the bbox parser: `min.lat <= max.lat`,
/// `min.lon <= max.lon` and both corners are valid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl BoundingBox {
    pub const fn new(min: Coordinate, max: Coordinate) -> Self {
        Self { min, max }
    }

    /// Rectangle corners: min, (min_lat, max_lon), max, (max_lat, min_lon)
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            self.min,
            Coordinate::new(self.min.lat, self.max.lon),
            self.max,
            Coordinate::new(self.max.lat, self.min.lon),
        ]
    }

    /// Inclusive containment test
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.lat >= self.min.lat
            && point.lat <= self.max.lat
            && point.lon >= self.min.lon
            && point.lon <= self.max.lon
    }

    pub fn range_lat(&self) -> f64 {
        self.max.lat - self.min.lat
    }

    pub fn range_lon(&self) -> f64 {
        self.max.lon - self.min.lon
    }
}

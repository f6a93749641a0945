//! Geographic coordinate value type.
//!
//! DESIGN
//! ======
//! A `Coordinate` is immutable; every change produces a new value. On the
//! wire and at the picker boundary it is a `[lat, lon]` pair, so it
//! serializes as a two-element array.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

use serde::{Deserialize, Serialize};

/// Map center used when no saved or device position is available.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(51.505, -0.09);

/// A (latitude, longitude) pair in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate an externally supplied pair.
    ///
    /// Returns `None` unless the slice holds exactly two finite numbers
    /// inside latitude/longitude range.
    pub fn from_pair(pair: &[f64]) -> Option<Self> {
        let [lat, lon] = pair else {
            return None;
        };
        let candidate = Self::new(*lat, *lon);
        candidate.is_valid().then_some(candidate)
    }

    /// Parse textual degrees as returned by place-search services.
    pub fn parse(lat: &str, lon: &str) -> Option<Self> {
        let lat = lat.trim().parse::<f64>().ok()?;
        let lon = lon.trim().parse::<f64>().ok()?;
        Self::from_pair(&[lat, lon])
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Normalize a raw map position: longitude wrapped into [-180, 180],
    /// latitude clamped to [-90, 90].
    #[must_use]
    pub fn wrapped(self) -> Self {
        let lat = self.lat.clamp(-90.0, 90.0);
        let lon = if (-180.0..=180.0).contains(&self.lon) {
            self.lon
        } else {
            (self.lon + 180.0).rem_euclid(360.0) - 180.0
        };
        Self::new(lat, lon)
    }

    pub fn to_pair(self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Human-readable form with six decimal places.
    pub fn display(self) -> String {
        format!("Latitude: {:.6}, Longitude: {:.6}", self.lat, self.lon)
    }
}

impl From<[f64; 2]> for Coordinate {
    fn from([lat, lon]: [f64; 2]) -> Self {
        Self::new(lat, lon)
    }
}

impl From<Coordinate> for [f64; 2] {
    fn from(value: Coordinate) -> Self {
        value.to_pair()
    }
}

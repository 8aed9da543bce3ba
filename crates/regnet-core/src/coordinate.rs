//! # Coordinates and Distances
//!
//! `Coordinate` is a validated (latitude, longitude) pair in decimal degrees.
//! `Kilometers` is the unit every edge weight and threshold is expressed in.
//!
//! ## Invariant
//!
//! A `Coordinate` always satisfies `lat ∈ [-90, 90]` and `lon ∈ [-180, 180]`
//! with both components finite. Deserialization goes through the same
//! validating constructor via `#[serde(try_from)]`.

use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// A geographic position in decimal degrees (WGS-84 datum).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

/// Unvalidated wire form of a [`Coordinate`].
#[derive(Debug, Clone, Copy, Deserialize)]
struct RawCoordinate {
    lat: f64,
    lon: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.lat, raw.lon)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range components.
    pub fn new(lat: f64, lon: f64) -> Result<Self, CoordinateError> {
        if !lat.is_finite() || !lon.is_finite() {
            return Err(CoordinateError::NotFinite { lat, lon });
        }
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
            return Err(CoordinateError::OutOfRange { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in radians.
    pub fn lat_radians(&self) -> f64 {
        self.lat.to_radians()
    }

    /// Longitude in radians.
    pub fn lon_radians(&self) -> f64 {
        self.lon.to_radians()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.4}, {:.4})", self.lat, self.lon)
    }
}

/// A non-negative distance in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(f64);

impl Kilometers {
    /// Zero distance.
    pub const ZERO: Kilometers = Kilometers(0.0);

    /// Wrap a raw kilometre value. Negative and NaN inputs clamp to zero.
    pub fn new(km: f64) -> Self {
        if km.is_nan() || km < 0.0 {
            Self(0.0)
        } else {
            Self(km)
        }
    }

    /// The raw value in kilometres.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Round half away from zero to one decimal digit.
    pub fn round_to_tenth(&self) -> Self {
        Self((self.0 * 10.0).round() / 10.0)
    }

    /// Integer tenths of a kilometre, used in canonical snapshots.
    pub fn decikilometres(&self) -> u64 {
        (self.0 * 10.0).round() as u64
    }

    /// Rebuild a distance from integer decikilometres.
    pub fn from_decikilometres(dkm: u64) -> Self {
        Self(dkm as f64 / 10.0)
    }

    /// True when the value is finite and strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl std::ops::Add for Kilometers {
    type Output = Kilometers;

    fn add(self, rhs: Kilometers) -> Kilometers {
        Kilometers(self.0 + rhs.0)
    }
}

impl std::fmt::Display for Kilometers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km", self.0)
    }
}

//! # Error Types: Structured Error Hierarchy
//!
//! Defines the error types shared by every regnet crate. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Coordinate errors carry the offending latitude and longitude.
//! - Identity errors carry the rejected input.
//! - Nothing here is retried: every error describes corrupt or mismatched
//!   input and is surfaced to the caller unchanged.

use thiserror::Error;

/// Error constructing a [`Coordinate`](crate::Coordinate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// Latitude outside [-90, 90] or longitude outside [-180, 180].
    #[error("coordinate out of range: lat={lat}, lon={lon} (lat must be in [-90, 90], lon in [-180, 180])")]
    OutOfRange {
        /// Rejected latitude in degrees.
        lat: f64,
        /// Rejected longitude in degrees.
        lon: f64,
    },

    /// Latitude or longitude is NaN or infinite.
    #[error("coordinate is not finite: lat={lat}, lon={lon}")]
    NotFinite {
        /// Rejected latitude.
        lat: f64,
        /// Rejected longitude.
        lon: f64,
    },
}

/// Error parsing an identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// Region names must contain at least one non-whitespace character.
    #[error("region name must not be empty")]
    EmptyName,

    /// Unknown modality identifier.
    #[error("unknown modality: {0:?} (expected one of: land, sea, air)")]
    UnknownModality(String),
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Distances must be integer decikilometres.
    #[error("float values are not permitted in canonical representations; use integer decikilometres: {0}")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

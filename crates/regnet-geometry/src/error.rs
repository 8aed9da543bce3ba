use regnet_core::{CoordinateError, IdentityError, RegionName};
use thiserror::Error;

/// Errors constructing a geometry provider.
#[derive(Error, Debug)]
pub enum GeometryError {
    #[error("duplicate region: {0}")]
    DuplicateRegion(RegionName),

    #[error("neighbour pair ({region}, {neighbor}) references unknown region {neighbor}")]
    UnknownNeighbor {
        region: RegionName,
        neighbor: RegionName,
    },

    #[error("region {0} is listed as its own neighbour")]
    SelfNeighbor(RegionName),

    #[error("degenerate boundary for region {region}: {reason}")]
    DegenerateBoundary { region: String, reason: String },

    #[error("invalid touch tolerance: {0} (must be finite and >= 0)")]
    InvalidTolerance(f64),

    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] CoordinateError),

    #[error("invalid identifier: {0}")]
    Identity(#[from] IdentityError),
}

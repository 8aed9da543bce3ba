use regnet_core::{CanonicalizationError, CoordinateError, Kilometers, Modality, RegionName};
use regnet_geometry::GeometryError;
use thiserror::Error;

/// Errors building or querying a connectivity graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    /// An edge, hub, or query names a region absent from the node set.
    #[error("unknown region {region:?} referenced by {context}")]
    UnknownRegionReference { region: String, context: String },

    #[error("duplicate region: {0}")]
    DuplicateRegion(RegionName),

    /// The same (pair, modality) was inserted twice with different weights.
    #[error("conflicting {modality} edge {low} -- {high}: {existing} vs {incoming}")]
    ConflictingEdge {
        low: RegionName,
        high: RegionName,
        modality: Modality,
        existing: Kilometers,
        incoming: Kilometers,
    },

    #[error("edge would connect region {0} to itself")]
    SelfLoop(RegionName),

    #[error("invalid {modality} threshold: {value} km (must be finite and > 0)")]
    InvalidThreshold { modality: Modality, value: f64 },

    #[error("{0} is not a routed modality (expected sea or air)")]
    InvalidModality(Modality),

    #[error("invalid visual weight: {0}")]
    InvalidVisualWeight(String),

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

impl GraphError {
    pub(crate) fn unknown(region: impl std::fmt::Display, context: impl Into<String>) -> Self {
        Self::UnknownRegionReference {
            region: region.to_string(),
            context: context.into(),
        }
    }
}

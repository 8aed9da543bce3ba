//! # Edges
//!
//! An [`Edge`] is an undirected relation between two distinct regions,
//! tagged with a modality and weighted in kilometres.
//!
//! ## Invariant
//!
//! The endpoints of an [`EdgeKey`] are stored in name order (`low < high`),
//! so `{A, B}` and `{B, A}` produce the same key. At most one edge exists
//! per key; parallel edges of different modalities have different keys.
//! Weights are stored already rounded to one decimal.

use regnet_core::{Kilometers, Modality, RegionName};
use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Identity of an edge: unordered endpoint pair plus modality.
///
/// Ordering is (low, high, modality), which is the order edges are
/// reported in everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    low: RegionName,
    high: RegionName,
    modality: Modality,
}

impl EdgeKey {
    pub fn new(a: RegionName, b: RegionName, modality: Modality) -> Result<Self, GraphError> {
        if a == b {
            return Err(GraphError::SelfLoop(a));
        }
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        Ok(Self {
            low,
            high,
            modality,
        })
    }

    pub fn low(&self) -> &RegionName {
        &self.low
    }

    pub fn high(&self) -> &RegionName {
        &self.high
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// True when `region` is one of the endpoints.
    pub fn involves(&self, region: &str) -> bool {
        self.low.as_str() == region || self.high.as_str() == region
    }

    /// The endpoint opposite `region`, if `region` is an endpoint.
    pub fn other(&self, region: &str) -> Option<&RegionName> {
        if self.low.as_str() == region {
            Some(&self.high)
        } else if self.high.as_str() == region {
            Some(&self.low)
        } else {
            None
        }
    }

    /// The same endpoint pair ignoring modality.
    pub fn same_pair(&self, other: &EdgeKey) -> bool {
        self.low == other.low && self.high == other.high
    }
}

/// A weighted, modality-tagged relation between two regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    key: EdgeKey,
    weight: Kilometers,
}

impl Edge {
    /// Create an edge. The distance is rounded to one decimal.
    pub fn new(
        a: RegionName,
        b: RegionName,
        modality: Modality,
        distance: Kilometers,
    ) -> Result<Self, GraphError> {
        Ok(Self {
            key: EdgeKey::new(a, b, modality)?,
            weight: distance.round_to_tenth(),
        })
    }

    pub fn key(&self) -> &EdgeKey {
        &self.key
    }

    pub fn low(&self) -> &RegionName {
        &self.key.low
    }

    pub fn high(&self) -> &RegionName {
        &self.key.high
    }

    pub fn modality(&self) -> Modality {
        self.key.modality
    }

    pub fn weight(&self) -> Kilometers {
        self.weight
    }

    /// Display annotation, e.g. `"1111.9 km"`.
    pub fn label(&self) -> String {
        self.weight.to_string()
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -- {} [{}, {}]",
            self.key.low, self.key.high, self.key.modality, self.weight
        )
    }
}

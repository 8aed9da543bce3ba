//! # Adjacency Table Provider
//!
//! Regions with explicit centroids and an explicit list of neighbour pairs.
//! Used for fixtures, hardcoded tables, and precomputed adjacency exported
//! from GIS tooling.

use std::collections::{BTreeSet, HashMap};

use regnet_core::RegionName;

use crate::error::GeometryError;
use crate::provider::{GeometryProvider, RegionFeature};

/// A [`GeometryProvider`] backed by a neighbour table.
#[derive(Debug, Clone)]
pub struct AdjacencyTableProvider {
    features: Vec<RegionFeature>,
    index: HashMap<RegionName, usize>,
    /// Normalized `(low, high)` index pairs.
    neighbors: BTreeSet<(usize, usize)>,
}

impl AdjacencyTableProvider {
    /// Build the table.
    ///
    /// Neighbour pairs are unordered; `(A, B)` and `(B, A)` collapse into one
    /// entry. Both ends must name a listed region and differ from each other.
    pub fn new(
        features: Vec<RegionFeature>,
        neighbors: Vec<(RegionName, RegionName)>,
    ) -> Result<Self, GeometryError> {
        let mut index = HashMap::with_capacity(features.len());
        for (i, feature) in features.iter().enumerate() {
            if index.insert(feature.name.clone(), i).is_some() {
                return Err(GeometryError::DuplicateRegion(feature.name.clone()));
            }
        }

        let mut pairs = BTreeSet::new();
        for (a, b) in neighbors {
            if a == b {
                return Err(GeometryError::SelfNeighbor(a));
            }
            let i = *index.get(&a).ok_or_else(|| GeometryError::UnknownNeighbor {
                region: b.clone(),
                neighbor: a.clone(),
            })?;
            let j = *index.get(&b).ok_or_else(|| GeometryError::UnknownNeighbor {
                region: a.clone(),
                neighbor: b.clone(),
            })?;
            pairs.insert((i.min(j), i.max(j)));
        }

        tracing::debug!(
            regions = features.len(),
            neighbor_pairs = pairs.len(),
            "adjacency table built"
        );
        Ok(Self {
            features,
            index,
            neighbors: pairs,
        })
    }

    /// Number of distinct neighbour pairs.
    pub fn neighbor_count(&self) -> usize {
        self.neighbors.len()
    }
}

impl GeometryProvider for AdjacencyTableProvider {
    fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) if i != j => self.neighbors.contains(&(i.min(j), i.max(j))),
            _ => false,
        }
    }

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        self.neighbors.iter().copied().collect()
    }
}

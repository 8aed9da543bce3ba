//! # Land Adjacency
//!
//! Emits one `land` edge for every pair of regions whose boundaries touch,
//! weighted by the distance between their centroids.
//!
//! The provider's `candidate_pairs()` decides which pairs are tested, so
//! spatial pruning lives with the geometry. Each unordered pair is tested
//! at most once even if the provider lists it twice or in reverse.

use std::collections::BTreeSet;

use regnet_core::{DistanceModel, EarthModel, Modality};
use regnet_geometry::GeometryProvider;

use crate::edge::Edge;
use crate::error::GraphError;

/// Builds land edges from a geometry provider.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyBuilder<D = EarthModel> {
    model: D,
}

impl<D: DistanceModel> AdjacencyBuilder<D> {
    pub fn new(model: D) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &D {
        &self.model
    }

    /// Test every candidate pair and emit land edges, sorted by key.
    pub fn build_land_edges<P>(&self, provider: &P) -> Result<Vec<Edge>, GraphError>
    where
        P: GeometryProvider + ?Sized,
    {
        let n = provider.features().len();
        let pairs: Vec<(usize, usize)> = provider
            .candidate_pairs()
            .into_iter()
            .filter_map(|(i, j)| {
                let pair = (i.min(j), i.max(j));
                if pair.0 == pair.1 || pair.1 >= n {
                    tracing::warn!(i, j, regions = n, "ignoring invalid candidate pair");
                    None
                } else {
                    Some(pair)
                }
            })
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut edges = self.evaluate_all(provider, &pairs)?;
        edges.sort_by(|a, b| a.key().cmp(b.key()));

        tracing::debug!(
            modality = %Modality::Land,
            pairs = pairs.len(),
            edges = edges.len(),
            model = self.model.name(),
            "land adjacency built"
        );
        Ok(edges)
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all<P>(&self, provider: &P, pairs: &[(usize, usize)]) -> Result<Vec<Edge>, GraphError>
    where
        P: GeometryProvider + ?Sized,
    {
        pairs
            .iter()
            .filter_map(|&(i, j)| self.evaluate(provider, i, j).transpose())
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all<P>(&self, provider: &P, pairs: &[(usize, usize)]) -> Result<Vec<Edge>, GraphError>
    where
        P: GeometryProvider + ?Sized,
    {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .filter_map(|&(i, j)| self.evaluate(provider, i, j).transpose())
            .collect()
    }

    fn evaluate<P>(&self, provider: &P, i: usize, j: usize) -> Result<Option<Edge>, GraphError>
    where
        P: GeometryProvider + ?Sized,
    {
        let features = provider.features();
        let (a, b) = (&features[i], &features[j]);
        if !provider.touches(&a.name, &b.name) {
            return Ok(None);
        }
        let distance = self.model.distance(a.centroid, b.centroid);
        tracing::trace!(a = %a.name, b = %b.name, %distance, "land edge");
        Edge::new(a.name.clone(), b.name.clone(), Modality::Land, distance).map(Some)
    }
}

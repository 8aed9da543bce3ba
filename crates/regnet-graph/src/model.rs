//! # Graph Model
//!
//! The merged multigraph. Nodes are regions in insertion order; edges are
//! the union of every builder's output, keyed by [`EdgeKey`].
//!
//! ## Invariant
//!
//! A `Graph` can only be obtained from [`Graph::merge`], which checks that
//! every edge endpoint is a node, that node names are unique, and that no
//! key carries two different weights. After that the graph is read-only
//! and can be shared across threads behind an `Arc`.

use std::collections::{BTreeMap, HashMap};

use regnet_core::{
    sha256_digest, CanonicalBytes, ContentDigest, Coordinate, Kilometers, Modality, ModalitySet,
    RegionName,
};
use serde::{Deserialize, Serialize};

use crate::edge::{Edge, EdgeKey};
use crate::error::GraphError;

/// A graph node: a named region with its centroid and optional hubs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    name: RegionName,
    centroid: Coordinate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sea_hub: Option<Coordinate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    air_hub: Option<Coordinate>,
}

impl Region {
    pub fn new(name: RegionName, centroid: Coordinate) -> Self {
        Self {
            name,
            centroid,
            sea_hub: None,
            air_hub: None,
        }
    }

    /// Attach a hub for a routed modality. `land` is rejected.
    pub fn with_hub(mut self, modality: Modality, hub: Coordinate) -> Result<Self, GraphError> {
        match modality {
            Modality::Sea => self.sea_hub = Some(hub),
            Modality::Air => self.air_hub = Some(hub),
            Modality::Land => return Err(GraphError::InvalidModality(modality)),
        }
        Ok(self)
    }

    pub fn name(&self) -> &RegionName {
        &self.name
    }

    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    /// The hub used for `modality`, if the region participates in it.
    pub fn hub(&self, modality: Modality) -> Option<Coordinate> {
        match modality {
            Modality::Land => None,
            Modality::Sea => self.sea_hub,
            Modality::Air => self.air_hub,
        }
    }
}

/// How [`Graph::collapse`] picks one edge per region pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollapsePolicy {
    /// Keep the lightest edge; ties go to the earlier modality
    /// (land, then sea, then air).
    #[default]
    MinimumWeight,
}

/// An immutable multi-modal connectivity graph.
#[derive(Debug, Clone)]
pub struct Graph {
    regions: Vec<Region>,
    index: HashMap<RegionName, usize>,
    /// Sorted by key.
    edges: Vec<Edge>,
    /// Edge indices incident to each region, parallel to `regions`.
    incident: Vec<Vec<usize>>,
}

impl Graph {
    /// Merge a node set and any number of edge sets into a graph.
    ///
    /// # Errors
    ///
    /// - [`GraphError::DuplicateRegion`] if two nodes share a name.
    /// - [`GraphError::UnknownRegionReference`] if an edge names a region
    ///   outside the node set.
    /// - [`GraphError::ConflictingEdge`] if one key appears with two
    ///   different weights. Identical repeats are merged.
    pub fn merge<I>(regions: Vec<Region>, edge_sets: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Vec<Edge>>,
    {
        let mut index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            if index.insert(region.name.clone(), i).is_some() {
                return Err(GraphError::DuplicateRegion(region.name.clone()));
            }
        }

        let mut merged: BTreeMap<EdgeKey, Edge> = BTreeMap::new();
        for edge in edge_sets.into_iter().flatten() {
            for endpoint in [edge.low(), edge.high()] {
                if !index.contains_key(endpoint) {
                    return Err(GraphError::unknown(
                        endpoint,
                        format!("{} edge {} -- {}", edge.modality(), edge.low(), edge.high()),
                    ));
                }
            }
            if let Some(existing) = merged.get(edge.key()) {
                if existing.weight() != edge.weight() {
                    return Err(GraphError::ConflictingEdge {
                        low: edge.low().clone(),
                        high: edge.high().clone(),
                        modality: edge.modality(),
                        existing: existing.weight(),
                        incoming: edge.weight(),
                    });
                }
                continue;
            }
            merged.insert(edge.key().clone(), edge);
        }

        let edges: Vec<Edge> = merged.into_values().collect();
        let mut incident = vec![Vec::new(); regions.len()];
        for (e, edge) in edges.iter().enumerate() {
            incident[index[edge.low()]].push(e);
            incident[index[edge.high()]].push(e);
        }

        Ok(Self {
            regions,
            index,
            edges,
            incident,
        })
    }

    pub fn node_count(&self) -> usize {
        self.regions.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Regions in insertion order.
    pub fn nodes(&self) -> &[Region] {
        &self.regions
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.index.get(name).map(|&i| &self.regions[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Every edge, sorted by key.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Edges incident to `region`, sorted by key.
    pub fn edges_of(&self, region: &str) -> Result<Vec<&Edge>, GraphError> {
        let i = self.position(region, "edges_of")?;
        Ok(self.incident[i].iter().map(|&e| &self.edges[e]).collect())
    }

    /// Edges of one modality, sorted by key.
    pub fn edges_by_modality(&self, modality: Modality) -> Vec<&Edge> {
        self.edges
            .iter()
            .filter(|e| e.modality() == modality)
            .collect()
    }

    /// Per-modality edge counts in canonical modality order.
    pub fn modality_counts(&self) -> [(Modality, usize); 3] {
        let mut counts = [(Modality::Land, 0), (Modality::Sea, 0), (Modality::Air, 0)];
        for edge in &self.edges {
            let slot = match edge.modality() {
                Modality::Land => 0,
                Modality::Sea => 1,
                Modality::Air => 2,
            };
            counts[slot].1 += 1;
        }
        counts
    }

    /// Neighbours of `region` over edges whose modality is in `modalities`,
    /// paired with the connecting edge. A neighbour reachable by several
    /// modalities appears once per edge.
    pub fn neighbors(
        &self,
        region: &str,
        modalities: ModalitySet,
    ) -> Result<Vec<(&RegionName, &Edge)>, GraphError> {
        let i = self.position(region, "neighbors")?;
        Ok(self.incident[i]
            .iter()
            .map(|&e| &self.edges[e])
            .filter(|e| modalities.contains(e.modality()))
            .filter_map(|e| e.key().other(region).map(|other| (other, e)))
            .collect())
    }

    /// Number of edges incident to `region`, across all modalities.
    pub fn degree(&self, region: &str) -> Result<usize, GraphError> {
        let i = self.position(region, "degree")?;
        Ok(self.incident[i].len())
    }

    /// A simple-graph view: one edge per connected pair.
    pub fn collapse(&self, policy: CollapsePolicy) -> Vec<&Edge> {
        match policy {
            CollapsePolicy::MinimumWeight => {
                let mut out: Vec<&Edge> = Vec::new();
                // Edges are sorted by (low, high, modality), so each pair
                // is a contiguous run in modality order.
                for edge in &self.edges {
                    match out.last_mut() {
                        Some(kept) if kept.key().same_pair(edge.key()) => {
                            if edge.weight() < kept.weight() {
                                *kept = edge;
                            }
                        }
                        _ => out.push(edge),
                    }
                }
                out
            }
        }
    }

    /// `(number, name)` with 1-based numbers in node order.
    pub fn numbered_labels(&self) -> Vec<(usize, &RegionName)> {
        self.regions
            .iter()
            .enumerate()
            .map(|(i, r)| (i + 1, &r.name))
            .collect()
    }

    /// A float-free serializable form of the graph.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            nodes: self
                .regions
                .iter()
                .map(|r| NodeSnapshot {
                    name: r.name.clone(),
                    centroid: MicroDegrees::from(r.centroid),
                    sea_hub: r.sea_hub.map(MicroDegrees::from),
                    air_hub: r.air_hub.map(MicroDegrees::from),
                })
                .collect(),
            edges: self
                .edges
                .iter()
                .map(|e| EdgeSnapshot {
                    low: e.low().clone(),
                    high: e.high().clone(),
                    modality: e.modality(),
                    weight_dkm: e.weight().decikilometres(),
                })
                .collect(),
        }
    }

    /// SHA-256 over the canonical bytes of [`Graph::snapshot`].
    pub fn digest(&self) -> Result<ContentDigest, GraphError> {
        let canonical = CanonicalBytes::new(&self.snapshot())?;
        Ok(sha256_digest(&canonical))
    }

    pub(crate) fn position(&self, region: &str, context: &str) -> Result<usize, GraphError> {
        self.index
            .get(region)
            .copied()
            .ok_or_else(|| GraphError::unknown(region, context))
    }

    pub(crate) fn incident(&self, index: usize) -> impl Iterator<Item = &Edge> {
        self.incident[index].iter().map(|&e| &self.edges[e])
    }
}

/// A coordinate in integer millionths of a degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroDegrees {
    pub lat: i64,
    pub lon: i64,
}

impl From<Coordinate> for MicroDegrees {
    fn from(c: Coordinate) -> Self {
        Self {
            lat: (c.lat() * 1e6).round() as i64,
            lon: (c.lon() * 1e6).round() as i64,
        }
    }
}

/// A node in a [`GraphSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub name: RegionName,
    pub centroid: MicroDegrees,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sea_hub: Option<MicroDegrees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub air_hub: Option<MicroDegrees>,
}

/// An edge in a [`GraphSnapshot`]. Weight is in decikilometres.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub low: RegionName,
    pub high: RegionName,
    pub modality: Modality,
    pub weight_dkm: u64,
}

impl EdgeSnapshot {
    pub fn weight(&self) -> Kilometers {
        Kilometers::from_decikilometres(self.weight_dkm)
    }
}

/// Serializable, float-free form of a [`Graph`], suitable for hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

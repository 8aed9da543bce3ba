//! # Edge Classification
//!
//! Read-only queries that split a graph's edges into displayable subsets.
//!
//! - [`EdgeClassifier::partition`] keeps the edges whose class intersects an
//!   active [`ModalitySet`]. `partition(g, {})` is empty and
//!   `partition(g, {land, sea, air})` is every edge.
//! - [`VisualWeight`] maps a distance to a line thickness: non-increasing in
//!   distance, never below its floor.
//!
//! Under [`ClassificationPolicy::ByModality`] an edge's class is its tag.
//! [`ClassificationPolicy::WeightBand`] reproduces a display rule for graphs
//! whose tags are not trusted: short edges are land, long edges are sea or
//! air depending on which hub registries hold the endpoint that was inserted
//! into the graph first.

use std::collections::{BTreeMap, BTreeSet};

use regnet_core::{Kilometers, Modality, ModalitySet, RegionName};

use crate::edge::Edge;
use crate::error::GraphError;
use crate::model::{Graph, Region};

/// Default land/long-haul split for [`ClassificationPolicy::WeightBand`].
pub const DEFAULT_LAND_BELOW_KM: f64 = 2000.0;

/// Line-thickness transform: `max(floor, ceiling - km / scale_km)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualWeight {
    ceiling: f64,
    scale_km: f64,
    floor: f64,
}

impl VisualWeight {
    pub fn new(ceiling: f64, scale_km: f64, floor: f64) -> Result<Self, GraphError> {
        if !(ceiling.is_finite() && scale_km.is_finite() && floor.is_finite()) {
            return Err(GraphError::InvalidVisualWeight(format!(
                "parameters must be finite (ceiling={ceiling}, scale_km={scale_km}, floor={floor})"
            )));
        }
        if scale_km <= 0.0 {
            return Err(GraphError::InvalidVisualWeight(format!(
                "scale_km must be > 0, got {scale_km}"
            )));
        }
        if floor < 0.0 || floor > ceiling {
            return Err(GraphError::InvalidVisualWeight(format!(
                "floor must be in [0, ceiling], got floor={floor}, ceiling={ceiling}"
            )));
        }
        Ok(Self {
            ceiling,
            scale_km,
            floor,
        })
    }

    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    pub fn scale_km(&self) -> f64 {
        self.scale_km
    }

    pub fn floor(&self) -> f64 {
        self.floor
    }

    pub fn thickness(&self, distance: Kilometers) -> f64 {
        (self.ceiling - distance.value() / self.scale_km).max(self.floor)
    }
}

impl Default for VisualWeight {
    fn default() -> Self {
        Self {
            ceiling: 10.0,
            scale_km: 5.0,
            floor: 1.0,
        }
    }
}

/// How an edge's display class is decided.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ClassificationPolicy {
    /// The edge's own modality tag.
    #[default]
    ByModality,
    /// Land below `land_below_km`; otherwise sea and/or air by membership
    /// of the edge's first endpoint in the given region sets.
    ///
    /// The first endpoint is the one with the lower position in
    /// `node_order`. Endpoints missing from it fall back to the edge's low
    /// endpoint.
    WeightBand {
        land_below_km: f64,
        sea_regions: BTreeSet<RegionName>,
        air_regions: BTreeSet<RegionName>,
        node_order: BTreeMap<RegionName, usize>,
    },
}

impl ClassificationPolicy {
    /// A weight-band policy whose region sets are the graph's hub regions.
    pub fn weight_band_for(graph: &Graph, land_below_km: f64) -> Self {
        let hub_regions = |modality: Modality| -> BTreeSet<RegionName> {
            graph
                .nodes()
                .iter()
                .filter(|r| r.hub(modality).is_some())
                .map(|r: &Region| r.name().clone())
                .collect()
        };
        Self::WeightBand {
            land_below_km,
            sea_regions: hub_regions(Modality::Sea),
            air_regions: hub_regions(Modality::Air),
            node_order: graph
                .nodes()
                .iter()
                .enumerate()
                .map(|(i, r)| (r.name().clone(), i))
                .collect(),
        }
    }

    /// The set of display classes `edge` belongs to.
    pub fn classify(&self, edge: &Edge) -> ModalitySet {
        match self {
            Self::ByModality => ModalitySet::only(edge.modality()),
            Self::WeightBand {
                land_below_km,
                sea_regions,
                air_regions,
                node_order,
            } => {
                if edge.weight().value() < *land_below_km {
                    return ModalitySet::only(Modality::Land);
                }
                let first = first_inserted(node_order, edge);
                let mut classes = ModalitySet::empty();
                if sea_regions.contains(first) {
                    classes.insert(Modality::Sea);
                }
                if air_regions.contains(first) {
                    classes.insert(Modality::Air);
                }
                classes
            }
        }
    }
}

fn first_inserted<'e>(
    node_order: &BTreeMap<RegionName, usize>,
    edge: &'e Edge,
) -> &'e RegionName {
    match (node_order.get(edge.low()), node_order.get(edge.high())) {
        (Some(low), Some(high)) if high < low => edge.high(),
        _ => edge.low(),
    }
}

/// Partitions graph edges by display class.
#[derive(Debug, Clone, Default)]
pub struct EdgeClassifier {
    policy: ClassificationPolicy,
}

impl EdgeClassifier {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ClassificationPolicy {
        &self.policy
    }

    /// Every node, and the edges whose class intersects `active`.
    pub fn partition<'g>(&self, graph: &'g Graph, active: ModalitySet) -> Subgraph<'g> {
        let edges = graph
            .edges()
            .iter()
            .filter(|e| self.policy.classify(e).iter().any(|m| active.contains(m)))
            .collect();
        Subgraph { graph, edges }
    }
}

/// [`EdgeClassifier::partition`] under [`ClassificationPolicy::ByModality`].
pub fn partition(graph: &Graph, active: ModalitySet) -> Subgraph<'_> {
    EdgeClassifier::default().partition(graph, active)
}

/// A borrowed view over a graph: all of its nodes and a subset of its edges.
#[derive(Debug, Clone)]
pub struct Subgraph<'g> {
    graph: &'g Graph,
    edges: Vec<&'g Edge>,
}

impl<'g> Subgraph<'g> {
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn nodes(&self) -> &'g [Region] {
        self.graph.nodes()
    }

    pub fn edges(&self) -> &[&'g Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// `(edge, "<weight> km")` for every edge in the view.
    pub fn edge_labels(&self) -> Vec<(&'g Edge, String)> {
        self.edges.iter().map(|&e| (e, e.label())).collect()
    }

    pub fn visual_weights(&self, transform: &VisualWeight) -> Vec<(&'g Edge, f64)> {
        self.edges
            .iter()
            .map(|&e| (e, transform.thickness(e.weight())))
            .collect()
    }
}

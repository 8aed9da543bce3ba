//! # Shortest Routes
//!
//! Dijkstra over the edges of the active modalities. Costs are summed in
//! integer decikilometres, so equal-length alternatives compare exactly;
//! ties are broken by region name.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use regnet_core::{Kilometers, ModalitySet, RegionName};
use serde::Serialize;

use crate::edge::Edge;
use crate::error::GraphError;
use crate::model::Graph;

/// A path between two regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    /// Regions visited, origin first and destination last.
    pub hops: Vec<RegionName>,
    /// The edge taken between consecutive hops.
    pub legs: Vec<Edge>,
    pub total: Kilometers,
}

impl Route {
    pub fn hop_count(&self) -> usize {
        self.legs.len()
    }
}

/// The lightest route from `from` to `to` using edges whose modality is in
/// `modalities`. `Ok(None)` when no such route exists.
pub fn shortest_route(
    graph: &Graph,
    from: &str,
    to: &str,
    modalities: ModalitySet,
) -> Result<Option<Route>, GraphError> {
    let source = graph.position(from, "route origin")?;
    let target = graph.position(to, "route destination")?;
    let nodes = graph.nodes();

    let mut best: Vec<Option<u64>> = vec![None; nodes.len()];
    let mut via: Vec<Option<(usize, &Edge)>> = vec![None; nodes.len()];
    let mut settled = vec![false; nodes.len()];
    let mut heap = BinaryHeap::new();

    best[source] = Some(0);
    heap.push(Reverse((0u64, nodes[source].name(), source)));

    while let Some(Reverse((cost, _, node))) = heap.pop() {
        if settled[node] {
            continue;
        }
        settled[node] = true;
        if node == target {
            break;
        }
        let here = nodes[node].name();
        for edge in graph.incident(node) {
            if !modalities.contains(edge.modality()) {
                continue;
            }
            let Some(next_name) = edge.key().other(here.as_str()) else {
                continue;
            };
            let next = graph.position(next_name.as_str(), "route expansion")?;
            if settled[next] {
                continue;
            }
            let candidate = cost + edge.weight().decikilometres();
            let improves = match best[next] {
                None => true,
                Some(current) => candidate < current,
            };
            if improves {
                best[next] = Some(candidate);
                via[next] = Some((node, edge));
                heap.push(Reverse((candidate, next_name, next)));
            }
        }
    }

    let Some(total) = best[target] else {
        tracing::debug!(from, to, %modalities, "no route");
        return Ok(None);
    };

    let mut hops = vec![nodes[target].name().clone()];
    let mut legs = Vec::new();
    let mut cursor = target;
    while let Some((prev, edge)) = via[cursor] {
        legs.push(edge.clone());
        hops.push(nodes[prev].name().clone());
        cursor = prev;
    }
    hops.reverse();
    legs.reverse();

    Ok(Some(Route {
        hops,
        legs,
        total: Kilometers::from_decikilometres(total),
    }))
}

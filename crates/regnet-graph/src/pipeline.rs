//! # Build Pipeline
//!
//! Geometry plus configuration in, graph out:
//!
//! 1. Every hub registry key must name a provider region, whether or not
//!    the hub would produce an edge.
//! 2. Regions come from the provider's features, in provider order, with
//!    hubs attached from the registries.
//! 3. Land edges from [`AdjacencyBuilder`].
//! 4. Sea and air edges from [`RouteSynthesizer`].
//! 5. [`Graph::merge`].

use std::collections::BTreeSet;

use regnet_core::{EarthModel, Modality};
use regnet_geometry::GeometryProvider;

use crate::adjacency::AdjacencyBuilder;
use crate::config::NetworkConfig;
use crate::error::GraphError;
use crate::model::{Graph, Region};
use crate::routes::RouteSynthesizer;

/// Run the full pipeline.
pub fn build_graph<P>(provider: &P, config: &NetworkConfig) -> Result<Graph, GraphError>
where
    P: GeometryProvider + ?Sized,
{
    config.validate()?;
    let model: EarthModel = config.distance_model;

    let known: BTreeSet<&str> = provider.features().iter().map(|f| f.name.as_str()).collect();
    for &modality in Modality::routed() {
        let Some(section) = config.section(modality) else {
            continue;
        };
        if let Some(ghost) = section.hubs.keys().find(|n| !known.contains(n.as_str())) {
            return Err(GraphError::unknown(ghost, format!("{modality} hub registry")));
        }
    }

    let mut regions = Vec::with_capacity(provider.features().len());
    for feature in provider.features() {
        let mut region = Region::new(feature.name.clone(), feature.centroid);
        for &modality in Modality::routed() {
            if let Some(hub) = config
                .section(modality)
                .and_then(|s| s.hubs.get(&feature.name))
            {
                region = region.with_hub(modality, *hub)?;
            }
        }
        regions.push(region);
    }

    let mut edge_sets = vec![AdjacencyBuilder::new(model).build_land_edges(provider)?];
    let synthesizer = RouteSynthesizer::new(model);
    for &modality in Modality::routed() {
        if let Some(section) = config.section(modality) {
            let registry = config.hub_registry(modality)?;
            edge_sets.push(synthesizer.build_threshold_edges(&registry, section.threshold())?);
        }
    }

    let graph = Graph::merge(regions, edge_sets)?;
    let [(_, land), (_, sea), (_, air)] = graph.modality_counts();
    tracing::info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        land,
        sea,
        air,
        model = %model,
        "connectivity graph built"
    );
    Ok(graph)
}

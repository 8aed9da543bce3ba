//! # End-to-End Build Scenarios
//!
//! Small graphs with hand-checked distances, run through `build_graph`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use regnet_core::{Coordinate, EarthModel, Modality, ModalitySet, RegionName};
use regnet_geometry::{AdjacencyTableProvider, GeometryProvider, RegionFeature};
use regnet_graph::{build_graph, partition, GraphError, ModalityConfig, NetworkConfig};

fn name(s: &str) -> RegionName {
    RegionName::new(s).unwrap()
}

fn coord(lat: f64, lon: f64) -> Coordinate {
    Coordinate::new(lat, lon).unwrap()
}

fn feature(s: &str, lat: f64, lon: f64) -> RegionFeature {
    RegionFeature::new(name(s), coord(lat, lon))
}

fn table(features: Vec<RegionFeature>, neighbors: &[(&str, &str)]) -> AdjacencyTableProvider {
    AdjacencyTableProvider::new(
        features,
        neighbors.iter().map(|(a, b)| (name(a), name(b))).collect(),
    )
    .unwrap()
}

fn section(threshold_km: f64, hubs: &[(&str, f64, f64)]) -> ModalityConfig {
    let mut s = ModalityConfig::new(threshold_km);
    for (n, lat, lon) in hubs {
        s.hubs.insert(name(n), coord(*lat, *lon));
    }
    s
}

#[test]
fn touching_regions_500_km_apart() {
    let provider = table(
        vec![feature("A", 0.0, 0.0), feature("B", 0.0, 4.4966)],
        &[("A", "B")],
    );
    let graph = build_graph(&provider, &NetworkConfig::default()).unwrap();
    assert_eq!(graph.edge_count(), 1);
    let edge = &graph.edges()[0];
    assert_eq!(edge.modality(), Modality::Land);
    assert_eq!(edge.low().as_str(), "A");
    assert_eq!(edge.high().as_str(), "B");
    assert_eq!(edge.weight().value(), 500.0);
}

#[test]
fn sea_hubs_ten_degrees_apart() {
    let provider = table(vec![feature("X", 1.0, 1.0), feature("Y", 1.0, 9.0)], &[]);
    let hubs = [("X", 0.0, 0.0), ("Y", 0.0, 10.0)];

    let config = NetworkConfig {
        sea: Some(section(5000.0, &hubs)),
        ..NetworkConfig::default()
    };
    let graph = build_graph(&provider, &config).unwrap();
    let sea = graph.edges_by_modality(Modality::Sea);
    assert_eq!(sea.len(), 1);
    assert_eq!(sea[0].weight().value(), 1111.9);

    let config = NetworkConfig {
        sea: Some(section(1000.0, &hubs)),
        ..NetworkConfig::default()
    };
    let graph = build_graph(&provider, &config).unwrap();
    assert!(graph.edges_by_modality(Modality::Sea).is_empty());
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn air_only_region_is_still_a_node() {
    let provider = table(
        vec![
            feature("P", 0.0, 0.0),
            feature("Q", 0.0, 5.0),
            feature("AirOnly", 5.0, 5.0),
        ],
        &[],
    );
    let config = NetworkConfig {
        distance_model: EarthModel::Spherical,
        sea: Some(section(5000.0, &[("P", 0.0, 0.0), ("Q", 0.0, 5.0)])),
        air: Some(section(
            8000.0,
            &[("P", 0.0, 0.0), ("Q", 0.0, 5.0), ("AirOnly", 5.0, 5.0)],
        )),
    };
    let graph = build_graph(&provider, &config).unwrap();
    assert!(graph.contains("AirOnly"));
    let air_only_edges = graph.edges_of("AirOnly").unwrap();
    assert_eq!(air_only_edges.len(), 2);
    assert!(air_only_edges.iter().all(|e| e.modality() == Modality::Air));
    assert_eq!(graph.edges_by_modality(Modality::Sea).len(), 1);
    assert!(graph.region("AirOnly").unwrap().hub(Modality::Sea).is_none());
    assert!(graph.region("AirOnly").unwrap().hub(Modality::Air).is_some());
}

#[test]
fn hub_for_unknown_region_is_rejected() {
    let provider = table(vec![feature("A", 0.0, 0.0)], &[]);
    let config = NetworkConfig {
        sea: Some(section(5000.0, &[("A", 0.0, 0.0), ("Ghost", 0.0, 1.0)])),
        ..NetworkConfig::default()
    };
    match build_graph(&provider, &config) {
        Err(GraphError::UnknownRegionReference { region, .. }) => assert_eq!(region, "Ghost"),
        other => panic!("unexpected result: {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn hub_for_unknown_region_is_rejected_even_without_edges() {
    let provider = table(vec![feature("A", 0.0, 0.0)], &[]);
    let config = NetworkConfig {
        sea: Some(section(100.0, &[("A", 0.0, 0.0), ("Ghost", 0.0, 50.0)])),
        ..NetworkConfig::default()
    };
    match build_graph(&provider, &config) {
        Err(GraphError::UnknownRegionReference { region, context }) => {
            assert_eq!(region, "Ghost");
            assert_eq!(context, "sea hub registry");
        }
        other => panic!("unexpected result: {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn partition_extremes() {
    let provider = table(
        vec![feature("A", 0.0, 0.0), feature("B", 0.0, 1.0)],
        &[("A", "B")],
    );
    let config = NetworkConfig {
        air: Some(section(8000.0, &[("A", 0.0, 0.0), ("B", 0.0, 1.0)])),
        ..NetworkConfig::default()
    };
    let graph = build_graph(&provider, &config).unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(partition(&graph, ModalitySet::empty()).edge_count(), 0);
    assert_eq!(partition(&graph, ModalitySet::all()).edge_count(), 2);
}

#[test]
fn rebuilds_are_identical_and_thresholds_change_the_digest() {
    let provider = table(
        vec![
            feature("A", 0.0, 0.0),
            feature("B", 0.0, 3.0),
            feature("C", 0.0, 20.0),
        ],
        &[("A", "B")],
    );
    let hubs = [("A", 0.0, 0.0), ("B", 0.0, 3.0), ("C", 0.0, 20.0)];
    let mut config = NetworkConfig {
        sea: Some(section(1000.0, &hubs)),
        ..NetworkConfig::default()
    };

    let first = build_graph(&provider, &config).unwrap();
    let second = build_graph(&provider, &config).unwrap();
    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.digest().unwrap(), second.digest().unwrap());

    config.set_threshold(Modality::Sea, 5000.0).unwrap();
    let wider = build_graph(&provider, &config).unwrap();
    assert!(wider.edge_count() > first.edge_count());
    assert_ne!(first.digest().unwrap(), wider.digest().unwrap());
}

/// Wraps a provider and counts `touches` calls per unordered pair.
struct Counting<P> {
    inner: P,
    calls: Mutex<HashMap<(String, String), usize>>,
}

impl<P: GeometryProvider> GeometryProvider for Counting<P> {
    fn features(&self) -> &[RegionFeature] {
        self.inner.features()
    }

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
        let key = if a < b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        };
        *self.calls.lock().unwrap().entry(key).or_default() += 1;
        self.inner.touches(a, b)
    }

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = regnet_geometry::all_pairs(self.features().len());
        // reversed duplicates must not cause a second test
        pairs.extend(pairs.clone().into_iter().map(|(i, j)| (j, i)));
        pairs
    }
}

#[test]
fn touches_is_called_at_most_once_per_pair() {
    let inner = table(
        vec![
            feature("A", 0.0, 0.0),
            feature("B", 0.0, 1.0),
            feature("C", 1.0, 0.0),
            feature("D", 1.0, 1.0),
        ],
        &[("A", "B"), ("C", "D"), ("B", "D")],
    );
    let provider = Counting {
        inner,
        calls: Mutex::new(HashMap::new()),
    };
    let graph = build_graph(&provider, &NetworkConfig::default()).unwrap();
    assert_eq!(graph.edges_by_modality(Modality::Land).len(), 3);

    let calls = provider.calls.lock().unwrap();
    assert_eq!(calls.len(), 6);
    assert!(calls.values().all(|&n| n == 1));
}

#[test]
fn graph_can_be_shared_across_threads() {
    let provider = table(
        vec![feature("A", 0.0, 0.0), feature("B", 0.0, 1.0)],
        &[("A", "B")],
    );
    let graph = Arc::new(build_graph(&provider, &NetworkConfig::default()).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let g = Arc::clone(&graph);
            std::thread::spawn(move || g.degree("A").unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 1);
    }
}

//! # Threshold Route Synthesis
//!
//! Sea and air edges are not derived from geometry. Each routed modality has
//! a hub registry mapping regions to a port or airport coordinate, and an
//! edge exists between two registered regions when their hubs are closer
//! than the modality threshold.
//!
//! ## Invariant
//!
//! Every emitted edge has a weight strictly below the threshold: the raw
//! distance is tested with `<`, and a distance that would round up to the
//! threshold is excluded as well. Regions missing from a registry simply
//! have no edges of that modality.

use std::collections::BTreeMap;

use regnet_core::{Coordinate, DistanceModel, EarthModel, Kilometers, Modality, RegionName};
use regnet_geometry::all_pairs;

use crate::edge::Edge;
use crate::error::GraphError;

/// Hub coordinates for one routed modality, keyed by region.
#[derive(Debug, Clone, PartialEq)]
pub struct HubRegistry {
    modality: Modality,
    hubs: BTreeMap<RegionName, Coordinate>,
}

impl HubRegistry {
    /// An empty registry. `land` is rejected.
    pub fn new(modality: Modality) -> Result<Self, GraphError> {
        if !modality.is_routed() {
            return Err(GraphError::InvalidModality(modality));
        }
        Ok(Self {
            modality,
            hubs: BTreeMap::new(),
        })
    }

    /// A registry populated from `(region, hub)` entries. Later entries for
    /// the same region replace earlier ones.
    pub fn with_hubs(
        modality: Modality,
        hubs: impl IntoIterator<Item = (RegionName, Coordinate)>,
    ) -> Result<Self, GraphError> {
        let mut registry = Self::new(modality)?;
        registry.hubs.extend(hubs);
        Ok(registry)
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Register or replace a hub, returning the previous coordinate.
    pub fn insert(&mut self, region: RegionName, hub: Coordinate) -> Option<Coordinate> {
        self.hubs.insert(region, hub)
    }

    pub fn get(&self, region: &str) -> Option<Coordinate> {
        self.hubs.get(region).copied()
    }

    pub fn contains(&self, region: &str) -> bool {
        self.hubs.contains_key(region)
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// Entries in region-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&RegionName, &Coordinate)> {
        self.hubs.iter()
    }
}

/// Synthesizes threshold-based route edges for one modality at a time.
#[derive(Debug, Clone, Default)]
pub struct RouteSynthesizer<D = EarthModel> {
    model: D,
}

impl<D: DistanceModel> RouteSynthesizer<D> {
    pub fn new(model: D) -> Self {
        Self { model }
    }

    /// Emit an edge for every registered pair whose hubs are closer than
    /// `threshold`. Output is sorted by key.
    pub fn build_threshold_edges(
        &self,
        hubs: &HubRegistry,
        threshold: Kilometers,
    ) -> Result<Vec<Edge>, GraphError> {
        let modality = hubs.modality();
        if !threshold.is_positive() {
            return Err(GraphError::InvalidThreshold {
                modality,
                value: threshold.value(),
            });
        }

        let entries: Vec<(&RegionName, &Coordinate)> = hubs.iter().collect();
        let pairs = all_pairs(entries.len());
        let mut edges = self.evaluate_all(&entries, &pairs, modality, threshold)?;
        edges.sort_by(|a, b| a.key().cmp(b.key()));

        tracing::debug!(
            %modality,
            hubs = entries.len(),
            pairs = pairs.len(),
            edges = edges.len(),
            threshold_km = threshold.value(),
            model = self.model.name(),
            "route edges synthesized"
        );
        Ok(edges)
    }

    #[cfg(not(feature = "parallel"))]
    fn evaluate_all(
        &self,
        entries: &[(&RegionName, &Coordinate)],
        pairs: &[(usize, usize)],
        modality: Modality,
        threshold: Kilometers,
    ) -> Result<Vec<Edge>, GraphError> {
        pairs
            .iter()
            .filter_map(|&(i, j)| {
                self.evaluate(entries[i], entries[j], modality, threshold)
                    .transpose()
            })
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn evaluate_all(
        &self,
        entries: &[(&RegionName, &Coordinate)],
        pairs: &[(usize, usize)],
        modality: Modality,
        threshold: Kilometers,
    ) -> Result<Vec<Edge>, GraphError> {
        use rayon::prelude::*;

        pairs
            .par_iter()
            .filter_map(|&(i, j)| {
                self.evaluate(entries[i], entries[j], modality, threshold)
                    .transpose()
            })
            .collect()
    }

    fn evaluate(
        &self,
        (a, hub_a): (&RegionName, &Coordinate),
        (b, hub_b): (&RegionName, &Coordinate),
        modality: Modality,
        threshold: Kilometers,
    ) -> Result<Option<Edge>, GraphError> {
        let distance = self.model.distance(*hub_a, *hub_b);
        if distance >= threshold || distance.round_to_tenth() >= threshold {
            return Ok(None);
        }
        Edge::new(a.clone(), b.clone(), modality, distance).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regnet_core::Haversine;

    fn name(s: &str) -> RegionName {
        RegionName::new(s).unwrap()
    }

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn xy() -> HubRegistry {
        HubRegistry::with_hubs(
            Modality::Sea,
            [(name("X"), coord(0.0, 0.0)), (name("Y"), coord(0.0, 10.0))],
        )
        .unwrap()
    }

    #[test]
    fn pair_under_threshold_yields_edge() {
        let edges = RouteSynthesizer::new(Haversine::default())
            .build_threshold_edges(&xy(), Kilometers::new(5000.0))
            .unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].modality(), Modality::Sea);
        assert_eq!(edges[0].weight().value(), 1111.9);
        assert_eq!(edges[0].low().as_str(), "X");
    }

    #[test]
    fn pair_over_threshold_yields_nothing() {
        let edges = RouteSynthesizer::new(Haversine::default())
            .build_threshold_edges(&xy(), Kilometers::new(1000.0))
            .unwrap();
        assert!(edges.is_empty());
    }

    #[test]
    fn threshold_is_strict_after_rounding() {
        // 1111.949 km raw, 1111.9 rounded
        let synth = RouteSynthesizer::new(Haversine::default());
        assert!(synth
            .build_threshold_edges(&xy(), Kilometers::new(1111.9))
            .unwrap()
            .is_empty());
        assert_eq!(
            synth
                .build_threshold_edges(&xy(), Kilometers::new(1112.0))
                .unwrap()
                .len(),
            1
        );
    }

    #[test]
    fn land_registry_is_rejected() {
        assert!(matches!(
            HubRegistry::new(Modality::Land),
            Err(GraphError::InvalidModality(Modality::Land))
        ));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        let synth = RouteSynthesizer::<EarthModel>::default();
        assert!(matches!(
            synth.build_threshold_edges(&xy(), Kilometers::ZERO),
            Err(GraphError::InvalidThreshold { .. })
        ));
        assert!(matches!(
            synth.build_threshold_edges(&xy(), Kilometers::new(f64::INFINITY)),
            Err(GraphError::InvalidThreshold { .. })
        ));
    }

    #[test]
    fn single_or_empty_registry_yields_nothing() {
        let synth = RouteSynthesizer::<EarthModel>::default();
        let empty = HubRegistry::new(Modality::Air).unwrap();
        assert!(synth
            .build_threshold_edges(&empty, Kilometers::new(8000.0))
            .unwrap()
            .is_empty());
        let single = HubRegistry::with_hubs(Modality::Air, [(name("X"), coord(0.0, 0.0))]).unwrap();
        assert!(synth
            .build_threshold_edges(&single, Kilometers::new(8000.0))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn registry_replaces_and_looks_up() {
        let mut reg = xy();
        assert_eq!(reg.len(), 2);
        let previous = reg.insert(name("X"), coord(1.0, 1.0));
        assert_eq!(previous, Some(coord(0.0, 0.0)));
        assert_eq!(reg.get("X"), Some(coord(1.0, 1.0)));
        assert!(reg.contains("Y"));
        assert!(!reg.contains("Z"));
    }
}

//! # Route Synthesis Properties

use proptest::prelude::*;
use regnet_core::{Coordinate, Haversine, Kilometers, Modality, RegionName};
use regnet_graph::{HubRegistry, RouteSynthesizer};

fn hubs() -> impl Strategy<Value = HubRegistry> {
    prop::collection::btree_map(
        "[A-H]",
        (-80.0f64..=80.0, -180.0f64..=180.0),
        0..8,
    )
    .prop_map(|entries| {
        HubRegistry::with_hubs(
            Modality::Sea,
            entries.into_iter().map(|(n, (lat, lon))| {
                (RegionName::new(n).unwrap(), Coordinate::new(lat, lon).unwrap())
            }),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn weights_stay_below_threshold(registry in hubs(), threshold in 1.0f64..20000.0) {
        let threshold = Kilometers::new(threshold);
        let edges = RouteSynthesizer::new(Haversine::default())
            .build_threshold_edges(&registry, threshold)
            .unwrap();
        let n = registry.len();
        prop_assert!(edges.len() <= n * n.saturating_sub(1) / 2);
        for edge in &edges {
            prop_assert!(edge.weight() < threshold);
            prop_assert_ne!(edge.low(), edge.high());
            prop_assert!(registry.contains(edge.low().as_str()));
            prop_assert!(registry.contains(edge.high().as_str()));
            prop_assert_eq!(edge.modality(), Modality::Sea);
        }
    }

    #[test]
    fn synthesis_is_idempotent(registry in hubs(), threshold in 1.0f64..20000.0) {
        let synth = RouteSynthesizer::new(Haversine::default());
        let threshold = Kilometers::new(threshold);
        prop_assert_eq!(
            synth.build_threshold_edges(&registry, threshold).unwrap(),
            synth.build_threshold_edges(&registry, threshold).unwrap()
        );
    }
}

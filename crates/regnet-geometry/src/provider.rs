//! # Geometry Provider
//!
//! The capability the graph core consumes. Any backing store satisfies it:
//! vector data, fixtures, or hardcoded tables.

use regnet_core::{Coordinate, RegionName};
use serde::{Deserialize, Serialize};

/// A region as seen by the graph core: a name and a representative point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFeature {
    pub name: RegionName,
    pub centroid: Coordinate,
}

impl RegionFeature {
    pub fn new(name: RegionName, centroid: Coordinate) -> Self {
        Self { name, centroid }
    }
}

/// Supplies region features and the boundary-touching predicate.
///
/// ## Contract
///
/// - `features()` has unique names and a stable order; that order becomes
///   the graph's node order.
/// - `touches(a, b) == touches(b, a)`, and `touches(a, a)` is false.
/// - `candidate_pairs()` returns index pairs `(i, j)` with `i < j` into
///   `features()`. Every touching pair must be among them. Providers with a
///   spatial index return a pruned list; the default is every pair.
pub trait GeometryProvider: Send + Sync {
    fn features(&self) -> &[RegionFeature];

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool;

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        all_pairs(self.features().len())
    }
}

impl<P: GeometryProvider + ?Sized> GeometryProvider for Box<P> {
    fn features(&self) -> &[RegionFeature] {
        (**self).features()
    }

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
        (**self).touches(a, b)
    }

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        (**self).candidate_pairs()
    }
}

impl<P: GeometryProvider + ?Sized> GeometryProvider for &P {
    fn features(&self) -> &[RegionFeature] {
        (**self).features()
    }

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
        (**self).touches(a, b)
    }

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        (**self).candidate_pairs()
    }
}

/// Every unordered index pair `(i, j)` with `i < j < n`.
pub fn all_pairs(n: usize) -> Vec<(usize, usize)> {
    let mut pairs = Vec::with_capacity(n.saturating_sub(1) * n / 2);
    for i in 0..n {
        for j in (i + 1)..n {
            pairs.push((i, j));
        }
    }
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(Vec<RegionFeature>);

    impl GeometryProvider for Line {
        fn features(&self) -> &[RegionFeature] {
            &self.0
        }

        fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
            a != b
        }
    }

    fn feature(name: &str) -> RegionFeature {
        RegionFeature::new(
            RegionName::new(name).unwrap(),
            Coordinate::new(0.0, 0.0).unwrap(),
        )
    }

    #[test]
    fn all_pairs_counts() {
        assert!(all_pairs(0).is_empty());
        assert!(all_pairs(1).is_empty());
        assert_eq!(all_pairs(2), vec![(0, 1)]);
        assert_eq!(all_pairs(4).len(), 6);
        assert!(all_pairs(5).iter().all(|(i, j)| i < j));
    }

    #[test]
    fn default_candidate_pairs_cover_everything() {
        let p = Line(vec![feature("A"), feature("B"), feature("C")]);
        assert_eq!(p.candidate_pairs(), vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn boxed_and_borrowed_providers_delegate() {
        let p = Line(vec![feature("A"), feature("B")]);
        let a = RegionName::new("A").unwrap();
        let b = RegionName::new("B").unwrap();
        assert!((&p).touches(&a, &b));

        let boxed: Box<dyn GeometryProvider> = Box::new(p);
        assert_eq!(boxed.features().len(), 2);
        assert_eq!(boxed.candidate_pairs(), vec![(0, 1)]);
    }
}

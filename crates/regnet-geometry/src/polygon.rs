//! # Polygon Provider
//!
//! Regions backed by boundary rings. Centroids default to the area-weighted
//! planar centroid of the rings, in the same way a GIS `centroid` attribute is
//! computed on unprojected data. An explicit centroid overrides it.
//!
//! Candidate pairs come from an R-tree over bounding boxes padded by the
//! tolerance, so `touches` is only evaluated for regions whose boxes meet.

use std::collections::{BTreeSet, HashMap};

use regnet_core::{Coordinate, RegionName};
use rstar::primitives::{GeomWithData, Rectangle};
use rstar::{RTree, RTreeObject};

use crate::boundary::Boundary;
use crate::error::GeometryError;
use crate::provider::{GeometryProvider, RegionFeature};

/// Default distance (in degrees) under which two boundaries are considered
/// to share a point.
pub const DEFAULT_TOUCH_TOLERANCE_DEG: f64 = 1e-9;

/// A region with its boundary and an optional centroid override.
#[derive(Debug, Clone)]
pub struct PolygonRegion {
    pub name: RegionName,
    pub boundary: Boundary,
    pub centroid: Option<Coordinate>,
}

impl PolygonRegion {
    pub fn new(name: RegionName, boundary: Boundary) -> Self {
        Self {
            name,
            boundary,
            centroid: None,
        }
    }

    pub fn with_centroid(mut self, centroid: Coordinate) -> Self {
        self.centroid = Some(centroid);
        self
    }
}

/// A [`GeometryProvider`] over polygon boundaries.
#[derive(Debug, Clone)]
pub struct PolygonProvider {
    features: Vec<RegionFeature>,
    boundaries: Vec<Boundary>,
    index: HashMap<RegionName, usize>,
    tolerance: f64,
}

impl PolygonProvider {
    /// Build the provider. Region order is preserved.
    pub fn new(regions: Vec<PolygonRegion>, tolerance: f64) -> Result<Self, GeometryError> {
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(GeometryError::InvalidTolerance(tolerance));
        }
        let mut features = Vec::with_capacity(regions.len());
        let mut boundaries = Vec::with_capacity(regions.len());
        let mut index = HashMap::with_capacity(regions.len());
        for region in regions {
            if index.contains_key(&region.name) {
                return Err(GeometryError::DuplicateRegion(region.name));
            }
            let centroid = match region.centroid {
                Some(c) => c,
                None => region.boundary.centroid()?,
            };
            index.insert(region.name.clone(), features.len());
            features.push(RegionFeature::new(region.name, centroid));
            boundaries.push(region.boundary);
        }
        tracing::debug!(regions = features.len(), tolerance, "polygon provider built");
        Ok(Self {
            features,
            boundaries,
            index,
            tolerance,
        })
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn boundary(&self, name: &RegionName) -> Option<&Boundary> {
        self.index.get(name).map(|&i| &self.boundaries[i])
    }
}

impl GeometryProvider for PolygonProvider {
    fn features(&self) -> &[RegionFeature] {
        &self.features
    }

    fn touches(&self, a: &RegionName, b: &RegionName) -> bool {
        if a == b {
            return false;
        }
        match (self.index.get(a), self.index.get(b)) {
            (Some(&i), Some(&j)) => self.boundaries[i].touches(&self.boundaries[j], self.tolerance),
            _ => false,
        }
    }

    fn candidate_pairs(&self) -> Vec<(usize, usize)> {
        let tol = self.tolerance;
        let entries: Vec<GeomWithData<Rectangle<[f64; 2]>, usize>> = self
            .boundaries
            .iter()
            .enumerate()
            .map(|(i, boundary)| {
                let rect = boundary.bbox();
                let envelope = Rectangle::from_corners(
                    [rect.min().x - tol, rect.min().y - tol],
                    [rect.max().x + tol, rect.max().y + tol],
                );
                GeomWithData::new(envelope, i)
            })
            .collect();
        let tree = RTree::bulk_load(entries);

        let mut pairs = BTreeSet::new();
        for entry in tree.iter() {
            let envelope = entry.envelope();
            for other in tree.locate_in_envelope_intersecting(&envelope) {
                if entry.data < other.data {
                    pairs.insert((entry.data, other.data));
                }
            }
        }
        pairs.into_iter().collect()
    }
}

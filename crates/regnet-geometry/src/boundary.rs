//! # Region Boundaries
//!
//! A `Boundary` is a `geo::MultiPolygon` in planar lon/lat degrees, one
//! polygon per landmass of the region. Holes are not modelled.
//!
//! ## Predicates
//!
//! - [`Boundary::centroid`]: area-weighted planar centroid of all polygons.
//! - [`Boundary::touches`]: the DE-9IM relation is `touches` (the boundaries
//!   share a point and the interiors do not intersect). Corner contact
//!   counts. Disjoint shapes closer than the tolerance also count.
//!
//! Rings are planar in lon/lat; a ring crossing the antimeridian must be
//! split by whoever builds it.

use geo::orient::{Direction, Orient};
use geo::{
    Area, BoundingRect, Centroid, EuclideanDistance, LineString, MultiPolygon, Polygon, Rect,
    Relate,
};
use regnet_core::{Coordinate, CoordinateError};

/// A planar point: `[lon, lat]` in degrees.
pub type Point = [f64; 2];

/// A validated multi-ring boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Boundary {
    shape: MultiPolygon<f64>,
    bbox: Rect<f64>,
}

impl Boundary {
    /// Validate rings and build a boundary.
    ///
    /// Closed and open ring input are equivalent. Each ring needs at least
    /// three distinct vertices and non-zero area; every vertex must be a
    /// valid coordinate.
    pub fn new(rings: Vec<Vec<Point>>) -> Result<Self, String> {
        if rings.is_empty() {
            return Err("boundary has no rings".to_string());
        }
        let mut polygons = Vec::with_capacity(rings.len());
        for (i, mut ring) in rings.into_iter().enumerate() {
            if ring.len() > 1 && ring.first() == ring.last() {
                ring.pop();
            }
            if ring.len() < 3 {
                return Err(format!("ring {i} has fewer than 3 vertices"));
            }
            for [lon, lat] in &ring {
                Coordinate::new(*lat, *lon).map_err(|e| format!("ring {i}: {e}"))?;
            }
            let polygon = Polygon::new(LineString::from(ring), vec![]);
            if polygon.unsigned_area() == 0.0 {
                return Err(format!("ring {i} has zero area"));
            }
            polygons.push(polygon.orient(Direction::Default));
        }
        let shape = MultiPolygon::new(polygons);
        let bbox = shape
            .bounding_rect()
            .ok_or_else(|| "boundary has no extent".to_string())?;
        Ok(Self { shape, bbox })
    }

    pub fn shape(&self) -> &MultiPolygon<f64> {
        &self.shape
    }

    /// Bounding rectangle; `x` is longitude and `y` latitude.
    pub fn bbox(&self) -> Rect<f64> {
        self.bbox
    }

    /// Area-weighted planar centroid of all polygons.
    ///
    /// Self-intersecting rings can push the centroid outside the vertex
    /// hull; the result is clamped to the valid range.
    pub fn centroid(&self) -> Result<Coordinate, CoordinateError> {
        let (lon, lat) = match self.shape.centroid() {
            Some(point) => point.x_y(),
            None => (f64::NAN, f64::NAN),
        };
        Coordinate::new(lat.clamp(-90.0, 90.0), lon.clamp(-180.0, 180.0))
    }

    /// True when the boundaries meet and the interiors do not overlap.
    pub fn touches(&self, other: &Boundary, tolerance: f64) -> bool {
        let matrix = self.shape.relate(&other.shape);
        if matrix.is_touches() {
            return true;
        }
        tolerance > 0.0 && matrix.is_disjoint() && self.gap(other) <= tolerance
    }

    /// Smallest planar distance between any two polygons.
    fn gap(&self, other: &Boundary) -> f64 {
        self.shape
            .iter()
            .flat_map(|a| other.shape.iter().map(move |b| a.euclidean_distance(b)))
            .fold(f64::INFINITY, f64::min)
    }
}

//! # regnet-geometry: Geometry Provider Capability
//!
//! The graph core never reads shapefiles. It consumes the
//! [`GeometryProvider`] capability: a list of named regions with centroids,
//! a `touches` predicate, and the candidate pairs worth testing.
//!
//! - **Table** ([`table`]): explicit centroids and neighbour pairs. Backs
//!   fixtures and hardcoded tables.
//!
//! - **Polygon** ([`polygon`]): lon/lat boundary rings. Centroids are
//!   area-weighted; candidate pairs come from an R-tree of bounding boxes;
//!   `touches` is the DE-9IM touches relation from `geo`.
//!
//! - **Source** ([`source`]): serde form of either provider, tagged by
//!   `provider: table | polygons`.
//!
//! ## Crate Policy
//!
//! - Depends only on `regnet-core` internally.
//! - Providers are immutable after construction and `Send + Sync`.

pub mod boundary;
pub mod error;
pub mod polygon;
pub mod provider;
pub mod source;
pub mod table;

pub use boundary::{Boundary, Point};
pub use error::GeometryError;
pub use polygon::{PolygonProvider, PolygonRegion, DEFAULT_TOUCH_TOLERANCE_DEG};
pub use provider::{all_pairs, GeometryProvider, RegionFeature};
pub use source::{GeometrySource, PolygonRegionSpec, TableRegionSpec};
pub use table::AdjacencyTableProvider;

//! # regnet-graph: Multi-Modal Connectivity Graph
//!
//! Builds a weighted graph over geographic regions in which every edge is
//! one of three independent relations:
//!
//! - **Land** ([`adjacency`]): the region boundaries touch. Weighted by
//!   centroid distance.
//! - **Sea / Air** ([`routes`]): both regions have a hub for the modality
//!   and the hubs are closer than the modality threshold. Weighted by hub
//!   distance.
//!
//! The builders' outputs are merged into a [`Graph`] ([`model`]), a
//! multigraph keyed by (region pair, modality). Consumers filter it with
//! [`EdgeClassifier`] ([`classify`]), query routes with
//! [`shortest_route`] ([`path`]), or hash it with [`Graph::digest`].
//!
//! [`build_graph`] ([`pipeline`]) runs the whole sequence from a
//! [`GeometryProvider`](regnet_geometry::GeometryProvider) and a
//! [`NetworkConfig`] ([`config`]).
//!
//! ## Crate Policy
//!
//! - No I/O. Configuration arrives as a parsed value or a string.
//! - Every weight is kilometres rounded to one decimal.
//! - With the `parallel` feature, pair evaluation runs on rayon. Output is
//!   sorted by edge key either way, so both paths build equal graphs.

pub mod adjacency;
pub mod classify;
pub mod config;
pub mod edge;
pub mod error;
pub mod model;
pub mod path;
pub mod pipeline;
pub mod routes;

pub use adjacency::AdjacencyBuilder;
pub use classify::{
    partition, ClassificationPolicy, EdgeClassifier, Subgraph, VisualWeight,
    DEFAULT_LAND_BELOW_KM,
};
pub use config::{ModalityConfig, NetworkConfig};
pub use edge::{Edge, EdgeKey};
pub use error::GraphError;
pub use model::{
    CollapsePolicy, EdgeSnapshot, Graph, GraphSnapshot, MicroDegrees, NodeSnapshot, Region,
};
pub use path::{shortest_route, Route};
pub use pipeline::build_graph;
pub use routes::{HubRegistry, RouteSynthesizer};

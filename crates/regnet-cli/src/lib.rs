//! # regnet-cli: Connectivity Graph Command-Line Interface
//!
//! Loads a region fixture and a hub configuration, runs the regnet
//! pipeline, and prints the result.
//!
//! ## Subcommands
//!
//! - `regnet build`: Build the graph and print a summary, JSON, or DOT.
//! - `regnet nodes`: Numbered region table.
//! - `regnet route`: Shortest route between two regions.
//! - `regnet distance`: Great-circle distance between two coordinates.
//!
//! ```bash
//! regnet build crates/regnet-cli/data/asia-demo.yaml --format dot --modalities land,sea
//! regnet --config hubs.yaml route regions.yaml --from Japan --to India
//! regnet distance 0 0 0 10
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; graph semantics live in `regnet-graph`.
//! - Handlers return `anyhow::Result<u8>`, the process exit code.
//! - Without `--config` the bundled Asia hub registry is used.

pub mod build;
pub mod distance;
pub mod input;
pub mod nodes;
pub mod output;
pub mod route;

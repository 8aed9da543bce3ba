//! # Route Subcommand
//!
//! Shortest route between two regions over the selected modalities. Exits
//! with status 2 when the regions are not connected.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use regnet_core::ModalitySet;
use regnet_graph::shortest_route;

use crate::build::load_graph;
use crate::input::{load_config, NetworkOverrides};
use crate::output::render_route;

/// Exit status when no route exists.
pub const NO_ROUTE_EXIT: u8 = 2;

/// Arguments for the `regnet route` subcommand.
#[derive(Args, Debug)]
pub struct RouteArgs {
    /// Region file (table or polygon provider).
    pub regions: PathBuf,

    /// Origin region.
    #[arg(long)]
    pub from: String,

    /// Destination region.
    #[arg(long)]
    pub to: String,

    /// Modalities the route may use, comma-separated.
    #[arg(long, default_value = "all")]
    pub modalities: ModalitySet,

    /// Print the route as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub overrides: NetworkOverrides,
}

/// The rendered route, or `None` when the regions are not connected.
pub fn route_report(args: &RouteArgs, config_path: Option<&Path>) -> Result<Option<String>> {
    let config = load_config(config_path, &args.overrides)?;
    let graph = load_graph(&args.regions, &config)?;
    let Some(route) = shortest_route(&graph, &args.from, &args.to, args.modalities)? else {
        return Ok(None);
    };
    if args.json {
        Ok(Some(serde_json::to_string_pretty(&route)? + "\n"))
    } else {
        Ok(Some(render_route(&route)))
    }
}

/// Execute the route subcommand.
pub fn run_route(args: &RouteArgs, config_path: Option<&Path>) -> Result<u8> {
    match route_report(args, config_path)? {
        Some(report) => {
            print!("{report}");
            Ok(0)
        }
        None => {
            eprintln!(
                "no route from {} to {} using {}",
                args.from, args.to, args.modalities
            );
            Ok(NO_ROUTE_EXIT)
        }
    }
}

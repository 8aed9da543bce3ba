//! # Nodes Subcommand
//!
//! Prints the numbered region table that matches the node labels in DOT
//! output.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::build::load_graph;
use crate::input::{load_config, NetworkOverrides};
use crate::output::render_node_table;

/// Arguments for the `regnet nodes` subcommand.
#[derive(Args, Debug)]
pub struct NodesArgs {
    /// Region file (table or polygon provider).
    pub regions: PathBuf,
}

pub fn nodes_report(args: &NodesArgs, config_path: Option<&Path>) -> Result<String> {
    let config = load_config(config_path, &NetworkOverrides::default())?;
    let graph = load_graph(&args.regions, &config)?;
    Ok(render_node_table(&graph))
}

/// Execute the nodes subcommand.
pub fn run_nodes(args: &NodesArgs, config_path: Option<&Path>) -> Result<u8> {
    print!("{}", nodes_report(args, config_path)?);
    Ok(0)
}

//! # regnet CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use regnet_cli::build::{run_build, BuildArgs};
use regnet_cli::distance::{run_distance, DistanceArgs};
use regnet_cli::nodes::{run_nodes, NodesArgs};
use regnet_cli::route::{run_route, RouteArgs};

/// regnet: multi-modal connectivity graphs over geographic regions
///
/// Connects regions by land (shared borders), sea (ports within a
/// threshold), and air (airports within a threshold), weighting every edge
/// by great-circle distance in kilometres.
#[derive(Parser, Debug)]
#[command(name = "regnet", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Hub configuration file. Defaults to the bundled Asia registry.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the connectivity graph and print it.
    Build(BuildArgs),

    /// Print the numbered region table.
    Nodes(NodesArgs),

    /// Find the shortest route between two regions.
    Route(RouteArgs),

    /// Great-circle distance between two coordinates.
    Distance(DistanceArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "regnet starting");

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Build(args) => run_build(args, config),
        Commands::Nodes(args) => run_nodes(args, config),
        Commands::Route(args) => run_route(args, config),
        Commands::Distance(args) => run_distance(args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

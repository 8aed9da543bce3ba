//! # Build Subcommand
//!
//! Runs the full pipeline over a region file and prints the graph, or the
//! part of it selected by `--modalities`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use regnet_core::ModalitySet;
use regnet_graph::{
    build_graph, ClassificationPolicy, EdgeClassifier, Graph, NetworkConfig, VisualWeight,
};

use crate::input::{load_config, load_provider, NetworkOverrides};
use crate::output::{render_dot, render_json, render_summary, OutputFormat};

/// Arguments for the `regnet build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Region file (table or polygon provider).
    pub regions: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value = "summary")]
    pub format: OutputFormat,

    /// Modalities to show, comma-separated (`land,sea,air`, `all`, `none`).
    #[arg(long, default_value = "all")]
    pub modalities: ModalitySet,

    /// Classify edges by weight band instead of by their own modality.
    #[arg(long)]
    pub legacy_bands: bool,

    /// Upper bound of the land band in km, with `--legacy-bands`.
    #[arg(long, default_value_t = regnet_graph::DEFAULT_LAND_BELOW_KM, requires = "legacy_bands")]
    pub land_below_km: f64,

    /// Write output to a file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: NetworkOverrides,
}

/// Load inputs and run the pipeline.
pub fn load_graph(regions: &Path, config: &NetworkConfig) -> Result<Graph> {
    let provider = load_provider(regions)?;
    build_graph(provider.as_ref(), config)
        .with_context(|| format!("failed to build graph from {}", regions.display()))
}

/// Build the graph and render it in the requested format.
pub fn build_report(args: &BuildArgs, config_path: Option<&Path>) -> Result<String> {
    let config = load_config(config_path, &args.overrides)?;
    let graph = load_graph(&args.regions, &config)?;
    let policy = if args.legacy_bands {
        ClassificationPolicy::weight_band_for(&graph, args.land_below_km)
    } else {
        ClassificationPolicy::ByModality
    };
    let classifier = EdgeClassifier::new(policy);
    let view = classifier.partition(&graph, args.modalities);
    tracing::info!(
        visible = view.edge_count(),
        total = graph.edge_count(),
        modalities = %args.modalities,
        "view selected"
    );

    match args.format {
        OutputFormat::Summary => render_summary(&graph, &view, args.modalities),
        OutputFormat::Json => render_json(
            &graph,
            &view,
            args.modalities,
            config.distance_model.as_str(),
        ),
        OutputFormat::Dot => Ok(render_dot(
            &view,
            classifier.policy(),
            args.modalities,
            &VisualWeight::default(),
        )),
    }
}

/// Execute the build subcommand.
pub fn run_build(args: &BuildArgs, config_path: Option<&Path>) -> Result<u8> {
    let report = build_report(args, config_path)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(0)
}

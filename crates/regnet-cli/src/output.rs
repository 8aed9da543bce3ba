//! # Output Rendering
//!
//! Text renderings of graphs, views, and routes. Every function returns a
//! `String`; handlers decide where it goes.

use std::fmt::Write as _;

use anyhow::Result;
use clap::ValueEnum;
use regnet_core::{Modality, ModalitySet};
use regnet_graph::{ClassificationPolicy, Edge, Graph, Route, Subgraph, VisualWeight};
use serde_json::json;

/// Output format for `regnet build`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Counts, digest, and the visible edge list.
    Summary,
    /// JSON document with regions and visible edges.
    Json,
    /// Graphviz DOT graph (renderable with `neato -Tsvg`).
    Dot,
}

/// Stroke colour per display class.
pub fn modality_color(modality: Modality) -> &'static str {
    match modality {
        Modality::Land => "brown",
        Modality::Sea => "blue",
        Modality::Air => "green",
    }
}

/// The class an edge is drawn as: the first of its classes that is active,
/// falling back to its own tag.
pub fn display_class(policy: &ClassificationPolicy, active: ModalitySet, edge: &Edge) -> Modality {
    policy
        .classify(edge)
        .iter()
        .find(|m| active.contains(*m))
        .unwrap_or(edge.modality())
}

pub fn render_summary(graph: &Graph, view: &Subgraph<'_>, active: ModalitySet) -> Result<String> {
    let [(_, land), (_, sea), (_, air)] = graph.modality_counts();
    let mut out = String::new();
    writeln!(out, "regions: {}", graph.node_count())?;
    writeln!(
        out,
        "edges: {} (land {land}, sea {sea}, air {air})",
        graph.edge_count()
    )?;
    writeln!(out, "digest: {}", graph.digest()?)?;
    writeln!(out, "showing {active}: {} edges", view.edge_count())?;
    for edge in view.edges() {
        writeln!(out, "  {edge}")?;
    }
    Ok(out)
}

pub fn render_json(
    graph: &Graph,
    view: &Subgraph<'_>,
    active: ModalitySet,
    model: &str,
) -> Result<String> {
    let regions: Vec<_> = graph
        .numbered_labels()
        .into_iter()
        .zip(graph.nodes())
        .map(|((number, _), region)| {
            json!({
                "number": number,
                "name": region.name(),
                "centroid": region.centroid(),
                "sea_hub": region.hub(Modality::Sea),
                "air_hub": region.hub(Modality::Air),
            })
        })
        .collect();
    let edges: Vec<_> = view
        .edge_labels()
        .into_iter()
        .map(|(edge, label)| {
            json!({
                "low": edge.low(),
                "high": edge.high(),
                "modality": edge.modality(),
                "weight_km": edge.weight(),
                "label": label,
            })
        })
        .collect();
    let doc = json!({
        "digest": graph.digest()?.to_string(),
        "distance_model": model,
        "modalities": active.to_string(),
        "regions": regions,
        "edges": edges,
    });
    Ok(serde_json::to_string_pretty(&doc)?)
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

/// Numbered nodes, edges coloured by display class, stroke width from the
/// visual-weight transform, and distance labels.
pub fn render_dot(
    view: &Subgraph<'_>,
    policy: &ClassificationPolicy,
    active: ModalitySet,
    transform: &VisualWeight,
) -> String {
    let mut out = String::from("graph regnet {\n");
    out.push_str("  node [shape=circle, style=filled, fillcolor=blue, fontcolor=white];\n");
    for (number, name) in view.graph().numbered_labels() {
        let _ = writeln!(
            out,
            "  {} [label=\"{number}\", tooltip={}];",
            quote(name.as_str()),
            quote(name.as_str())
        );
    }
    for (edge, penwidth) in view.visual_weights(transform) {
        let class = display_class(policy, active, edge);
        let _ = writeln!(
            out,
            "  {} -- {} [label=\"{}\", color={}, penwidth={penwidth:.2}];",
            quote(edge.low().as_str()),
            quote(edge.high().as_str()),
            edge.label(),
            modality_color(class),
        );
    }
    out.push_str("}\n");
    out
}

pub fn render_node_table(graph: &Graph) -> String {
    let width = graph.node_count().to_string().len().max(3);
    let mut out = format!("{:>width$}  Region\n", "No.");
    for (number, name) in graph.numbered_labels() {
        let _ = writeln!(out, "{number:>width$}  {name}");
    }
    out
}

pub fn render_route(route: &Route) -> String {
    let path: Vec<&str> = route.hops.iter().map(|h| h.as_str()).collect();
    let mut out = format!(
        "{} ({}, {} legs)\n",
        path.join(" -> "),
        route.total,
        route.hop_count()
    );
    for leg in &route.legs {
        let _ = writeln!(out, "  {leg}");
    }
    out
}

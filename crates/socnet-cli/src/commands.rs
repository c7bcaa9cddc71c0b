//! CLI command implementations.

use crate::ingest;
use crate::render;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use socnet_graph::{GraphBuilder, GraphConfig, GraphError, SocialGraph};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Resolves build settings: `--seed` beats the config file, which beats
/// the defaults.
pub fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<GraphConfig> {
    let mut config = match path {
        Some(path) => {
            debug!("Reading config from {}", path.display());
            GraphConfig::from_json(&fs::read_to_string(path)?)?
        }
        None => GraphConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Builds the graph from a CSV file.
pub fn load_graph(data: &Path, config: &GraphConfig) -> Result<SocialGraph> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner.set_message(format!("Loading {}...", data.display()));

    let mut builder = GraphBuilder::from_config(config)?;
    let report = ingest::load_into(data, &mut builder);
    spinner.finish_and_clear();
    let report = report?;

    let graph = builder.build();
    eprintln!(
        "{} Loaded {} nodes, {} edges{}",
        "✓".green(),
        graph.node_count().to_string().cyan(),
        graph.edge_count().to_string().cyan(),
        if report.skipped > 0 {
            format!(" ({} records skipped)", report.skipped)
                .yellow()
                .to_string()
        } else {
            String::new()
        }
    );
    Ok(graph)
}

/// Prints a query outcome either as JSON or through `show`.
///
/// Unknown names and disconnected endpoints are reported, not propagated:
/// they are ordinary answers to a query.
fn emit<T: Serialize>(
    outcome: socnet_graph::Result<T>,
    json: bool,
    show: impl FnOnce(&T),
) -> Result<()> {
    match outcome {
        Ok(value) if json => println!("{}", serde_json::to_string_pretty(&value)?),
        Ok(value) => show(&value),
        Err(e @ (GraphError::NotFound(_) | GraphError::NoPath { .. })) => {
            if json {
                println!("{}", serde_json::json!({ "error": e.to_string() }));
            } else {
                render::query_failure(&e.to_string());
            }
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

/// Shortest hop path between two people.
pub fn path(graph: &SocialGraph, from: &str, to: &str, json: bool) -> Result<()> {
    emit(graph.shortest_hop_path(from, to), json, render::path)
}

/// People within a geometric radius.
pub fn nearby(graph: &SocialGraph, person: &str, radius: f64, json: bool) -> Result<()> {
    emit(graph.nearby(person, radius), json, |people| {
        render::nearby(person, radius, people)
    })
}

/// People within a hop bound.
pub fn reach(graph: &SocialGraph, person: &str, hops: usize, json: bool) -> Result<()> {
    emit(graph.reachable_within_hops(person, hops), json, |people| {
        render::reach(person, hops, people)
    })
}

/// Core / active / edge segmentation.
pub fn analyze(graph: &SocialGraph, json: bool) -> Result<()> {
    emit(Ok(graph.degree_segmentation()), json, render::segmentation)
}

/// A person's adjacency list.
pub fn circle(graph: &SocialGraph, person: &str, json: bool) -> Result<()> {
    emit(graph.circle(person), json, |members| {
        render::circle(person, members)
    })
}

/// A single person's record.
pub fn info(graph: &SocialGraph, person: &str, json: bool) -> Result<()> {
    emit(graph.info(person), json, render::info)
}

/// Node and edge counts.
pub fn stats(graph: &SocialGraph, json: bool) -> Result<()> {
    emit(Ok(graph.stats()), json, render::stats)
}

/// Writes nodes and edges as JSON, to a file or stdout.
pub fn export(graph: &SocialGraph, output: Option<&Path>) -> Result<()> {
    let data = serde_json::to_string_pretty(&graph.export())?;
    match output {
        Some(path) => {
            fs::write(path, data)?;
            println!("{} Exported to {}", "✓".green(), path.display());
        }
        None => println!("{}", data),
    }
    Ok(())
}

//! socnet CLI - query a social graph loaded from CSV
//!
//! Loads `source,target,weight` edges, builds the graph once, then answers
//! a single query per invocation.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod ingest;
mod render;

#[derive(Parser)]
#[command(name = "socnet")]
#[command(author = "socnet Contributors")]
#[command(version)]
#[command(about = "Query paths, proximity and reach in a social graph", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// CSV file with a header line and `source,target,weight` rows
    #[arg(short = 'l', long = "load", global = true, default_value = "data/edges.csv")]
    data: PathBuf,

    /// JSON config file (coordinate range, seed)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for coordinate placement (overrides the config file)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the shortest hop path between two people
    Path { from: String, to: String },

    /// Find people within a distance of someone on the plane
    Nearby { person: String, radius: f64 },

    /// Find people reachable within a number of hops
    Reach { person: String, hops: usize },

    /// Split everyone into core / active / edge bands by degree
    Analyze,

    /// List someone's direct connections
    Circle { person: String },

    /// Show a person's index, location and degree
    Info { person: String },

    /// Show node and edge counts
    Stats,

    /// Export nodes and edges as JSON
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = commands::load_config(cli.config.as_deref(), cli.seed)?;
    let graph = commands::load_graph(&cli.data, &config)?;
    let json = cli.json;

    match cli.command {
        Commands::Path { from, to } => commands::path(&graph, &from, &to, json),
        Commands::Nearby { person, radius } => commands::nearby(&graph, &person, radius, json),
        Commands::Reach { person, hops } => commands::reach(&graph, &person, hops, json),
        Commands::Analyze => commands::analyze(&graph, json),
        Commands::Circle { person } => commands::circle(&graph, &person, json),
        Commands::Info { person } => commands::info(&graph, &person, json),
        Commands::Stats => commands::stats(&graph, json),
        Commands::Export { output } => commands::export(&graph, output.as_deref()),
    }
}

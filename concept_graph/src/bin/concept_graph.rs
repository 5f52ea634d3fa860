//! Concept Graph command line interface
//!
//! Loads both grade knowledge bases and hands graph data to a renderer, or
//! answers details-panel queries for a clicked node.
//!
//! # Usage
//!
//! ```bash
//! # Nodes, edges and display config as JSON for the renderer
//! concept-graph --grade 8 graph
//!
//! # Details panel for a clicked node
//! concept-graph details "concept::Force"
//!
//! # Replay a renderer click payload
//! echo '{"nodes": ["concept::Force"]}' | concept-graph click
//! ```

use clap::{Parser, Subcommand};
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use concept_graph::{ClickEvent, EdgeKind, Viewer};
use curriculum::{Grade, ViewerConfig};

#[derive(Parser)]
#[command(name = "concept-graph")]
#[command(version)]
#[command(about = "Build and query curriculum concept graphs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML config file (defaults apply when omitted)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Grade to show: 7 or 8 (overrides the config's default grade)
    #[arg(long, short, global = true, value_parser = parse_grade)]
    grade: Option<Grade>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print nodes, edges and display config as JSON
    Graph {
        /// Collapse repeated edges
        #[arg(long)]
        dedup_edges: bool,
    },

    /// Print the details panel for a node id
    Details {
        /// Raw node id, e.g. "concept::Force"
        node_id: String,
    },

    /// Apply a renderer click payload read from stdin and print the details panel
    Click,

    /// Print node and edge counts
    Summary,
}

fn parse_grade(raw: &str) -> Result<Grade, String> {
    let number: u8 = raw.parse().map_err(|_| format!("not a grade: {raw}"))?;
    Grade::try_from(number).map_err(|e| e.to_string())
}

/// Log filter from `RUST_LOG`, falling back to `warn` when unset, empty or invalid.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directives.as_deref()))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let mut viewer = Viewer::load(&config)?;
    if let Some(grade) = cli.grade {
        viewer.select_grade(grade);
    }

    match cli.command {
        Commands::Graph { dedup_edges } => {
            let mut graph = viewer.graph();
            if dedup_edges {
                graph.dedup_edges();
            }
            let request = graph.render_request(viewer.display());
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Commands::Details { node_id } => {
            viewer.click(&ClickEvent::node(node_id));
            print!("{}", viewer.details().render_text());
        }
        Commands::Click => {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload)?;
            let event = ClickEvent::from_json_str(&payload)?;
            viewer.click(&event);
            print!("{}", viewer.details().render_text());
        }
        Commands::Summary => {
            let graph = viewer.graph();
            println!("{} - grade {}", config.title, viewer.session().grade());
            println!("nodes: {}", graph.node_count());
            println!(
                "hierarchy edges: {}",
                graph.edges_of_kind(EdgeKind::Hierarchy).count()
            );
            println!(
                "interconnection edges: {}",
                graph.edges_of_kind(EdgeKind::Interconnection).count()
            );
        }
    }

    Ok(())
}

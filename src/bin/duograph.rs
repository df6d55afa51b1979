//! CLI entry point for the `duograph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use duograph::cli::commands;
use duograph::graph::TraversalMode;
use duograph::GraphError;

#[derive(Parser)]
#[command(
    name = "duograph",
    about = "Inspect, search and run MST/SSSP on JSON graph documents"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show shape, node count and edge count
    Info {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Print the graph in Graphviz DOT syntax
    Dot {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Check whether one node is reachable from another
    Search {
        /// Path to the graph document
        file: PathBuf,
        /// Start node label
        from: u64,
        /// Goal node label
        to: u64,
        /// Traversal mode: bfs or dfs
        #[arg(long, default_value = "bfs")]
        mode: String,
    },
    /// Minimum spanning tree (undirected, weighted graphs)
    Mst {
        /// Path to the graph document
        file: PathBuf,
    },
    /// Shortest-path tree from a source node (directed, weighted graphs)
    Sssp {
        /// Path to the graph document
        file: PathBuf,
        /// Source node label
        source: u64,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        // env_logger is only available in dev/test builds
        eprintln!("Verbose mode enabled");
    }

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Dot { file } => commands::cmd_dot(&file),
        Commands::Search {
            file,
            from,
            to,
            mode,
        } => {
            let mode = match TraversalMode::from_name(&mode) {
                Some(mode) => mode,
                None => {
                    eprintln!("Invalid traversal mode: {}", mode);
                    process::exit(3);
                }
            };
            commands::cmd_search(&file, from, to, mode, json)
        }
        Commands::Mst { file } => commands::cmd_mst(&file, json),
        Commands::Sssp { file, source } => commands::cmd_sssp(&file, source, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) | GraphError::Configuration(_) | GraphError::InvalidWeight(_) => 2,
            GraphError::NodeNotInGraph(_) | GraphError::UnknownNode(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

//! CLI entry point for the `bfs-lab` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use bfs_lab::cli::commands::{self, GraphSource};
use bfs_lab::types::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_RESULTS, MANGO_SELLER_SUFFIX};
use bfs_lab::BfsError;

#[derive(Parser)]
#[command(
    name = "bfs-lab",
    about = "Breadth-first search over adjacency-list graphs. Run without arguments for the tutorial."
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Graph source flags shared by every query command.
#[derive(clap::Args)]
struct SourceArgs {
    /// Path to a JSON adjacency-list file
    #[arg(long, conflicts_with = "demo")]
    graph: Option<PathBuf>,
    /// Built-in demo graph: social, no-sellers, peggy, disconnected
    #[arg(long)]
    demo: Option<String>,
}

impl SourceArgs {
    fn into_source(self) -> GraphSource {
        GraphSource::from_args(self.graph, self.demo)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Print the BFS tutorial (the default)
    Tutorial,
    /// List the built-in demo graphs
    Demos,
    /// Print a graph's adjacency list
    Show {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Find the closest node whose name ends with a given letter
    Search {
        /// Node whose neighbors seed the search
        start: String,
        /// Last letter of a match
        #[arg(long, default_value_t = MANGO_SELLER_SUFFIX.to_string())]
        suffix: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Find the shortest path between two nodes
    Path {
        /// Start node
        start: String,
        /// End node
        end: String,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List nodes in level order from a starting node
    Traverse {
        /// Starting node
        start: String,
        /// Maximum traversal depth
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        max_depth: u32,
        /// Maximum nodes to return
        #[arg(long, default_value_t = DEFAULT_MAX_RESULTS)]
        max_results: usize,
        #[command(flatten)]
        source: SourceArgs,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command.unwrap_or(Commands::Tutorial) {
        Commands::Tutorial => commands::cmd_tutorial(),
        Commands::Demos => commands::cmd_demos(json),
        Commands::Show { source } => commands::cmd_show(&source.into_source(), json),
        Commands::Search {
            start,
            suffix,
            source,
        } => commands::parse_suffix(&suffix)
            .and_then(|c| commands::cmd_search(&source.into_source(), &start, c, json)),
        Commands::Path { start, end, source } => {
            commands::cmd_path(&source.into_source(), &start, &end, json)
        }
        Commands::Traverse {
            start,
            max_depth,
            max_results,
            source,
        } => commands::cmd_traverse(&source.into_source(), &start, max_depth, max_results, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            BfsError::Io(_) => 1,
            BfsError::Json(_) | BfsError::InvalidNode(_) => 2,
            BfsError::UnknownDemo(_) | BfsError::InvalidArgument(_) => 3,
        };
        process::exit(code);
    }
}

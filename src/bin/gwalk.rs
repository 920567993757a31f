//! CLI entry point for the `gwalk` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_walk::cli::commands;
use graph_walk::engine::ExitPolicy;
use graph_walk::graph::{SearchStrategy, TraversalOrder};
use graph_walk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graph-walk CLI: graph traversal, ancestry queries and maze exploration"
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
    /// Display vertex and edge counts of a graph document
    Info {
        /// Path to the graph JSON document
        file: PathBuf,
    },
    /// List the outgoing neighbors of a vertex
    Neighbors {
        /// Path to the graph JSON document
        file: PathBuf,
        /// Vertex ID
        vertex: i64,
    },
    /// Visit every vertex reachable from a start vertex
    Traverse {
        /// Path to the graph JSON document
        file: PathBuf,
        /// Starting vertex ID
        start: i64,
        /// Order: bft, dft, or dft-recursive
        #[arg(long, default_value = "bft")]
        order: String,
    },
    /// Find a path between two vertices
    Search {
        /// Path to the graph JSON document
        file: PathBuf,
        /// Starting vertex ID
        start: i64,
        /// Destination vertex ID
        destination: i64,
        /// Strategy: bfs, dfs, or dfs-recursive
        #[arg(long, default_value = "bfs")]
        strategy: String,
    },
    /// Find the earliest ancestor of a vertex (-1 if it has none)
    Ancestor {
        /// Path to the JSON list of [parent, child] pairs
        file: PathBuf,
        /// Starting vertex ID
        start: i64,
        /// Strategy used to measure lineage: bfs, dfs, or dfs-recursive
        #[arg(long, default_value = "bfs")]
        strategy: String,
    },
    /// Explore a maze until every room is visited, then validate by replay
    Explore {
        /// Path to the maze JSON document
        file: PathBuf,
        /// Exit selection: first or random
        #[arg(long, default_value = "first")]
        policy: String,
        /// Seed for the random policy
        #[arg(long, default_value = "0")]
        seed: u64,
        /// Write the recorded moves to this JSON file
        #[arg(long)]
        moves_out: Option<PathBuf>,
    },
    /// Replay a move log against a maze
    Replay {
        /// Path to the maze JSON document
        file: PathBuf,
        /// JSON move log written by `explore --moves-out`
        #[arg(long, conflicts_with = "moves")]
        moves_file: Option<PathBuf>,
        /// Inline moves, e.g. "n,n,s,e"
        #[arg(long)]
        moves: Option<String>,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn parse_strategy(name: &str) -> SearchStrategy {
    match SearchStrategy::from_name(name) {
        Some(strategy) => strategy,
        None => {
            eprintln!("Invalid search strategy: {}", name);
            process::exit(3);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, json),
        Commands::Neighbors { file, vertex } => commands::cmd_neighbors(&file, vertex, json),
        Commands::Traverse { file, start, order } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            commands::cmd_traverse(&file, start, order, json)
        }
        Commands::Search {
            file,
            start,
            destination,
            strategy,
        } => commands::cmd_search(&file, start, destination, parse_strategy(&strategy), json),
        Commands::Ancestor {
            file,
            start,
            strategy,
        } => commands::cmd_ancestor(&file, start, parse_strategy(&strategy), json),
        Commands::Explore {
            file,
            policy,
            seed,
            moves_out,
        } => {
            let policy = match policy.as_str() {
                "first" => ExitPolicy::First,
                "random" => ExitPolicy::Random { seed },
                other => {
                    eprintln!("Invalid exit policy: {}", other);
                    process::exit(3);
                }
            };
            commands::cmd_explore(&file, policy, moves_out.as_deref(), json)
        }
        Commands::Replay {
            file,
            moves_file,
            moves,
        } => {
            let moves = match (moves_file, moves) {
                (Some(path), _) => commands::load_moves(&path),
                (None, Some(text)) => commands::parse_moves(&text),
                (None, None) => Ok(Vec::new()),
            };
            moves.and_then(|moves| commands::cmd_replay(&file, &moves, json))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::InvalidDirection(_)
            | GraphError::SelfParent(_)
            | GraphError::InconsistentExit { .. }
            | GraphError::UnknownStartRoom(_) => 2,
            GraphError::VertexNotFound(_) => 4,
            _ => 5,
        };
        process::exit(code);
    }
}

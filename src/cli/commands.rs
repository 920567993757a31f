//! CLI command implementations.

use std::path::Path;

use crate::engine::{replay, AncestryQuery, ExitPolicy, MazeExplorer, ReplayReport};
use crate::format::{
    AncestryDocument, DocumentReader, DocumentWriter, GraphDocument, MazeDocument, MovesDocument,
};
use crate::graph::{Graph, SearchStrategy, TraversalOrder};
use crate::types::{path_len, Direction, GraphResult};

fn load_graph(path: &Path) -> GraphResult<Graph<i64>> {
    DocumentReader::read_from_file::<GraphDocument>(path)?.into_graph()
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

fn join<T: std::fmt::Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Display vertex and edge counts of a graph document.
pub fn cmd_info(path: &Path, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let self_loops = graph.edges().filter(|(from, to)| from == to).count();

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
            "self_loops": self_loops,
        }));
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
        println!("Self-loops: {}", self_loops);
    }
    Ok(())
}

/// List the outgoing neighbors of a vertex.
pub fn cmd_neighbors(path: &Path, vertex: i64, json: bool) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let neighbors: Vec<i64> = graph.get_neighbors(&vertex)?.iter().copied().collect();

    if json {
        print_json(&serde_json::json!({"vertex": vertex, "neighbors": neighbors}));
    } else {
        println!("{} -> {{{}}}", vertex, join(&neighbors, ", "));
    }
    Ok(())
}

/// Traverse every vertex reachable from `start`.
pub fn cmd_traverse(
    path: &Path,
    start: i64,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let traversal = graph.traverse(order, &start)?;

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "order": order.name(),
            "visited": traversal.order,
        }));
    } else {
        for vertex in &traversal.order {
            println!("{}", vertex);
        }
    }
    Ok(())
}

/// Find a path between two vertices.
pub fn cmd_search(
    path: &Path,
    start: i64,
    destination: i64,
    strategy: SearchStrategy,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(path)?;
    let found = graph.search(strategy, &start, &destination)?;

    if json {
        print_json(&serde_json::json!({
            "start": start,
            "destination": destination,
            "strategy": strategy.name(),
            "path": found,
            "edges": found.as_deref().map(path_len),
        }));
    } else {
        match found {
            Some(p) => println!("[{}]", join(&p, ", ")),
            None => println!("No path from {} to {}", start, destination),
        }
    }
    Ok(())
}

/// Report the earliest ancestor of `start`, printing -1 when it has none.
pub fn cmd_ancestor(
    path: &Path,
    start: i64,
    strategy: SearchStrategy,
    json: bool,
) -> GraphResult<()> {
    let AncestryDocument(pairs) = DocumentReader::read_from_file::<AncestryDocument>(path)?;
    let report = AncestryQuery::with_strategy(strategy).run(&pairs, &start)?;

    if json {
        let value = match &report {
            Some(r) => serde_json::json!({
                "start": start,
                "ancestor": r.ancestor,
                "depth": r.depth,
                "lineage": r.lineage,
            }),
            None => serde_json::json!({"start": start, "ancestor": -1}),
        };
        print_json(&value);
    } else {
        match report {
            Some(r) => {
                println!("{}", r.ancestor);
                println!("  Depth: {}", r.depth);
                println!("  Lineage: {}", join(&r.lineage, " -> "));
            }
            None => println!("-1"),
        }
    }
    Ok(())
}

fn print_replay(report: &ReplayReport, json: bool) {
    if json {
        print_json(&serde_json::json!({
            "complete": report.is_complete(),
            "moves": report.moves,
            "rooms_visited": report.visited.len(),
            "total_rooms": report.total_rooms,
            "unvisited": report.unvisited,
        }));
    } else if report.is_complete() {
        println!(
            "Traversal complete: {} moves, {} rooms visited",
            report.moves,
            report.visited.len()
        );
    } else {
        println!("Traversal incomplete");
        println!("  {} unvisited rooms", report.unvisited.len());
    }
}

/// Explore a maze, validate the move log by replay, and optionally save it.
pub fn cmd_explore(
    path: &Path,
    policy: ExitPolicy,
    moves_out: Option<&Path>,
    json: bool,
) -> GraphResult<()> {
    let world = DocumentReader::read_from_file::<MazeDocument>(path)?.into_world()?;
    let exploration = MazeExplorer::new(policy).explore(&world)?;
    let report = exploration.validate(&world)?;

    if let Some(out) = moves_out {
        let log = MovesDocument(exploration.moves.clone());
        DocumentWriter::new(false).write_to_file(&log, out)?;
    }

    if !json {
        println!("Moves: {}", join(&exploration.moves, ""));
    }
    print_replay(&report, json);
    Ok(())
}

/// Replay a move log against a maze.
pub fn cmd_replay(path: &Path, moves: &[Direction], json: bool) -> GraphResult<()> {
    let world = DocumentReader::read_from_file::<MazeDocument>(path)?.into_world()?;
    let report = replay(&world, moves)?;
    print_replay(&report, json);
    Ok(())
}

/// Load a move log written by `cmd_explore`.
pub fn load_moves(path: &Path) -> GraphResult<Vec<Direction>> {
    let MovesDocument(moves) = DocumentReader::read_from_file::<MovesDocument>(path)?;
    Ok(moves)
}

/// Parse a comma- or space-separated move list such as `n,n,s,e`.
pub fn parse_moves(text: &str) -> GraphResult<Vec<Direction>> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Direction>)
        .collect()
}

//! graph-walk: directed graph traversal and search.
//!
//! A small adjacency-set graph with breadth-first and depth-first traversal
//! and path search, plus two clients built on it: an earliest-ancestor query
//! over parent -> child pairs, and a depth-first maze explorer whose move log
//! is validated by replay.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    earliest_ancestor, replay, AncestryQuery, AncestryReport, ExitPolicy, Exploration,
    MazeExplorer, Player, ReplayReport, World,
};
pub use format::{
    AncestryDocument, DocumentReader, DocumentWriter, GraphDocument, MazeDocument, MovesDocument,
};
pub use graph::{Graph, GraphBuilder, SearchStrategy, Traversal, TraversalOrder};
pub use types::{path_len, Direction, GraphError, GraphResult, RoomId, Vertex};

//! In-memory graph operations: the core data structure and its algorithms.

pub mod builder;
pub mod directed_graph;
pub mod search;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::Graph;
pub use search::SearchStrategy;
pub use traversal::{Traversal, TraversalOrder};

//! Shared data types for the graph-walk library.

pub mod direction;
pub mod error;

pub use direction::Direction;
pub use error::{GraphError, GraphResult};

/// Identifier of a room in a maze world.
pub type RoomId = u32;

/// Anything usable as a vertex id: ordered (neighbor sets iterate in ascending
/// order), cheaply cloned into the graph, and printable in errors and logs.
pub trait Vertex: Ord + Clone + std::fmt::Debug {}

impl<T: Ord + Clone + std::fmt::Debug> Vertex for T {}

/// Number of edges in a vertex path (`[start]` has zero).
pub fn path_len<V>(path: &[V]) -> usize {
    path.len().saturating_sub(1)
}

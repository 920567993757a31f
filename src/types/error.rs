//! Error types for the graph-walk library.

use thiserror::Error;

use super::{Direction, RoomId};

/// All errors that can occur in the graph-walk library.
///
/// A search that finds no path is not an error; search operations return
/// `Ok(None)` for that case.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not registered in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// An ancestry pair names the same vertex as parent and child.
    #[error("Vertex {0} is listed as its own parent")]
    SelfParent(String),

    /// Exit label is not one of n, s, e, w.
    #[error("Invalid direction: {0:?}")]
    InvalidDirection(String),

    /// The room has no exit in the requested direction.
    #[error("Room {room} has no exit to the {direction}")]
    BlockedExit { room: RoomId, direction: Direction },

    /// An exit whose target does not lead back through the inverse direction.
    #[error("Exit {direction} from room {room} reaches room {target}, which has no way back")]
    InconsistentExit {
        room: RoomId,
        direction: Direction,
        target: RoomId,
    },

    /// The starting room is not part of the world.
    #[error("Starting room {0} is not part of the world")]
    UnknownStartRoom(RoomId),

    /// Some rooms can never be reached from the starting room.
    #[error("{unvisited} room(s) cannot be reached from the starting room")]
    Unreachable { unvisited: usize },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON input document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a `VertexNotFound` from any debuggable vertex id.
    pub fn vertex_not_found<V: std::fmt::Debug>(id: &V) -> Self {
        Self::VertexNotFound(format!("{:?}", id))
    }
}

/// Convenience result type for graph-walk operations.
pub type GraphResult<T> = Result<T, GraphError>;

//! JSON input documents for graphs, family trees and mazes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::{Exits, World};
use crate::graph::{Graph, GraphBuilder};
use crate::types::{Direction, GraphResult, RoomId};

/// A directed graph with integer vertex ids.
///
/// ```json
/// {"vertices": [1, 2, 3], "edges": [[1, 2], [2, 3]]}
/// ```
///
/// When `vertices` is omitted or empty, every edge endpoint is registered
/// automatically. Otherwise each edge must join declared vertices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Declared vertices.
    #[serde(default)]
    pub vertices: Vec<i64>,
    /// Directed edges as `[from, to]`.
    #[serde(default)]
    pub edges: Vec<(i64, i64)>,
}

impl GraphDocument {
    /// Build the graph this document describes.
    pub fn into_graph(self) -> GraphResult<Graph<i64>> {
        if self.vertices.is_empty() {
            return Ok(Graph::from_edges(self.edges));
        }
        GraphBuilder::new()
            .vertices(self.vertices)
            .edges(self.edges)
            .build()
    }

    /// Describe an existing graph.
    pub fn from_graph(graph: &Graph<i64>) -> Self {
        Self {
            vertices: graph.vertices().copied().collect(),
            edges: graph.edges().map(|(&from, &to)| (from, to)).collect(),
        }
    }
}

/// Parent -> child pairs, e.g. `[[1, 3], [2, 3], [3, 5]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AncestryDocument(pub Vec<(i64, i64)>);

/// A maze: a starting room and the exits of every room.
///
/// ```json
/// {"start": 0, "rooms": {"0": {"n": 1}, "1": {"s": 0}}}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeDocument {
    /// Room the explorer starts in.
    #[serde(default)]
    pub start: RoomId,
    /// Room id -> direction -> neighboring room id.
    pub rooms: BTreeMap<RoomId, Exits>,
}

impl MazeDocument {
    /// Validate and build the world.
    pub fn into_world(self) -> GraphResult<World> {
        World::from_rooms(self.start, self.rooms)
    }
}

/// A recorded move sequence, e.g. `["n", "n", "s", "s", "e"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovesDocument(pub Vec<Direction>);

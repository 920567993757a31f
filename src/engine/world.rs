//! Maze worlds: rooms joined by compass-labelled exits, and a player moving
//! between them.

use std::collections::BTreeMap;

use log::debug;

use crate::graph::Graph;
use crate::types::{Direction, GraphError, GraphResult, RoomId};

/// Exits of a single room.
pub type Exits = BTreeMap<Direction, RoomId>;

/// A validated maze.
///
/// Every exit leads to an existing room, and every exit can be undone by
/// taking the inverse direction from the room it reaches.
#[derive(Debug, Clone)]
pub struct World {
    start: RoomId,
    rooms: BTreeMap<RoomId, Exits>,
    /// Room connectivity without direction labels.
    graph: Graph<RoomId>,
}

impl World {
    /// Build a world from each room's exits.
    pub fn from_rooms(start: RoomId, rooms: BTreeMap<RoomId, Exits>) -> GraphResult<Self> {
        if !rooms.contains_key(&start) {
            return Err(GraphError::UnknownStartRoom(start));
        }

        let mut graph = Graph::new();
        for &room in rooms.keys() {
            graph.add_vertex(room);
        }
        for (&room, exits) in &rooms {
            for (&direction, &target) in exits {
                graph.add_edge(room, target)?;
                let back = rooms
                    .get(&target)
                    .and_then(|exits| exits.get(&direction.inverse()));
                if back != Some(&room) {
                    return Err(GraphError::InconsistentExit {
                        room,
                        direction,
                        target,
                    });
                }
            }
        }

        debug!(
            "loaded world: {} rooms, {} exits, start {}",
            graph.vertex_count(),
            graph.edge_count(),
            start
        );
        Ok(Self { start, rooms, graph })
    }

    /// The room every exploration and replay begins in.
    pub fn starting_room(&self) -> RoomId {
        self.start
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// All room ids in ascending order.
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> + '_ {
        self.rooms.keys().copied()
    }

    /// Whether `room` is part of the world.
    pub fn contains_room(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    /// The exits of a room.
    pub fn exits(&self, room: RoomId) -> GraphResult<&Exits> {
        self.rooms
            .get(&room)
            .ok_or_else(|| GraphError::vertex_not_found(&room))
    }

    /// The room reached by leaving `room` in `direction`, if there is an exit.
    pub fn room_in_direction(&self, room: RoomId, direction: Direction) -> Option<RoomId> {
        self.rooms
            .get(&room)
            .and_then(|exits| exits.get(&direction))
            .copied()
    }

    /// The underlying room graph.
    pub fn graph(&self) -> &Graph<RoomId> {
        &self.graph
    }

    /// Rooms that cannot be reached from the starting room.
    pub fn unreachable_rooms(&self) -> GraphResult<Vec<RoomId>> {
        let reached = self.graph.bft(&self.start)?;
        Ok(self.rooms().filter(|room| !reached.contains(room)).collect())
    }
}

/// A position in a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    current_room: RoomId,
}

impl Player {
    /// Place a player in a room.
    pub fn new(room: RoomId) -> Self {
        Self { current_room: room }
    }

    /// The room the player is in.
    pub fn current_room(&self) -> RoomId {
        self.current_room
    }

    /// Move through an exit, returning the new room.
    pub fn travel(&mut self, world: &World, direction: Direction) -> GraphResult<RoomId> {
        let next = world
            .room_in_direction(self.current_room, direction)
            .ok_or(GraphError::BlockedExit {
                room: self.current_room,
                direction,
            })?;
        self.current_room = next;
        Ok(next)
    }
}

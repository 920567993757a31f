//! Online depth-first maze exploration and replay validation.

use std::collections::BTreeSet;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::{Direction, GraphError, GraphResult, RoomId};

use super::world::{Player, World};

/// How the explorer picks among several exits leading to unvisited rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// The first open exit in n, s, e, w order.
    #[default]
    First,
    /// A uniformly random open exit, reproducible from the seed.
    Random { seed: u64 },
}

/// The recorded result of an exploration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    /// Every move taken from the starting room, backtracking included.
    pub moves: Vec<Direction>,
    /// Number of distinct rooms entered (the starting room included).
    pub rooms_visited: usize,
}

impl Exploration {
    /// Replay the recorded moves against the world they were taken in.
    pub fn validate(&self, world: &World) -> GraphResult<ReplayReport> {
        replay(world, &self.moves)
    }
}

/// A single exploration run. The session owns the move log, the visited set
/// and the backtrack stack; build a new one for every run.
pub struct MazeExplorer {
    rng: Option<StdRng>,
    traversal_path: Vec<Direction>,
    visited: BTreeSet<RoomId>,
    /// Forward moves not yet undone.
    backtrack: Vec<Direction>,
}

impl MazeExplorer {
    /// Create an explorer with the given exit policy.
    pub fn new(policy: ExitPolicy) -> Self {
        let rng = match policy {
            ExitPolicy::First => None,
            ExitPolicy::Random { seed } => Some(StdRng::seed_from_u64(seed)),
        };
        Self {
            rng,
            traversal_path: Vec::new(),
            visited: BTreeSet::new(),
            backtrack: Vec::new(),
        }
    }

    /// Walk the world until every room has been entered.
    ///
    /// At each room the explorer takes an exit to an unvisited room when one
    /// exists; otherwise it retraces its latest forward move through the
    /// inverse direction. Exploration stops in the room that completes the
    /// set, without walking back.
    pub fn explore(mut self, world: &World) -> GraphResult<Exploration> {
        let unreachable = world.unreachable_rooms()?;
        if !unreachable.is_empty() {
            return Err(GraphError::Unreachable {
                unvisited: unreachable.len(),
            });
        }

        let total = world.room_count();
        let mut player = Player::new(world.starting_room());
        self.visited.insert(player.current_room());

        while self.visited.len() < total {
            let room = player.current_room();
            let open: Vec<Direction> = world
                .exits(room)?
                .iter()
                .filter(|(_, target)| !self.visited.contains(*target))
                .map(|(&direction, _)| direction)
                .collect();

            let step = match self.choose(&open) {
                Some(direction) => {
                    self.backtrack.push(direction);
                    direction
                }
                None => match self.backtrack.pop() {
                    Some(last) => last.inverse(),
                    None => {
                        return Err(GraphError::Unreachable {
                            unvisited: total - self.visited.len(),
                        })
                    }
                },
            };

            let next = player.travel(world, step)?;
            trace!("{} -> {} via {}", room, next, step);
            self.traversal_path.push(step);
            self.visited.insert(next);
        }

        debug!(
            "explored {} rooms in {} moves",
            self.visited.len(),
            self.traversal_path.len()
        );
        Ok(Exploration {
            moves: self.traversal_path,
            rooms_visited: self.visited.len(),
        })
    }

    fn choose(&mut self, open: &[Direction]) -> Option<Direction> {
        match self.rng.as_mut() {
            Some(rng) => open.choose(rng).copied(),
            None => open.first().copied(),
        }
    }
}

/// Outcome of replaying a move sequence from the starting room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Number of moves replayed.
    pub moves: usize,
    /// Distinct rooms entered, the starting room included.
    pub visited: BTreeSet<RoomId>,
    /// Number of rooms in the world.
    pub total_rooms: usize,
    /// Rooms never entered, ascending.
    pub unvisited: Vec<RoomId>,
}

impl ReplayReport {
    /// Whether the replay entered every room.
    pub fn is_complete(&self) -> bool {
        self.visited.len() == self.total_rooms
    }
}

/// Apply `moves` from the starting room and record every room entered.
/// A move through a missing exit is an error.
pub fn replay(world: &World, moves: &[Direction]) -> GraphResult<ReplayReport> {
    let mut player = Player::new(world.starting_room());
    let mut visited = BTreeSet::new();
    visited.insert(player.current_room());

    for &direction in moves {
        visited.insert(player.travel(world, direction)?);
    }

    let unvisited = world.rooms().filter(|room| !visited.contains(room)).collect();
    Ok(ReplayReport {
        moves: moves.len(),
        visited,
        total_rooms: world.room_count(),
        unvisited,
    })
}

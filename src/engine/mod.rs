//! Clients of the graph core: ancestry queries and maze exploration.

pub mod ancestry;
pub mod explorer;
pub mod world;

pub use ancestry::{earliest_ancestor, family_graph, AncestryQuery, AncestryReport};
pub use explorer::{replay, ExitPolicy, Exploration, MazeExplorer, ReplayReport};
pub use world::{Exits, Player, World};

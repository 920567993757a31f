//! Compass directions used as exit labels between maze rooms.

use serde::{Deserialize, Serialize};

use super::{GraphError, GraphResult};

/// An exit label. Every direction has an algebraic inverse (`n↔s`, `e↔w`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// North.
    #[serde(rename = "n")]
    North,
    /// South.
    #[serde(rename = "s")]
    South,
    /// East.
    #[serde(rename = "e")]
    East,
    /// West.
    #[serde(rename = "w")]
    West,
}

impl Direction {
    /// All directions, in the order exits are considered during exploration.
    pub const ALL: [Direction; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// The direction that undoes this one.
    pub fn inverse(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    /// Single-letter label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
        }
    }

    /// Parse a direction from a label such as `n` or `north`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Direction {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        Self::from_name(s).ok_or_else(|| GraphError::InvalidDirection(s.to_string()))
    }
}

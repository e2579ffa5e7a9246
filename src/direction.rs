use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Facing direction of the toy
///
/// Ordinals run clockwise:
///
/// ```text
///        N=0
///   W=3       E=1
///        S=2
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

/// Fixed clockwise ordering, indexed by ordinal
const CLOCKWISE: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

impl Direction {
    pub const ALL: [Direction; 4] = CLOCKWISE;

    pub fn ordinal(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    pub fn from_ordinal(ordinal: usize) -> Self {
        CLOCKWISE[ordinal % 4]
    }

    /// Counter-clockwise quarter turn
    pub fn left(self) -> Self {
        Self::from_ordinal(self.ordinal() + 3)
    }

    /// Clockwise quarter turn
    pub fn right(self) -> Self {
        Self::from_ordinal(self.ordinal() + 1)
    }

    /// Movement delta (dx, dy) for one step; north increases y
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    /// Inverse of `delta`. Returns None for anything other than a unit step.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, 1) => Some(Direction::North),
            (1, 0) => Some(Direction::East),
            (0, -1) => Some(Direction::South),
            (-1, 0) => Some(Direction::West),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "NORTH",
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognised direction token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown direction: {0:?}")]
pub struct UnknownDirection(pub String);

impl FromStr for Direction {
    type Err = UnknownDirection;

    /// Only the exact upper-case names are accepted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CLOCKWISE
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| UnknownDirection(s.to_string()))
    }
}

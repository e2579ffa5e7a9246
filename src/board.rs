use crate::direction::Direction;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A cell on the board, ordered by x then y
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell one step towards `direction`
    pub fn step(self, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }

    /// Direction of the unit step from `self` to `other`, if they are adjacent
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        Direction::from_delta(other.x - self.x, other.y - self.y)
    }

    /// Manhattan distance
    pub fn distance(self, other: Cell) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

/// Canonical `x,y` form, used as the node key wherever a cell is shown
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Rectangular board with impassable cells
///
/// Dimensions are fixed at construction. Blocked cells always lie inside the
/// bounds; every change to the blocked set bumps `revision`.
#[derive(Debug, Clone)]
pub struct Board {
    width: i32,
    height: i32,
    blocked: BTreeSet<Cell>,
    /// Incremented whenever the blocked set changes
    revision: u64,
    /// Graph built at the stored revision
    cached: Option<(u64, Graph<Cell>)>,
}

impl Board {
    /// Create a board with every cell open
    ///
    /// Both dimensions must be positive.
    pub fn new(width: i32, height: i32) -> Self {
        debug_assert!(
            width > 0 && height > 0,
            "board dimensions must be positive, got {}x{}",
            width,
            height
        );
        Board {
            width,
            height,
            blocked: BTreeSet::new(),
            revision: 0,
            cached: None,
        }
    }

    /// Create a board with specific blocked cells
    pub fn with_blocked(width: i32, height: i32, blocked: &[(i32, i32)]) -> Self {
        let mut board = Self::new(width, height);
        for &(x, y) in blocked {
            board.block(x, y);
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Mark a cell impassable. Out-of-bounds cells are ignored.
    ///
    /// Returns true if the blocked set changed.
    pub fn block(&mut self, x: i32, y: i32) -> bool {
        if !self.in_bounds(x, y) {
            debug!(x, y, "ignoring block outside the board");
            return false;
        }
        let changed = self.blocked.insert(Cell::new(x, y));
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Return a blocked cell to open. Returns true if the blocked set changed.
    pub fn unblock(&mut self, x: i32, y: i32) -> bool {
        let changed = self.blocked.remove(&Cell::new(x, y));
        if changed {
            self.revision += 1;
        }
        changed
    }

    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.blocked.contains(&Cell::new(x, y))
    }

    /// In bounds and not blocked
    pub fn is_open(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && !self.is_blocked(x, y)
    }

    pub fn blocked_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.blocked.iter().copied()
    }

    /// Build the movement graph for the current blocked set
    ///
    /// Each open cell links to its open right and next-row neighbours; the
    /// graph's symmetric insertion supplies the other two directions.
    pub fn build_graph(&self) -> Graph<Cell> {
        let mut graph = Graph::new();

        for y in 0..self.height {
            for x in 0..self.width {
                if !self.is_open(x, y) {
                    continue;
                }
                let cell = Cell::new(x, y);
                if self.is_open(x + 1, y) {
                    graph.add_edge(cell, Cell::new(x + 1, y));
                }
                if self.is_open(x, y + 1) {
                    graph.add_edge(cell, Cell::new(x, y + 1));
                }
            }
        }

        graph
    }

    /// Movement graph for the current revision, rebuilt only when stale
    pub fn graph(&mut self) -> &Graph<Cell> {
        let graph = match self.cached.take() {
            Some((rev, graph)) if rev == self.revision => graph,
            _ => {
                debug!(revision = self.revision, "rebuilding board graph");
                self.build_graph()
            }
        };
        &self.cached.insert((self.revision, graph)).1
    }
}

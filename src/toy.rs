use crate::board::{Board, Cell};
use crate::diagnostic::{Diagnostic, PlacementError};
use crate::direction::Direction;
use tracing::warn;

/// Whether the toy is on the board, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Unplaced,
    Placed { cell: Cell, direction: Direction },
}

/// Toy confined to one board
///
/// Rejected operations never change state. Each rejection is logged as a
/// warning and handed back as a `Diagnostic`.
#[derive(Debug, Clone)]
pub struct Toy {
    board: Board,
    state: Placement,
}

fn emit(diagnostic: &Diagnostic) {
    warn!(operation = diagnostic.operation(), "{}", diagnostic);
}

/// Log a rejected operation and hand the diagnostic back
fn reject<T>(diagnostic: Diagnostic) -> Result<T, Diagnostic> {
    emit(&diagnostic);
    Err(diagnostic)
}

impl Toy {
    /// Create an unplaced toy on the given board
    pub fn new(board: Board) -> Self {
        Toy {
            board,
            state: Placement::Unplaced,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board access for adding or removing obstacles between operations
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn state(&self) -> Placement {
        self.state
    }

    pub fn is_placed(&self) -> bool {
        matches!(self.state, Placement::Placed { .. })
    }

    pub fn position(&self) -> Option<Cell> {
        match self.state {
            Placement::Placed { cell, .. } => Some(cell),
            Placement::Unplaced => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self.state {
            Placement::Placed { direction, .. } => Some(direction),
            Placement::Unplaced => None,
        }
    }

    /// Place the toy at (x, y) facing `direction`
    pub fn place(&mut self, x: i32, y: i32, direction: Direction) -> Result<(), Diagnostic> {
        if x < 0 || x >= self.board.width() {
            return reject(
                PlacementError::InvalidX {
                    x,
                    width: self.board.width(),
                }
                .into(),
            );
        }
        if y < 0 || y >= self.board.height() {
            return reject(
                PlacementError::InvalidY {
                    y,
                    height: self.board.height(),
                }
                .into(),
            );
        }
        if self.board.is_blocked(x, y) {
            return reject(PlacementError::Blocked(Cell::new(x, y)).into());
        }

        self.state = Placement::Placed {
            cell: Cell::new(x, y),
            direction,
        };
        Ok(())
    }

    /// Step one cell in the facing direction
    pub fn move_forward(&mut self) -> Result<(), Diagnostic> {
        let Placement::Placed { cell, direction } = self.state else {
            return reject(Diagnostic::MoveBeforePlacement);
        };

        let next = cell.step(direction);
        if !self.board.is_open(next.x, next.y) {
            return reject(Diagnostic::MoveBlocked {
                from: cell,
                direction,
            });
        }

        self.state = Placement::Placed {
            cell: next,
            direction,
        };
        Ok(())
    }

    pub fn turn_left(&mut self) -> Result<(), Diagnostic> {
        self.turn(Direction::left)
    }

    pub fn turn_right(&mut self) -> Result<(), Diagnostic> {
        self.turn(Direction::right)
    }

    fn turn(&mut self, rotate: fn(Direction) -> Direction) -> Result<(), Diagnostic> {
        match &mut self.state {
            Placement::Placed { direction, .. } => {
                *direction = rotate(*direction);
                Ok(())
            }
            Placement::Unplaced => reject(Diagnostic::TurnBeforePlacement),
        }
    }

    /// `x,y,DIRECTION`, or None before placement
    pub fn report(&self) -> Option<String> {
        match self.state {
            Placement::Placed { cell, direction } => Some(format!("{},{}", cell, direction)),
            Placement::Unplaced => {
                emit(&Diagnostic::ReportBeforePlacement);
                None
            }
        }
    }

    /// Shortest obstacle-free route from the current cell to (x, y)
    ///
    /// The route includes both ends. It is empty when the toy already stands
    /// on the target, and also when no route exists (a `NoPathFound` warning
    /// is logged in that case). Compare against `position()` to tell the two
    /// apart, or use `route` to get the diagnostic.
    ///
    /// Routes run over the board graph, which leaves out blocked cells. If the
    /// toy's own cell was blocked after placement, no route starts there,
    /// even though `move_forward` can still step off it.
    pub fn find_path(&mut self, x: i32, y: i32) -> Vec<Cell> {
        self.route(x, y).unwrap_or_default()
    }

    /// Like `find_path`, but a missing route comes back as the diagnostic
    ///
    /// `Ok` with an empty route means the toy is already on the target.
    pub fn route(&mut self, x: i32, y: i32) -> Result<Vec<Cell>, Diagnostic> {
        let Some(from) = self.position() else {
            return reject(Diagnostic::PathBeforePlacement);
        };
        let to = Cell::new(x, y);
        if from == to {
            return Ok(Vec::new());
        }

        let edges = self.board.graph().shortest_path(&from, &to);
        if edges.is_empty() {
            return reject(Diagnostic::NoPathFound { from, to });
        }

        let mut path = Vec::with_capacity(edges.len() + 1);
        path.push(from);
        path.extend(edges.into_iter().map(|(_, v)| v));
        Ok(path)
    }

    /// Direction of each step along a route
    ///
    /// Consecutive cells that are not adjacent (which `find_path` never
    /// produces) are skipped.
    pub fn steps(path: &[Cell]) -> Vec<Direction> {
        path.windows(2)
            .filter_map(|pair| pair[0].direction_to(pair[1]))
            .collect()
    }

    /// Walk the shortest route to (x, y) using turns and single moves
    ///
    /// Returns the number of moves made.
    pub fn navigate(&mut self, x: i32, y: i32) -> Result<usize, Diagnostic> {
        let path = self.route(x, y)?;
        let steps = Self::steps(&path);

        for &step in &steps {
            self.face(step)?;
            self.move_forward()?;
        }

        Ok(steps.len())
    }

    /// Turn towards `target` with the fewest quarter turns
    fn face(&mut self, target: Direction) -> Result<(), Diagnostic> {
        let Some(current) = self.direction() else {
            return reject(Diagnostic::TurnBeforePlacement);
        };

        match (target.ordinal() + 4 - current.ordinal()) % 4 {
            0 => Ok(()),
            1 => self.turn_right(),
            2 => {
                self.turn_right()?;
                self.turn_right()
            }
            _ => self.turn_left(),
        }
    }
}

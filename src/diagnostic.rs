use crate::board::Cell;
use crate::direction::Direction;
use thiserror::Error;

/// Why a placement was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("invalid x: {x} (board width {width})")]
    InvalidX { x: i32, width: i32 },

    #[error("invalid y: {y} (board height {height})")]
    InvalidY { y: i32, height: i32 },

    #[error("cell {0} is blocked")]
    Blocked(Cell),

    #[error("invalid direction: {0:?}")]
    UnknownDirection(String),
}

/// Non-fatal conditions raised by toy operations
///
/// Each one leaves the toy exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("ignoring placement due to {0}")]
    PlacementRejected(PlacementError),

    #[error("ignoring move before placement")]
    MoveBeforePlacement,

    #[error("ignoring move {direction} from {from} due to current placement")]
    MoveBlocked { from: Cell, direction: Direction },

    #[error("ignoring turn before placement")]
    TurnBeforePlacement,

    #[error("ignoring report before placement")]
    ReportBeforePlacement,

    #[error("ignoring path search before placement")]
    PathBeforePlacement,

    #[error("no path from {from} to {to}")]
    NoPathFound { from: Cell, to: Cell },
}

impl Diagnostic {
    /// Operation that raised the condition
    pub fn operation(&self) -> &'static str {
        match self {
            Diagnostic::PlacementRejected(_) => "place",
            Diagnostic::MoveBeforePlacement | Diagnostic::MoveBlocked { .. } => "move",
            Diagnostic::TurnBeforePlacement => "turn",
            Diagnostic::ReportBeforePlacement => "report",
            Diagnostic::PathBeforePlacement | Diagnostic::NoPathFound { .. } => "find_path",
        }
    }
}

impl From<PlacementError> for Diagnostic {
    fn from(err: PlacementError) -> Self {
        Diagnostic::PlacementRejected(err)
    }
}

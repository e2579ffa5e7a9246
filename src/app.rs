use crate::action_log::{ActionLog, Outcome};
use crate::board::{Board, Cell};
use crate::command::{Command, ParseError};
use crate::diagnostic::{Diagnostic, PlacementError};
use crate::toy::Toy;
use tracing::{info, warn};

/// Line-oriented command interpreter driving one toy
#[derive(Debug)]
pub struct App {
    toy: Toy,
    log: ActionLog,
}

impl App {
    pub fn new(board: Board) -> Self {
        App {
            toy: Toy::new(board),
            log: ActionLog::new(),
        }
    }

    pub fn toy(&self) -> &Toy {
        &self.toy
    }

    pub fn log(&self) -> &ActionLog {
        &self.log
    }

    /// Run every line of `input`, returning the output lines in order
    pub fn process(&mut self, input: &str) -> Vec<String> {
        input.lines().filter_map(|line| self.exec(line)).collect()
    }

    /// Run one line. Returns the output it produced, if any.
    pub fn exec(&mut self, line: &str) -> Option<String> {
        match Command::parse(line) {
            Ok(Some(command)) => self.run(command),
            Ok(None) => None,
            Err(ParseError::UnknownDirection(unknown)) => {
                let diagnostic =
                    Diagnostic::PlacementRejected(PlacementError::UnknownDirection(unknown.0));
                warn!(operation = diagnostic.operation(), "{}", diagnostic);
                None
            }
            Err(e) => {
                warn!(line = line.trim(), "skipping line: {}", e);
                None
            }
        }
    }

    fn run(&mut self, command: Command) -> Option<String> {
        let mut output = None;

        let outcome: Outcome = match command {
            Command::Place { x, y, direction } => self.toy.place(x, y, direction).into(),
            Command::Move => self.toy.move_forward().into(),
            Command::Left => self.toy.turn_left().into(),
            Command::Right => self.toy.turn_right().into(),
            Command::Report => match self.toy.report() {
                Some(report) => {
                    output = Some(report);
                    Outcome::Applied
                }
                None => Outcome::Rejected(Diagnostic::ReportBeforePlacement.to_string()),
            },
            Command::Block { x, y } => {
                if self.toy.board_mut().block(x, y) {
                    Outcome::Applied
                } else {
                    Outcome::Rejected(format!("cell {},{} not blocked", x, y))
                }
            }
            Command::Path { x, y } => match self.toy.route(x, y) {
                Ok(path) if path.is_empty() => {
                    output = Some(Cell::new(x, y).to_string());
                    Outcome::Applied
                }
                Ok(path) => {
                    output = Some(format_path(&path));
                    Outcome::Applied
                }
                Err(diagnostic) => {
                    if matches!(diagnostic, Diagnostic::NoPathFound { .. }) {
                        output = Some("NO PATH".to_string());
                    }
                    Outcome::Rejected(diagnostic.to_string())
                }
            },
            Command::Goto { x, y } => self.toy.navigate(x, y).map(|_| ()).into(),
        };

        if let Some(text) = &output {
            info!(command = %command, "{}", text);
        }
        self.log.log(command, outcome);
        output
    }
}

impl From<Result<(), Diagnostic>> for Outcome {
    fn from(result: Result<(), Diagnostic>) -> Self {
        match result {
            Ok(()) => Outcome::Applied,
            Err(diagnostic) => Outcome::Rejected(diagnostic.to_string()),
        }
    }
}

/// `x,y -> x,y -> ...`
pub fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(Cell::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

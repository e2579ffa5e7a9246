use crate::direction::{Direction, UnknownDirection};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One line of the command language
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `PLACE x,y,DIRECTION`
    Place { x: i32, y: i32, direction: Direction },
    /// `MOVE`
    Move,
    /// `LEFT`
    Left,
    /// `RIGHT`
    Right,
    /// `REPORT`
    Report,
    /// `BLOCK x,y`
    Block { x: i32, y: i32 },
    /// `PATH x,y`
    Path { x: i32, y: i32 },
    /// `GOTO x,y`
    Goto { x: i32, y: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),

    #[error("{command} expects {expected} arguments, got {found:?}")]
    WrongArity {
        command: &'static str,
        expected: usize,
        found: String,
    },

    #[error("{command}: invalid coordinate {value:?}")]
    InvalidCoordinate { command: &'static str, value: String },

    #[error(transparent)]
    UnknownDirection(#[from] UnknownDirection),
}

impl Command {
    /// Parse one line. Blank lines and `#` comments yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Command>, ParseError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "PLACE" => {
                let args = split_args("PLACE", rest, 3)?;
                Command::Place {
                    x: coordinate("PLACE", args[0])?,
                    y: coordinate("PLACE", args[1])?,
                    direction: args[2].parse()?,
                }
            }
            "MOVE" => bare("MOVE", rest, Command::Move)?,
            "LEFT" => bare("LEFT", rest, Command::Left)?,
            "RIGHT" => bare("RIGHT", rest, Command::Right)?,
            "REPORT" => bare("REPORT", rest, Command::Report)?,
            "BLOCK" => {
                let (x, y) = cell_args("BLOCK", rest)?;
                Command::Block { x, y }
            }
            "PATH" => {
                let (x, y) = cell_args("PATH", rest)?;
                Command::Path { x, y }
            }
            "GOTO" => {
                let (x, y) = cell_args("GOTO", rest)?;
                Command::Goto { x, y }
            }
            _ => return Err(ParseError::UnknownCommand(word.to_string())),
        };

        Ok(Some(command))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Place { x, y, direction } => write!(f, "PLACE {},{},{}", x, y, direction),
            Command::Move => f.write_str("MOVE"),
            Command::Left => f.write_str("LEFT"),
            Command::Right => f.write_str("RIGHT"),
            Command::Report => f.write_str("REPORT"),
            Command::Block { x, y } => write!(f, "BLOCK {},{}", x, y),
            Command::Path { x, y } => write!(f, "PATH {},{}", x, y),
            Command::Goto { x, y } => write!(f, "GOTO {},{}", x, y),
        }
    }
}

fn bare(command: &'static str, rest: &str, value: Command) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(ParseError::WrongArity {
            command,
            expected: 0,
            found: rest.to_string(),
        })
    }
}

fn split_args<'a>(
    command: &'static str,
    rest: &'a str,
    expected: usize,
) -> Result<Vec<&'a str>, ParseError> {
    let args: Vec<&str> = rest.split(',').map(str::trim).collect();
    if rest.is_empty() || args.len() != expected {
        return Err(ParseError::WrongArity {
            command,
            expected,
            found: rest.to_string(),
        });
    }
    Ok(args)
}

fn cell_args(command: &'static str, rest: &str) -> Result<(i32, i32), ParseError> {
    let args = split_args(command, rest, 2)?;
    Ok((coordinate(command, args[0])?, coordinate(command, args[1])?))
}

fn coordinate(command: &'static str, value: &str) -> Result<i32, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidCoordinate {
        command,
        value: value.to_string(),
    })
}

pub mod action_log;
pub mod app;
pub mod board;
pub mod command;
pub mod config;
pub mod diagnostic;
pub mod direction;
pub mod graph;
pub mod toy;

pub use app::App;
pub use board::{Board, Cell};
pub use command::Command;
pub use config::Config;
pub use diagnostic::{Diagnostic, PlacementError};
pub use direction::Direction;
pub use graph::Graph;
pub use toy::{Placement, Toy};

use crate::command::Command;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// What happened when a command ran
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    Applied,
    /// The command was absorbed with a diagnostic
    Rejected(String),
}

/// Logged command with timestamp and outcome
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoggedAction {
    /// Milliseconds since the session started
    pub timestamp_ms: u64,
    pub command: Command,
    pub outcome: Outcome,
}

/// Session record of executed commands
#[derive(Debug)]
pub struct ActionLog {
    start_time: Instant,
    actions: Vec<LoggedAction>,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    pub fn new() -> Self {
        ActionLog {
            start_time: Instant::now(),
            actions: Vec::new(),
        }
    }

    /// Log a command with the current timestamp
    pub fn log(&mut self, command: Command, outcome: Outcome) {
        let timestamp_ms = self.start_time.elapsed().as_millis() as u64;
        self.actions.push(LoggedAction {
            timestamp_ms,
            command,
            outcome,
        });
    }

    pub fn actions(&self) -> &[LoggedAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.actions)
    }

    /// Save log to JSON file
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get summary statistics
    pub fn summary(&self) -> String {
        let mut applied = 0;
        let mut rejected = 0;
        let mut moves = 0;
        let mut turns = 0;
        let mut placements = 0;
        let mut blocks = 0;
        let mut path_queries = 0;

        for logged in &self.actions {
            match logged.outcome {
                Outcome::Applied => applied += 1,
                Outcome::Rejected(_) => rejected += 1,
            }
            match logged.command {
                Command::Place { .. } => placements += 1,
                Command::Move => moves += 1,
                Command::Left | Command::Right => turns += 1,
                Command::Block { .. } => blocks += 1,
                Command::Path { .. } | Command::Goto { .. } => path_queries += 1,
                Command::Report => {}
            }
        }

        let duration = self.actions.last().map_or(0, |last| last.timestamp_ms);

        format!(
            "Session Duration: {}ms\n\
             Total Commands: {} ({} applied, {} rejected)\n\
             Toy Operations: {} placements, {} moves, {} turns\n\
             Board Operations: {} blocks, {} path queries",
            duration,
            self.actions.len(),
            applied,
            rejected,
            placements,
            moves,
            turns,
            blocks,
            path_queries
        )
    }
}

use crate::board::Board;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidBoard { width: i32, height: i32 },
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub board: BoardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct BoardConfig {
    #[serde(default = "default_width")]
    pub width: i32,
    #[serde(default = "default_height")]
    pub height: i32,
    /// Cells blocked at startup, as `[x, y]` pairs
    #[serde(default)]
    pub blocked: Vec<[i32; 2]>,
}

#[derive(Debug, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub enable_action_log: bool,
    #[serde(default = "default_action_log_path")]
    pub action_log_path: String,
}

// Default values
fn default_width() -> i32 { 5 }
fn default_height() -> i32 { 5 }
fn default_level() -> String { "warn".to_string() }
fn default_action_log_path() -> String { "action_log.json".to_string() }

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            blocked: Vec::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            enable_action_log: false,
            action_log_path: default_action_log_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::InvalidBoard {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Board with the configured size and initial obstacles
    ///
    /// Call `validate` first; `Config::from_toml_str` already does.
    pub fn build(&self) -> Board {
        let mut board = Board::new(self.width, self.height);
        for &[x, y] in &self.blocked {
            if !board.block(x, y) {
                warn!(x, y, "configured blocked cell is outside the board or repeated");
            }
        }
        board
    }
}

impl Config {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.board.validate()?;
        Ok(config)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Fall back to defaults when loading failed
    ///
    /// A missing file is expected and only logged at info level; any other
    /// failure is a warning.
    pub fn or_default(loaded: Result<Self, ConfigError>) -> Self {
        match loaded {
            Ok(config) => {
                info!("loaded configuration");
                config
            }
            Err(ConfigError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                info!("no {} found, using default configuration", path);
                Config::default()
            }
            Err(e) => {
                warn!("{}; using default configuration", e);
                Config::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.board.width, 5);
        assert_eq!(config.board.height, 5);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [board]
            width = 8
            blocked = [[1, 0], [1, 1]]

            [logging]
            enable_action_log = true
            "#,
        )
        .unwrap();
        assert_eq!(config.board.width, 8);
        assert_eq!(config.board.height, 5);
        assert_eq!(config.board.blocked, vec![[1, 0], [1, 1]]);
        assert!(config.logging.enable_action_log);
        assert_eq!(config.logging.action_log_path, "action_log.json");
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            Config::from_toml_str("[board]\nwidth = \"wide\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_non_positive_board_rejected() {
        assert!(matches!(
            Config::from_toml_str("[board]\nwidth = 0\nheight = -3"),
            Err(ConfigError::InvalidBoard { width: 0, height: -3 })
        ));
        assert!(matches!(
            Config::from_toml_str("[board]\nheight = 0"),
            Err(ConfigError::InvalidBoard { width: 5, height: 0 })
        ));
    }

    #[test]
    fn test_non_positive_board_falls_back_to_defaults() {
        let loaded = Config::from_toml_str("[board]\nwidth = 0\nheight = -3");
        let config = Config::or_default(loaded);
        assert_eq!(config, Config::default());
        let board = config.board.build();
        assert_eq!((board.width(), board.height()), (5, 5));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            Config::load_from("definitely/not/here.toml"),
            Err(ConfigError::Io { .. })
        ));
    }

    #[test]
    fn test_or_default() {
        let missing = Config::load_from("definitely/not/here.toml");
        assert_eq!(Config::or_default(missing), Config::default());
        let broken = Config::from_toml_str("[logging]\nlevel = 3");
        assert_eq!(Config::or_default(broken), Config::default());
    }

    #[test]
    fn test_build_board() {
        let config = BoardConfig {
            width: 3,
            height: 4,
            blocked: vec![[0, 0], [9, 9]],
        };
        let board = config.build();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 4);
        assert!(board.is_blocked(0, 0));
        assert!(!board.is_blocked(9, 9));
    }
}

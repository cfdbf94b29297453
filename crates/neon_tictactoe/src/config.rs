//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use neon_tictactoe_core::{Difficulty, Mark};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// AI difficulty when playing against the computer.
    #[serde(default)]
    difficulty: Difficulty,

    /// Mark the AI plays in human-vs-AI games.
    #[serde(default = "default_ai_mark")]
    ai_mark: Mark,

    /// Pause before the AI's move becomes visible, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// Where scores are persisted.
    #[serde(default = "default_stats_path")]
    stats_path: PathBuf,

    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_ai_mark() -> Mark {
    Mark::O
}

fn default_ai_delay_ms() -> u64 {
    500
}

fn default_stats_path() -> PathBuf {
    PathBuf::from("neon_tictactoe_stats.json")
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            ai_mark: default_ai_mark(),
            ai_delay_ms: default_ai_delay_ms(),
            stats_path: default_stats_path(),
            log_filter: default_log_filter(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(difficulty = %config.difficulty, ai_mark = %config.ai_mark, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Returns the AI delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Applies command-line overrides. `None` keeps the current value.
    #[instrument(skip(self))]
    pub fn apply_overrides(
        &mut self,
        difficulty: Option<Difficulty>,
        ai_mark: Option<Mark>,
        ai_delay_ms: Option<u64>,
        stats_path: Option<PathBuf>,
    ) {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(ai_mark) = ai_mark {
            self.ai_mark = ai_mark;
        }
        if let Some(ai_delay_ms) = ai_delay_ms {
            self.ai_delay_ms = ai_delay_ms;
        }
        if let Some(stats_path) = stats_path {
            self.stats_path = stats_path;
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = ArenaConfig::from_toml("").unwrap();
        assert_eq!(config, ArenaConfig::default());
        assert_eq!(*config.ai_mark(), Mark::O);
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_full_config() {
        let config = ArenaConfig::from_toml(
            r#"
            difficulty = "hard"
            ai_mark = "X"
            ai_delay_ms = 0
            stats_path = "/tmp/scores.json"
            log_filter = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(*config.ai_mark(), Mark::X);
        assert_eq!(*config.ai_delay_ms(), 0);
        assert_eq!(config.stats_path(), &PathBuf::from("/tmp/scores.json"));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_bad_difficulty_is_error() {
        let err = ArenaConfig::from_toml(r#"difficulty = "insane""#).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_overrides() {
        let mut config = ArenaConfig::default();
        config.apply_overrides(Some(Difficulty::Easy), None, Some(10), None);
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(*config.ai_mark(), Mark::O);
        assert_eq!(*config.ai_delay_ms(), 10);
    }
}

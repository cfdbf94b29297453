//! Score tallies and their persistence.
//!
//! The scoreboard is three independent flat records of counters, each under
//! a fixed key. A record missing from storage reads as zeros.

use derive_getters::Getters;
use derive_more::{Display, Error};
use neon_tictactoe_core::{Mark, MoveOutcome};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument};

/// Storage key for the running tallies.
pub const SCORES_KEY: &str = "tictactoe.scores";
/// Storage key for the all-time totals.
pub const TOTALS_KEY: &str = "tictactoe.totals";
/// Storage key for the record against the AI.
pub const VS_AI_KEY: &str = "tictactoe.vs_ai";

/// Running wins per mark and ties. Cleared by a full reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreTally {
    x: u32,
    o: u32,
    tie: u32,
}

/// All-time totals. Never cleared by a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoricalTotals {
    games: u32,
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

/// Results of games played against the AI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AiRecord {
    player_wins: u32,
    ai_wins: u32,
    ties: u32,
}

/// All persisted tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    #[serde(rename = "tictactoe.scores", default)]
    scores: ScoreTally,
    #[serde(rename = "tictactoe.totals", default)]
    totals: HistoricalTotals,
    #[serde(rename = "tictactoe.vs_ai", default)]
    vs_ai: AiRecord,
}

impl Scoreboard {
    /// Records a finished game.
    ///
    /// `ai_mark` is the AI's mark when a human played against it; AI
    /// self-play and two-human games leave the AI record alone.
    /// Non-terminal outcomes are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &MoveOutcome, ai_mark: Option<Mark>) {
        match *outcome {
            MoveOutcome::Continue { .. } => return,
            MoveOutcome::Won { mark, .. } => {
                match mark {
                    Mark::X => {
                        self.scores.x += 1;
                        self.totals.x_wins += 1;
                    }
                    Mark::O => {
                        self.scores.o += 1;
                        self.totals.o_wins += 1;
                    }
                }
                if let Some(ai) = ai_mark {
                    if ai == mark {
                        self.vs_ai.ai_wins += 1;
                    } else {
                        self.vs_ai.player_wins += 1;
                    }
                }
            }
            MoveOutcome::Draw => {
                self.scores.tie += 1;
                self.totals.ties += 1;
                if ai_mark.is_some() {
                    self.vs_ai.ties += 1;
                }
            }
        }
        self.totals.games += 1;
        debug!(scores = ?self.scores, "Result recorded");
    }

    /// Clears the running tallies. Totals and the AI record are kept.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = ScoreTally::default();
    }
}

/// Storage error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Stats error: {} at {}:{}", message, file, line)]
pub struct StatsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StatsError {
    /// Creates a new stats error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StatsError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StatsError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}

/// Somewhere a [`Scoreboard`] can be read from and written to.
pub trait StatsStore: Send + Sync {
    /// Reads the scoreboard; missing data reads as zeros.
    fn load(&self) -> Result<Scoreboard, StatsError>;

    /// Writes the scoreboard.
    fn save(&self, board: &Scoreboard) -> Result<(), StatsError>;
}

/// Scoreboard stored as one JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store at `path`. Nothing is read until [`StatsStore::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsStore for JsonFileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Scoreboard, StatsError> {
        if !self.path.exists() {
            debug!("No stats file yet");
            return Ok(Scoreboard::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Scoreboard::default());
        }

        let board = serde_json::from_str(&content)?;
        debug!(?board, "Stats loaded");
        Ok(board)
    }

    #[instrument(skip(self, board), fields(path = %self.path.display()))]
    fn save(&self, board: &Scoreboard) -> Result<(), StatsError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(board)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content)?;
        std::fs::rename(&tmp, &self.path)?;

        info!("Stats saved");
        Ok(())
    }
}

/// In-memory store, shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    board: Arc<Mutex<Scoreboard>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatsStore for MemoryStore {
    fn load(&self) -> Result<Scoreboard, StatsError> {
        self.board
            .lock()
            .map(|board| *board)
            .map_err(|e| StatsError::new(format!("Lock poisoned: {}", e)))
    }

    fn save(&self, board: &Scoreboard) -> Result<(), StatsError> {
        let mut guard = self
            .board
            .lock()
            .map_err(|e| StatsError::new(format!("Lock poisoned: {}", e)))?;
        *guard = *board;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_tictactoe_core::WinPattern;

    fn win(mark: Mark) -> MoveOutcome {
        MoveOutcome::Won {
            mark,
            pattern: WinPattern::TopRow,
        }
    }

    #[test]
    fn test_record_two_player_games() {
        let mut board = Scoreboard::default();
        board.record(&win(Mark::X), None);
        board.record(&win(Mark::O), None);
        board.record(&MoveOutcome::Draw, None);

        assert_eq!(*board.scores().x(), 1);
        assert_eq!(*board.scores().o(), 1);
        assert_eq!(*board.scores().tie(), 1);
        assert_eq!(*board.totals().games(), 3);
        assert_eq!(*board.vs_ai(), AiRecord::default());
    }

    #[test]
    fn test_record_against_ai() {
        let mut board = Scoreboard::default();
        board.record(&win(Mark::O), Some(Mark::O));
        board.record(&win(Mark::X), Some(Mark::O));
        board.record(&MoveOutcome::Draw, Some(Mark::O));

        assert_eq!(*board.vs_ai().ai_wins(), 1);
        assert_eq!(*board.vs_ai().player_wins(), 1);
        assert_eq!(*board.vs_ai().ties(), 1);
    }

    #[test]
    fn test_continue_is_ignored() {
        let mut board = Scoreboard::default();
        board.record(&MoveOutcome::Continue { next: Mark::O }, None);
        assert_eq!(board, Scoreboard::default());
    }

    #[test]
    fn test_reset_keeps_totals() {
        let mut board = Scoreboard::default();
        board.record(&win(Mark::X), Some(Mark::O));
        board.reset_scores();

        assert_eq!(*board.scores(), ScoreTally::default());
        assert_eq!(*board.totals().x_wins(), 1);
        assert_eq!(*board.vs_ai().player_wins(), 1);
    }

    #[test]
    fn test_json_uses_fixed_keys() {
        let json = serde_json::to_value(Scoreboard::default()).unwrap();
        let object = json.as_object().unwrap();
        assert!(object.contains_key(SCORES_KEY));
        assert!(object.contains_key(TOTALS_KEY));
        assert!(object.contains_key(VS_AI_KEY));
        assert_eq!(json[SCORES_KEY]["tie"], 0);
    }

    #[test]
    fn test_missing_record_reads_as_zero() {
        let board: Scoreboard =
            serde_json::from_str(r#"{"tictactoe.scores": {"x": 2, "o": 1, "tie": 0}}"#).unwrap();
        assert_eq!(*board.scores().x(), 2);
        assert_eq!(*board.totals(), HistoricalTotals::default());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        let mut board = store.load().unwrap();
        board.record(&MoveOutcome::Draw, None);
        store.save(&board).unwrap();
        assert_eq!(store.clone().load().unwrap(), board);
    }
}

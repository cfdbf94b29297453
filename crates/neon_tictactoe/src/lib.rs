//! Neon Tic-Tac-Toe - terminal front end for the tic-tac-toe core
//!
//! # Architecture
//!
//! - **Core** ([`neon_tictactoe_core`]): board state, outcome evaluation, AI
//! - **Players**: humans typing moves, or the AI with a pacing delay
//! - **Orchestrator**: runs one game between two players, emitting [`GameEvent`]s
//! - **Arena**: round loop that records finished games on a [`Scoreboard`]
//! - **Stats**: JSON persistence of the scoreboard
//!
//! # Example
//!
//! ```no_run
//! use neon_tictactoe::{AiPlayer, Arena, MemoryStore, Orchestrator};
//! use neon_tictactoe_core::Difficulty;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (event_tx, _event_rx) = tokio::sync::mpsc::unbounded_channel();
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(AiPlayer::new("AI X", Difficulty::Hard, Duration::ZERO)),
//!     Box::new(AiPlayer::new("AI O", Difficulty::Easy, Duration::ZERO)),
//!     event_tx,
//! );
//! let mut arena = Arena::open(MemoryStore::new())?;
//! arena.play(&mut orchestrator, Some(10)).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod arena;
mod cli;
mod config;
mod mode;
mod orchestrator;
mod players;
mod render;
mod stats;

pub use arena::Arena;
pub use cli::{Cli, Command};
pub use config::{ArenaConfig, ConfigError};
pub use mode::GameMode;
pub use orchestrator::{GameEvent, Orchestrator, RoundResult};
pub use players::{AiPlayer, HumanPlayer, InputLines, Player, PlayerAction, parse_action};
pub use render::{TextRenderer, render_event, render_scoreboard};
pub use stats::{
    AiRecord, HistoricalTotals, JsonFileStore, MemoryStore, SCORES_KEY, ScoreTally, Scoreboard,
    StatsError, StatsStore, TOTALS_KEY, VS_AI_KEY,
};

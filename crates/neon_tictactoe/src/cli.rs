//! Command-line interface for neon_tictactoe.

use crate::mode::GameMode;
use clap::{Parser, Subcommand};
use neon_tictactoe_core::{Difficulty, Mark};
use std::path::PathBuf;

/// Neon Tic-Tac-Toe - terminal tic-tac-toe with a heuristic AI
#[derive(Parser, Debug)]
#[command(name = "neon_tictactoe")]
#[command(about = "Terminal tic-tac-toe with score tracking", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, global = true, default_value = "neon_tictactoe.toml")]
    pub config: PathBuf,

    /// Override the stats file location
    #[arg(long, global = true)]
    pub stats: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play games in the terminal
    Play {
        /// Who plays
        #[arg(long, value_enum, default_value_t = GameMode::HumanVsAi)]
        mode: GameMode,

        /// AI difficulty: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Mark the AI plays against a human (X or O)
        #[arg(long)]
        ai_mark: Option<Mark>,

        /// Pause before each AI move, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,

        /// Stop after this many finished games
        #[arg(long)]
        rounds: Option<u32>,
    },

    /// Show the saved scores
    Stats,

    /// Clear the running scores (all-time totals are kept)
    ResetStats,
}

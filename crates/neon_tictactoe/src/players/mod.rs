//! Player trait and implementations.

mod ai;
mod human;

pub use ai::AiPlayer;
pub use human::{HumanPlayer, InputLines, parse_action};

use anyhow::Result;
use neon_tictactoe_core::{Game, Position};

/// What a player wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    /// Place the mark at a position.
    Place(Position),
    /// Abandon the current game and start over.
    Restart,
    /// Abandon the current game and clear the running scores.
    ResetScores,
    /// Stop playing.
    Quit,
}

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets this player's action for the current turn.
    async fn get_action(&mut self, game: &Game) -> Result<PlayerAction>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// True when moves come from the computer.
    fn is_ai(&self) -> bool {
        false
    }
}

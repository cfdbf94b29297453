//! Computer player with pacing delay.

use super::{Player, PlayerAction};
use anyhow::Result;
use neon_tictactoe_core::{Difficulty, Game, select_ai_move};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, instrument};

/// AI player that waits `delay` before committing its move.
pub struct AiPlayer {
    name: String,
    difficulty: Difficulty,
    delay: Duration,
    rng: StdRng,
}

impl AiPlayer {
    /// Creates an AI player seeded from the operating system.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, delay: Duration) -> Self {
        Self::with_rng(name, difficulty, delay, StdRng::from_os_rng())
    }

    /// Creates an AI player with a fixed seed, for reproducible games.
    pub fn seeded(name: impl Into<String>, difficulty: Difficulty, delay: Duration, seed: u64) -> Self {
        Self::with_rng(name, difficulty, delay, StdRng::seed_from_u64(seed))
    }

    fn with_rng(name: impl Into<String>, difficulty: Difficulty, delay: Duration, rng: StdRng) -> Self {
        Self {
            name: name.into(),
            difficulty,
            delay,
            rng,
        }
    }
}

#[async_trait::async_trait]
impl Player for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, difficulty = %self.difficulty))]
    async fn get_action(&mut self, game: &Game) -> Result<PlayerAction> {
        debug!("AI making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let position = select_ai_move(game.board(), game.turn(), self.difficulty, &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No valid moves available"))?;

        debug!(position = %position, "AI chose position");
        Ok(PlayerAction::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_ai(&self) -> bool {
        true
    }
}

//! Game mode selection.

use crate::config::ArenaConfig;
use crate::orchestrator::GameEvent;
use crate::players::{AiPlayer, HumanPlayer, InputLines, Player};
use neon_tictactoe_core::Mark;
use tokio::sync::mpsc;
use tracing::instrument;

/// Who is playing?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "kebab-case")]
pub enum GameMode {
    /// Two humans at one keyboard.
    #[default]
    HumanVsHuman,
    /// Human against the heuristic AI.
    HumanVsAi,
    /// AI against AI.
    AiVsAi,
}

impl GameMode {
    /// Returns display name.
    pub fn name(&self) -> &str {
        match self {
            GameMode::HumanVsHuman => "Human vs Human",
            GameMode::HumanVsAi => "Human vs AI",
            GameMode::AiVsAi => "AI vs AI",
        }
    }

    /// True when at least one human takes part.
    pub fn needs_input(&self) -> bool {
        !matches!(self, GameMode::AiVsAi)
    }

    /// Builds the X and O players for this mode.
    #[instrument(skip(config, input, event_tx))]
    pub fn build_players(
        &self,
        config: &ArenaConfig,
        input: InputLines,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> (Box<dyn Player>, Box<dyn Player>) {
        let human = |name: &str| -> Box<dyn Player> {
            Box::new(HumanPlayer::new(name, input.clone()).with_notices(event_tx.clone()))
        };
        let ai = |name: &str| -> Box<dyn Player> {
            Box::new(AiPlayer::new(name, *config.difficulty(), config.ai_delay()))
        };

        match self {
            GameMode::HumanVsHuman => (human("Player 1"), human("Player 2")),
            GameMode::HumanVsAi => match config.ai_mark() {
                Mark::X => (ai("AI"), human("You")),
                Mark::O => (human("You"), ai("AI")),
            },
            GameMode::AiVsAi => (ai("AI X"), ai("AI O")),
        }
    }
}

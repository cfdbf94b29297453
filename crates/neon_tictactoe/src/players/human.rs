//! Human player fed by lines of text input.

use super::{Player, PlayerAction};
use crate::orchestrator::GameEvent;
use anyhow::Result;
use neon_tictactoe_core::{Game, Position};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, warn};

/// Lines of player input, shared by every human at the same keyboard.
///
/// Only the player whose turn it is reads, so the lock is never contended.
pub type InputLines = Arc<Mutex<mpsc::UnboundedReceiver<String>>>;

/// Human player reading commands from shared input lines.
///
/// Accepts a keypad number (1-9), a position label such as `center`,
/// `r` to restart, `reset` to also clear the running scores, or `q` to quit.
/// Anything else is ignored. Lines typed before the turn began are dropped.
/// End of input counts as quitting.
pub struct HumanPlayer {
    name: String,
    input: InputLines,
    notice_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: InputLines) -> Self {
        Self {
            name: name.into(),
            input,
            notice_tx: None,
        }
    }

    /// Creates a human player that owns its input channel.
    pub fn from_receiver(name: impl Into<String>, rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self::new(name, Arc::new(Mutex::new(rx)))
    }

    /// Sends a notice on this channel whenever input is rejected.
    pub fn with_notices(mut self, notice_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.notice_tx = Some(notice_tx);
        self
    }

    fn notice(&self, message: String) {
        if let Some(tx) = &self.notice_tx {
            // The UI may already be gone; nothing to do then.
            let _ = tx.send(GameEvent::Notice(message));
        }
    }
}

/// Parses one line of human input.
pub fn parse_action(line: &str) -> Option<PlayerAction> {
    match line.trim().to_lowercase().as_str() {
        "q" | "quit" | "exit" => Some(PlayerAction::Quit),
        "r" | "restart" => Some(PlayerAction::Restart),
        "reset" => Some(PlayerAction::ResetScores),
        other => Position::parse_input(other).map(PlayerAction::Place),
    }
}

#[async_trait::async_trait]
impl Player for HumanPlayer {
    async fn get_action(&mut self, game: &Game) -> Result<PlayerAction> {
        let mut input = self.input.lock().await;

        // Anything already queued was typed while another player was moving.
        while let Ok(stale) = input.try_recv() {
            if stale.trim().is_empty() {
                continue;
            }
            debug!(player = %self.name, input = %stale.trim(), "Dropping early input");
            self.notice(format!("Ignored \"{}\", typed before your turn", stale.trim()));
        }

        while let Some(line) = input.recv().await {
            match parse_action(&line) {
                Some(PlayerAction::Place(pos)) if !game.board().is_empty(pos) => {
                    warn!(player = %self.name, position = %pos, "Square taken");
                    self.notice(format!("{} is taken, pick another square", pos));
                }
                Some(action) => {
                    debug!(player = %self.name, ?action, "Human input");
                    return Ok(action);
                }
                None => {
                    debug!(player = %self.name, input = %line.trim(), "Unrecognised input");
                    self.notice(
                        "Enter 1-9, a square name, r to restart, reset to clear scores or q to quit"
                            .to_string(),
                    );
                }
            }
        }

        debug!(player = %self.name, "Input closed, quitting");
        Ok(PlayerAction::Quit)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

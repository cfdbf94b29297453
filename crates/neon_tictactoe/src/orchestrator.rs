//! Game orchestration between players.

use crate::players::{Player, PlayerAction};
use crate::stats::Scoreboard;
use anyhow::Result;
use neon_tictactoe_core::{Game, Mark, MoveOutcome, Position};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Messages sent from the orchestrator to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game (or a restarted one) is ready.
    GameStarted {
        /// Name of the player holding X.
        player_x: String,
        /// Name of the player holding O.
        player_o: String,
        /// Board rendering.
        board: String,
    },
    /// It's `mark`'s turn.
    TurnStarted {
        /// Mark to move.
        mark: Mark,
        /// Name of the player to move.
        player: String,
        /// True when the computer is choosing.
        is_ai: bool,
    },
    /// A move was accepted.
    MoveMade {
        /// Mark that moved.
        mark: Mark,
        /// Where it moved.
        position: Position,
        /// Board rendering after the move.
        board: String,
    },
    /// A move was rejected; the player is asked again.
    MoveRejected {
        /// Player whose move was rejected.
        player: String,
        /// Rejection reason.
        reason: String,
    },
    /// Game ended.
    GameOver {
        /// The final outcome (`Won` or `Draw`).
        outcome: MoveOutcome,
        /// Winner's name, `None` on a draw.
        winner: Option<String>,
    },
    /// Scores after a finished game was recorded.
    ScoresUpdated(Scoreboard),
    /// Free-form message for the players.
    Notice(String),
}

/// How a call to [`Orchestrator::run`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResult {
    /// The game reached a win or draw.
    Finished(MoveOutcome),
    /// A player asked to clear the scores; the game was abandoned.
    ScoresReset,
    /// A player quit before the end.
    Quit,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the mark played by the computer against a human, if any.
    ///
    /// `None` when both or neither player is an AI.
    pub fn ai_mark(&self) -> Option<Mark> {
        match (self.player_x.is_ai(), self.player_o.is_ai()) {
            (true, false) => Some(Mark::X),
            (false, true) => Some(Mark::O),
            _ => None,
        }
    }

    /// Plays one game to completion, or until a player quits.
    ///
    /// Starts from a fresh board. A `Restart` action clears the board and
    /// keeps going; nothing is reported as a result for the abandoned game.
    /// `ResetScores` abandons the game and hands control back to the caller.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<RoundResult> {
        info!("Starting game orchestration");
        self.restart()?;

        loop {
            let mark = self.game.turn();
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let player_name = player.name().to_string();

            self.event_tx.send(GameEvent::TurnStarted {
                mark,
                player: player_name.clone(),
                is_ai: player.is_ai(),
            })?;

            debug!(player = %player_name, %mark, "Waiting for move");
            let action = player.get_action(&self.game).await?;

            let position = match action {
                PlayerAction::Quit => {
                    info!(player = %player_name, "Player quit");
                    return Ok(RoundResult::Quit);
                }
                PlayerAction::ResetScores => {
                    info!(player = %player_name, "Player reset the scores");
                    return Ok(RoundResult::ScoresReset);
                }
                PlayerAction::Restart => {
                    info!(player = %player_name, "Player restarted the game");
                    self.restart()?;
                    continue;
                }
                PlayerAction::Place(position) => position,
            };

            let outcome = match self.game.apply_move(position.index(), mark) {
                Ok(outcome) => outcome,
                Err(e) => {
                    warn!(player = %player_name, error = %e, "Move rejected");
                    self.event_tx.send(GameEvent::MoveRejected {
                        player: player_name,
                        reason: e.to_string(),
                    })?;
                    continue;
                }
            };

            self.event_tx.send(GameEvent::MoveMade {
                mark,
                position,
                board: self.game.board().display(),
            })?;

            if outcome.is_terminal() {
                let winner = match outcome {
                    MoveOutcome::Won { mark: Mark::X, .. } => Some(self.player_x.name().to_string()),
                    MoveOutcome::Won { mark: Mark::O, .. } => Some(self.player_o.name().to_string()),
                    _ => None,
                };
                info!(?outcome, ?winner, "Game over");
                self.event_tx.send(GameEvent::GameOver { outcome, winner })?;
                return Ok(RoundResult::Finished(outcome));
            }
        }
    }

    /// Clears the board and announces a fresh game.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<()> {
        self.game.reset();
        self.event_tx.send(GameEvent::GameStarted {
            player_x: self.player_x.name().to_string(),
            player_o: self.player_o.name().to_string(),
            board: self.game.board().display(),
        })?;
        Ok(())
    }
}

//! Round loop tying players, scores, and storage together.

use crate::orchestrator::{GameEvent, Orchestrator, RoundResult};
use crate::stats::{Scoreboard, StatsError, StatsStore};
use anyhow::Result;
use neon_tictactoe_core::{Mark, MoveOutcome};
use tokio::sync::mpsc;
use tracing::{info, instrument};

/// Owns the scoreboard and writes it back after every finished game.
pub struct Arena<S: StatsStore> {
    store: S,
    scoreboard: Scoreboard,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl<S: StatsStore> Arena<S> {
    /// Loads the scoreboard from `store`.
    #[instrument(skip(store))]
    pub fn open(store: S) -> Result<Self, StatsError> {
        let scoreboard = store.load()?;
        info!(games = scoreboard.totals().games(), "Arena opened");
        Ok(Self {
            store,
            scoreboard,
            event_tx: None,
        })
    }

    /// Announces score updates on this channel.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Returns the current scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Records a finished game and saves it.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: &MoveOutcome, ai_mark: Option<Mark>) -> Result<(), StatsError> {
        self.scoreboard.record(outcome, ai_mark);
        self.store.save(&self.scoreboard)?;
        self.announce();
        Ok(())
    }

    /// Clears the running scores and saves. Totals are kept.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) -> Result<(), StatsError> {
        self.scoreboard.reset_scores();
        self.store.save(&self.scoreboard)?;
        self.announce();
        Ok(())
    }

    fn announce(&self) {
        if let Some(tx) = &self.event_tx {
            // The UI may already be gone; the scores are saved regardless.
            let _ = tx.send(GameEvent::ScoresUpdated(self.scoreboard));
        }
    }

    /// Plays rounds until a player quits or `max_rounds` games finish.
    ///
    /// A scores reset clears the running tallies and starts a new game
    /// without counting a round. Returns the number of finished games.
    #[instrument(skip(self, orchestrator))]
    pub async fn play(&mut self, orchestrator: &mut Orchestrator, max_rounds: Option<u32>) -> Result<u32> {
        let mut finished = 0;

        while max_rounds.is_none_or(|max| finished < max) {
            match orchestrator.run().await? {
                RoundResult::Finished(outcome) => {
                    self.record(&outcome, orchestrator.ai_mark())?;
                    finished += 1;
                }
                RoundResult::ScoresReset => self.reset_scores()?,
                RoundResult::Quit => break,
            }
        }

        info!(finished, "Stopped playing");
        Ok(finished)
    }
}

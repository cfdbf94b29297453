//! Plain-text rendering of game events and scores.

use crate::orchestrator::GameEvent;
use crate::stats::Scoreboard;
use neon_tictactoe_core::MoveOutcome;
use std::io::Write;

/// Turns a [`GameEvent`] into the text shown to players.
pub fn render_event(event: &GameEvent) -> String {
    match event {
        GameEvent::GameStarted {
            player_x,
            player_o,
            board,
        } => format!("\n{} (X) vs {} (O)\n\n{}\n", player_x, player_o, board),
        GameEvent::TurnStarted {
            mark,
            player,
            is_ai,
        } => {
            if *is_ai {
                format!("{} ({}) is thinking...", player, mark)
            } else {
                format!("Player {}'s turn ({}): ", mark, player)
            }
        }
        GameEvent::MoveMade {
            mark,
            position,
            board,
        } => format!("\n{} plays {}\n\n{}\n", mark, position, board),
        GameEvent::MoveRejected { player, reason } => format!("{}: {}", player, reason),
        GameEvent::GameOver { outcome, winner } => match (outcome, winner) {
            (MoveOutcome::Won { mark, pattern }, Some(name)) => {
                format!("Player {} wins! ({}, {})", mark, name, pattern)
            }
            (MoveOutcome::Won { mark, pattern }, None) => {
                format!("Player {} wins! ({})", mark, pattern)
            }
            _ => "It's a tie!".to_string(),
        },
        GameEvent::ScoresUpdated(board) => render_scoreboard(board),
        GameEvent::Notice(message) => message.clone(),
    }
}

/// Formats the scoreboard as a short table.
pub fn render_scoreboard(board: &Scoreboard) -> String {
    let scores = board.scores();
    let totals = board.totals();
    let vs_ai = board.vs_ai();
    format!(
        "Scores   X: {}  O: {}  Tie: {}\n\
         Totals   games: {}  X wins: {}  O wins: {}  ties: {}\n\
         vs AI    you: {}  AI: {}  ties: {}",
        scores.x(),
        scores.o(),
        scores.tie(),
        totals.games(),
        totals.x_wins(),
        totals.o_wins(),
        totals.ties(),
        vs_ai.player_wins(),
        vs_ai.ai_wins(),
        vs_ai.ties(),
    )
}

/// Writes rendered events to an output stream.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Renders one event.
    pub fn event(&mut self, event: &GameEvent) -> std::io::Result<()> {
        let text = render_event(event);
        if matches!(event, GameEvent::TurnStarted { is_ai: false, .. }) {
            write!(self.out, "{}", text)?;
        } else {
            writeln!(self.out, "{}", text)?;
        }
        self.out.flush()
    }

    /// Renders a free-form line.
    pub fn line(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Renders the scoreboard.
    pub fn scoreboard(&mut self, board: &Scoreboard) -> std::io::Result<()> {
        self.line(&render_scoreboard(board))
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from the
//! [`crate::Game`] session so callers can evaluate any position.

pub mod draw;
pub mod win;

pub use draw::check_draw;
pub use win::{WinLine, WinPattern, check_win};

use crate::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What a board means for the game after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nobody has won and squares remain; `next` moves.
    Continue {
        /// The mark to move next.
        next: Mark,
    },
    /// `mark` completed `pattern`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        pattern: WinPattern,
    },
    /// Board full with no line.
    Draw,
}

impl MoveOutcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Evaluates the board after `mover` has played.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, mover: Mark) -> MoveOutcome {
    if let Some(WinLine { mark, pattern }) = check_win(board) {
        MoveOutcome::Won { mark, pattern }
    } else if board.is_full() {
        MoveOutcome::Draw
    } else {
        MoveOutcome::Continue {
            next: mover.opponent(),
        }
    }
}

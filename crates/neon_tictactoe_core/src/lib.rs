//! Pure tic-tac-toe game logic.
//!
//! - [`Game`] owns one session: board, turn, and status.
//! - [`rules`] evaluates any board for a win or draw.
//! - [`ai`] picks the computer's move for a given [`Difficulty`].
//!
//! ```
//! use neon_tictactoe_core::{Game, Mark, MoveOutcome, WinPattern};
//!
//! let mut game = Game::new();
//! for (index, mark) in [(0, Mark::X), (4, Mark::O), (1, Mark::X), (3, Mark::O)] {
//!     game.apply_move(index, mark).unwrap();
//! }
//! let outcome = game.apply_move(2, Mark::X).unwrap();
//! assert_eq!(
//!     outcome,
//!     MoveOutcome::Won { mark: Mark::X, pattern: WinPattern::TopRow }
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod ai;
mod game;
mod position;
pub mod rules;
mod types;

pub use ai::{Difficulty, select_ai_move};
pub use game::{Game, GameStatus, MoveError};
pub use position::Position;
pub use rules::{MoveOutcome, WinLine, WinPattern, check_draw, check_win, evaluate};
pub use types::{Board, Mark, Square};

//! Game session for tic-tac-toe.

use crate::rules::{MoveOutcome, evaluate};
use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Drawn,
}

/// Reason a move was rejected. The game is never changed by a rejected move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    InvalidIndex(usize),

    /// The square is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The mark is not the one due to move.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Mark),
}

impl std::error::Error for MoveError {}

/// A single game of tic-tac-toe.
///
/// Owns the board, whose turn it is, and whether play is still possible.
/// All mutation goes through [`Game::apply_move`] and [`Game::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Mark,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark due to move.
    ///
    /// After a win this is still the winner's mark.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Returns the positions played, in order.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places `mark` at board `index` (0-8).
    ///
    /// # Errors
    ///
    /// Rejects out-of-range indices, occupied squares, moves after the game
    /// ended, and marks that are not due to move. Nothing changes on error.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::InvalidIndex(index))?;

        if !self.is_active() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        if mark != self.turn {
            return Err(MoveError::WrongTurn(mark));
        }

        self.board.set(pos, Square::Occupied(mark));
        self.history.push(pos);

        let outcome = evaluate(&self.board, mark);
        match outcome {
            MoveOutcome::Continue { next } => self.turn = next,
            MoveOutcome::Won { mark, pattern } => {
                info!(%mark, %pattern, "Game won");
                self.status = GameStatus::Won(mark);
            }
            MoveOutcome::Draw => {
                info!("Game drawn");
                self.status = GameStatus::Drawn;
            }
        }

        debug!(position = %pos, ?outcome, "Move applied");
        Ok(outcome)
    }

    /// Plays `pos` for whichever mark is due to move.
    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        self.apply_move(pos.index(), self.turn)
    }

    /// Replays a sequence of positions from a fresh game.
    pub fn replay(positions: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in positions {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Clears the board, gives X the move, and reactivates the game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        self.board.clear();
        self.turn = Mark::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::Board;
use tracing::instrument;

/// Checks for a draw: the board is full and nobody has a line.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full() && check_win(board).is_none()
}

//! Heuristic AI opponent.
//!
//! One-ply pattern checks, not a search: complete a line, block a line,
//! take the centre, take a corner, take anything.

use crate::rules::WinPattern;
use crate::{Board, Mark, Position, Square};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// AI move-selection policy tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty square.
    Easy,
    /// Coin flip per move between `Hard` and `Easy`.
    #[default]
    Medium,
    /// Priority heuristic.
    Hard,
}

/// Picks the AI's next move.
///
/// Returns `None` only when the board has no empty square.
#[instrument(skip(board, rng))]
pub fn select_ai_move<R: Rng + ?Sized>(
    board: &Board,
    ai_mark: Mark,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Hard => heuristic_move(board, ai_mark, rng),
        Difficulty::Medium => {
            if rng.random_bool(0.5) {
                debug!("Medium: using heuristic");
                heuristic_move(board, ai_mark, rng)
            } else {
                debug!("Medium: using random");
                random_move(board, rng)
            }
        }
    }
}

/// Uniformly random empty square.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// Priority heuristic used by [`Difficulty::Hard`].
#[instrument(skip(board, rng))]
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    ai_mark: Mark,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = completing_square(board, ai_mark) {
        debug!(position = %pos, "Completing own line");
        return Some(pos);
    }

    if let Some(pos) = completing_square(board, ai_mark.opponent()) {
        debug!(position = %pos, "Blocking opponent");
        return Some(pos);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Some(Position::Center);
    }

    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        debug!(position = %pos, "Taking corner");
        return Some(*pos);
    }

    random_move(board, rng)
}

/// Finds the empty square that would complete a line for `mark`.
///
/// Only lines with exactly two of `mark` and one empty square count. The
/// first such line in [`WinPattern::ALL`] order wins.
pub fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    WinPattern::ALL.into_iter().find_map(|pattern| {
        let cells = pattern.cells();
        let owned = cells
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let mut empty = cells.iter().filter(|pos| board.is_empty(**pos));

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(*pos),
            _ => None,
        }
    })
}

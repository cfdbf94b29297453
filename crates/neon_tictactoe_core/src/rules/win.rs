//! Win detection logic for tic-tac-toe.

use crate::{Board, Mark, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the eight lines that wins the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum WinPattern {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    CenterColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    MainDiagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl WinPattern {
    /// All patterns: rows, then columns, then diagonals.
    pub const ALL: [WinPattern; 8] = [
        WinPattern::TopRow,
        WinPattern::MiddleRow,
        WinPattern::BottomRow,
        WinPattern::LeftColumn,
        WinPattern::CenterColumn,
        WinPattern::RightColumn,
        WinPattern::MainDiagonal,
        WinPattern::AntiDiagonal,
    ];

    /// The three positions on this line, in ascending index order.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;
        match self {
            WinPattern::TopRow => [TopLeft, TopCenter, TopRight],
            WinPattern::MiddleRow => [MiddleLeft, Center, MiddleRight],
            WinPattern::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            WinPattern::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            WinPattern::CenterColumn => [TopCenter, Center, BottomCenter],
            WinPattern::RightColumn => [TopRight, MiddleRight, BottomRight],
            WinPattern::MainDiagonal => [TopLeft, Center, BottomRight],
            WinPattern::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// The three board indices on this line.
    pub fn indices(self) -> [usize; 3] {
        self.cells().map(Position::index)
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            WinPattern::TopRow => "top row",
            WinPattern::MiddleRow => "middle row",
            WinPattern::BottomRow => "bottom row",
            WinPattern::LeftColumn => "left column",
            WinPattern::CenterColumn => "center column",
            WinPattern::RightColumn => "right column",
            WinPattern::MainDiagonal => "main diagonal",
            WinPattern::AntiDiagonal => "anti-diagonal",
        }
    }
}

impl std::fmt::Display for WinPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "{} ({}, {}, {})", self.label(), a, b, c)
    }
}

/// A completed line: who completed it and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning mark.
    pub mark: Mark,
    /// The completed pattern.
    pub pattern: WinPattern,
}

/// Checks if there is a winner on the board.
///
/// Returns the first completed pattern in [`WinPattern::ALL`] order.
#[instrument(skip(board))]
pub fn check_win(board: &Board) -> Option<WinLine> {
    WinPattern::ALL.into_iter().find_map(|pattern| {
        let [a, b, c] = pattern.cells();
        match board.get(a) {
            Square::Occupied(mark) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some(WinLine { mark, pattern })
            }
            _ => None,
        }
    })
}

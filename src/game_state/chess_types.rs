//! Core value types shared by every part of the rule engine.
//!
//! Colors and piece kinds are closed tags; `Position` is a plain coordinate
//! pair that may temporarily hold an off-board value while move generators
//! probe neighbouring squares. Only validated positions ever reach the board.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::utils::algebraic::position_to_algebraic;

/// Board edge length.
pub const BOARD_SIZE: i8 = 8;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this side's king and rooks at the start of a game.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Row delta of a single pawn push.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Far rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Kinds a pawn may turn into on the far rank.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "King",
            PieceKind::Queen => "Queen",
            PieceKind::Rook => "Rook",
            PieceKind::Bishop => "Bishop",
            PieceKind::Knight => "Knight",
            PieceKind::Pawn => "Pawn",
        };
        f.write_str(name)
    }
}

/// Board coordinate. Row 0 is White's back rank, column 0 is the a-file, so
/// `e2` is `Position { row: 1, col: 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Builds a position without validation; call `is_valid` before use.
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn try_new(row: i8, col: i8) -> ChessResult<Self> {
        let pos = Self::new(row, col);
        if pos.is_valid() {
            Ok(pos)
        } else {
            Err(ChessErrors::InvalidSquare(pos))
        }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Steps by the given deltas. The result may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// All 64 squares, a1 first, row by row.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match position_to_algebraic(*self) {
            Ok(text) => f.write_str(&text),
            Err(_) => write!(f, "({},{})", self.row, self.col),
        }
    }
}

//! Piece value stored in the board grid.
//!
//! A piece knows its owner, kind, square and whether it has moved. It never
//! holds a reference to the board; move generation receives the board as an
//! argument instead.

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_generator::filter_legal;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub position: Position,
    pub has_moved: bool,
}

impl Piece {
    /// Fresh, unmoved piece.
    #[inline]
    pub const fn new(color: Color, kind: PieceKind, position: Position) -> Self {
        Self {
            color,
            kind,
            position,
            has_moved: false,
        }
    }

    /// Destination squares that obey this piece's movement pattern and board
    /// occupancy, ignoring whether the mover's king is left in check.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Position> {
        let mut out = Vec::with_capacity(28);
        match self.kind {
            PieceKind::King => generate_king_moves(board, self, &mut out),
            PieceKind::Queen => generate_queen_moves(board, self, &mut out),
            PieceKind::Rook => generate_rook_moves(board, self, &mut out),
            PieceKind::Bishop => generate_bishop_moves(board, self, &mut out),
            PieceKind::Knight => generate_knight_moves(board, self, &mut out),
            PieceKind::Pawn => generate_pawn_moves(board, self, &mut out),
        }
        out
    }

    /// Pseudo-legal destinations that do not leave the own king in check.
    pub fn legal_moves(&self, board: &Board) -> Vec<Position> {
        filter_legal(board, self, self.pseudo_legal_moves(board))
    }
}

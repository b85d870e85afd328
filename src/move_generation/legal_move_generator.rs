//! Legal move filtering.
//!
//! Pseudo-legal destinations from the per-piece generators are replayed on a
//! scratch copy of the board; any destination that leaves the mover's own king
//! attacked is dropped. The caller's board is only ever borrowed immutably.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_king_in_check;

/// A legal move in coordinate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub from: Position,
    pub to: Position,
}

/// Simulates `piece` moving to `to` and reports whether its own king would be
/// in check afterwards.
pub fn would_cause_self_check(board: &Board, piece: &Piece, to: Position) -> bool {
    let mut scratch = board.clone();
    // Promotion choice cannot affect the mover's own king safety.
    if scratch.apply(piece.position, to, PieceKind::Queen).is_err() {
        return true;
    }
    is_king_in_check(&scratch, piece.color)
}

pub fn filter_legal(board: &Board, piece: &Piece, pseudo: Vec<Position>) -> Vec<Position> {
    pseudo
        .into_iter()
        .filter(|&to| !would_cause_self_check(board, piece, to))
        .collect()
}

/// Every legal move for `color`, grouped by origin square in board order.
pub fn generate_legal_moves(board: &Board, color: Color) -> Vec<LegalMove> {
    let mut out = Vec::with_capacity(64);
    for piece in board.pieces(color) {
        for to in piece.legal_moves(board) {
            out.push(LegalMove {
                from: piece.position,
                to,
            });
        }
    }
    out
}

/// Short-circuits on the first legal move found.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board.pieces(color).any(|piece| {
        piece
            .pseudo_legal_moves(board)
            .into_iter()
            .any(|to| !would_cause_self_check(board, &piece, to))
    })
}

//! Rook move generation: the four orthogonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{trace_ray, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        trace_ray(board, piece, d_row, d_col, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::piece::Piece;

    #[test]
    fn rook_on_empty_board_has_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = Position::new(3, 3);
        board
            .place(Piece::new(Color::White, PieceKind::Rook, d4))
            .expect("d4 should be free");
        let rook = board.piece_at(d4).expect("rook should be placed");

        let mut out = Vec::new();
        generate_rook_moves(&board, &rook, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray() {
        let mut board = Board::empty();
        let a1 = Position::new(0, 0);
        let a4 = Position::new(3, 0);
        let b1 = Position::new(0, 1);
        board
            .place(Piece::new(Color::White, PieceKind::Rook, a1))
            .expect("a1 should be free");
        board
            .place(Piece::new(Color::Black, PieceKind::Knight, a4))
            .expect("a4 should be free");
        board
            .place(Piece::new(Color::White, PieceKind::Bishop, b1))
            .expect("b1 should be free");
        let rook = board.piece_at(a1).expect("rook should be placed");

        let mut out = Vec::new();
        generate_rook_moves(&board, &rook, &mut out);

        // Enemy blocker is a capture, nothing beyond it, friendly blocker excluded.
        assert!(out.contains(&a4));
        assert!(!out.contains(&Position::new(4, 0)));
        assert!(!out.contains(&b1));
        assert_eq!(out.len(), 3);
    }
}

//! Bishop move generation: the four diagonal rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{trace_ray, BISHOP_DIRECTIONS};

pub fn generate_bishop_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    for (d_row, d_col) in BISHOP_DIRECTIONS {
        trace_ray(board, piece, d_row, d_col, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_bishop_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::piece::Piece;

    #[test]
    fn bishop_in_corner_sees_long_diagonal() {
        let mut board = Board::empty();
        let a1 = Position::new(0, 0);
        board
            .place(Piece::new(Color::Black, PieceKind::Bishop, a1))
            .expect("a1 should be free");
        let bishop = board.piece_at(a1).expect("bishop should be placed");

        let mut out = Vec::new();
        generate_bishop_moves(&board, &bishop, &mut out);
        assert_eq!(out.len(), 7);
        assert!(out.contains(&Position::new(7, 7)));
    }

    #[test]
    fn bishop_ray_ends_on_enemy_piece() {
        let mut board = Board::empty();
        let c1 = Position::new(0, 2);
        let e3 = Position::new(2, 4);
        board
            .place(Piece::new(Color::White, PieceKind::Bishop, c1))
            .expect("c1 should be free");
        board
            .place(Piece::new(Color::Black, PieceKind::Pawn, e3))
            .expect("e3 should be free");
        let bishop = board.piece_at(c1).expect("bishop should be placed");

        let mut out = Vec::new();
        generate_bishop_moves(&board, &bishop, &mut out);
        assert!(out.contains(&e3));
        assert!(!out.contains(&Position::new(3, 5)));
    }
}

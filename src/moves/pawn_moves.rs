//! Pawn move generation.
//!
//! Single push onto an empty square, double push from the start row through
//! two empty squares, diagonal captures of enemy pieces, and en passant onto
//! the square skipped by the opponent's double push on the previous move.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::piece::Piece;

pub fn generate_pawn_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    let dir = piece.color.pawn_direction();
    let from = piece.position;

    let one_step = from.offset(dir, 0);
    if one_step.is_valid() && board.piece_at(one_step).is_none() {
        out.push(one_step);

        if from.row == piece.color.pawn_start_row() && !piece.has_moved {
            let two_step = from.offset(2 * dir, 0);
            if two_step.is_valid() && board.piece_at(two_step).is_none() {
                out.push(two_step);
            }
        }
    }

    for d_col in [-1i8, 1i8] {
        let to = from.offset(dir, d_col);
        if !to.is_valid() {
            continue;
        }

        match board.piece_at(to) {
            Some(target) if target.color != piece.color => out.push(to),
            Some(_) => {}
            None => {
                if is_en_passant_capture(board, piece, to) {
                    out.push(to);
                }
            }
        }
    }
}

/// True when `to` is the board's en passant target and the pawn that just
/// double-stepped sits beside the capturing pawn.
pub fn is_en_passant_capture(board: &Board, piece: &Piece, to: Position) -> bool {
    if piece.kind != PieceKind::Pawn || board.en_passant_target() != Some(to) {
        return false;
    }

    let victim_sq = Position::new(piece.position.row, to.col);
    matches!(
        board.piece_at(victim_sq),
        Some(victim) if victim.kind == PieceKind::Pawn && victim.color != piece.color
    )
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Position;
    use crate::utils::fen_parser::parse_fen;

    fn pawn_moves(board: &Board, sq: Position) -> Vec<Position> {
        let pawn = board.piece_at(sq).expect("pawn should be on its square");
        let mut out = Vec::new();
        generate_pawn_moves(board, &pawn, &mut out);
        out
    }

    #[test]
    fn starting_pawn_has_single_and_double_push() {
        let board = Board::standard();
        let moves = pawn_moves(&board, Position::new(1, 4));
        assert_eq!(moves, vec![Position::new(2, 4), Position::new(3, 4)]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes() {
        let board = parse_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;
        assert!(pawn_moves(&board, Position::new(1, 4)).is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let board = parse_fen("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;
        assert_eq!(pawn_moves(&board, Position::new(1, 4)), vec![Position::new(2, 4)]);
    }

    #[test]
    fn diagonal_only_for_enemy_pieces() {
        let board = parse_fen("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;
        let moves = pawn_moves(&board, Position::new(1, 4));
        assert!(moves.contains(&Position::new(2, 3)));
        assert!(!moves.contains(&Position::new(2, 5)));
    }

    #[test]
    fn black_pawn_moves_down_the_board() {
        let board = Board::standard();
        let moves = pawn_moves(&board, Position::new(6, 0));
        assert_eq!(moves, vec![Position::new(5, 0), Position::new(4, 0)]);
    }

    #[test]
    fn en_passant_offered_only_onto_target_square() {
        let board = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1")
            .expect("FEN should parse")
            .board;
        let moves = pawn_moves(&board, Position::new(4, 4));
        assert!(moves.contains(&Position::new(5, 3)));
        assert!(!moves.contains(&Position::new(5, 5)));

        let without_target = parse_fen("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse")
            .board;
        let moves = pawn_moves(&without_target, Position::new(4, 4));
        assert!(!moves.contains(&Position::new(5, 3)));
    }
}

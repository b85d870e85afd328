//! King move generation.
//!
//! Emits the eight single steps plus the castling destinations. Castling is
//! offered only when the king and the wing's rook are both unmoved on their
//! home squares, every square between them is empty, and none of the squares
//! the king starts on, crosses or lands on is attacked.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{CastlingWing, CASTLING_WINGS, KING_START_COL};
use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::{push_step, KING_STEPS};

pub fn generate_king_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    for (d_row, d_col) in KING_STEPS {
        push_step(board, piece, piece.position.offset(d_row, d_col), out);
    }

    generate_castling_moves(board, piece, out);
}

fn generate_castling_moves(board: &Board, king: &Piece, out: &mut Vec<Position>) {
    let home_row = king.color.home_row();
    if king.has_moved || king.position != Position::new(home_row, KING_START_COL) {
        return;
    }

    for wing in CASTLING_WINGS {
        if can_castle(board, king, &wing) {
            out.push(Position::new(home_row, wing.king_to_col));
        }
    }
}

fn can_castle(board: &Board, king: &Piece, wing: &CastlingWing) -> bool {
    let home_row = king.color.home_row();
    let enemy = king.color.opposite();

    let rook_unmoved = matches!(
        board.piece_at(Position::new(home_row, wing.rook_from_col)),
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved
    );
    if !rook_unmoved {
        return false;
    }

    let path_clear = wing
        .empty_cols
        .iter()
        .all(|&col| board.piece_at(Position::new(home_row, col)).is_none());
    if !path_clear {
        return false;
    }

    wing.safe_cols
        .iter()
        .all(|&col| !is_square_attacked(board, Position::new(home_row, col), enemy))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::Position;
    use crate::utils::fen_parser::parse_fen;

    fn king_moves(fen: &str, king_sq: Position) -> Vec<Position> {
        let board = parse_fen(fen).expect("FEN should parse").board;
        let king = board.piece_at(king_sq).expect("king should be on its square");
        let mut out = Vec::new();
        generate_king_moves(&board, &king, &mut out);
        out
    }

    const E1: Position = Position::new(0, 4);
    const G1: Position = Position::new(0, 6);
    const C1: Position = Position::new(0, 2);

    #[test]
    fn king_in_corner_has_three_steps() {
        let moves = king_moves("7k/8/8/8/8/8/8/K7 w - - 0 1", Position::new(0, 0));
        assert_eq!(moves.len(), 3);
    }

    #[test]
    fn castling_offered_on_both_wings_when_all_conditions_hold() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", E1);
        assert!(moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn castling_requires_unmoved_rook() {
        // Without the K right the h1 rook counts as moved.
        let moves = king_moves("r3k2r/8/8/8/8/8/8/R3K2R w Qkq - 0 1", E1);
        assert!(!moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn castling_requires_empty_path() {
        let moves = king_moves("r3k2r/8/8/8/8/8/8/RN2K1NR w KQkq - 0 1", E1);
        assert!(!moves.contains(&G1));
        assert!(!moves.contains(&C1));
    }

    #[test]
    fn castling_blocked_when_transit_square_attacked() {
        // Black rook on f8 covers f1.
        let moves = king_moves("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", E1);
        assert!(!moves.contains(&G1));
        assert!(moves.contains(&C1));
    }

    #[test]
    fn castling_blocked_out_of_check() {
        let moves = king_moves("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", E1);
        assert!(!moves.contains(&G1));
        assert!(!moves.contains(&C1));
    }

    #[test]
    fn queenside_allows_attacked_b_file_square() {
        // b1 only needs to be empty, not safe.
        let moves = king_moves("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", E1);
        assert!(moves.contains(&C1));
    }
}

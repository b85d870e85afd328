//! Attack detection.
//!
//! Looks outward from the target square for each attacker pattern instead of
//! generating every enemy move, so king move generation can ask about
//! castling squares without recursing into itself. A square counts as
//! attacked whether it is empty or occupied; pawns attack their two forward
//! diagonals only.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::move_generation::legal_move_shared::{
    first_blocker, BISHOP_DIRECTIONS, KING_STEPS, KNIGHT_JUMPS, ROOK_DIRECTIONS,
};

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.king_position(color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

pub fn is_square_attacked(board: &Board, square: Position, attacker_color: Color) -> bool {
    !attackers_to_square(board, square, attacker_color, true).is_empty()
}

/// Every attacker of `square` with its kind. With `first_only` the scan stops
/// at the first hit.
pub fn attackers_to_square(
    board: &Board,
    square: Position,
    attacker_color: Color,
    first_only: bool,
) -> Vec<(Position, PieceKind)> {
    let mut attackers = Vec::<(Position, PieceKind)>::new();
    if !square.is_valid() {
        return attackers;
    }

    let is_attacker = |sq: Position, kinds: &[PieceKind]| {
        matches!(
            board.piece_at(sq),
            Some(p) if p.color == attacker_color && kinds.contains(&p.kind)
        )
    };

    // An attacking pawn stands one row behind the square from its own view.
    let pawn_row = -attacker_color.pawn_direction();
    for d_col in [-1i8, 1i8] {
        let from = square.offset(pawn_row, d_col);
        if is_attacker(from, &[PieceKind::Pawn]) {
            attackers.push((from, PieceKind::Pawn));
            if first_only {
                return attackers;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_JUMPS {
        let from = square.offset(d_row, d_col);
        if is_attacker(from, &[PieceKind::Knight]) {
            attackers.push((from, PieceKind::Knight));
            if first_only {
                return attackers;
            }
        }
    }

    for (d_row, d_col) in KING_STEPS {
        let from = square.offset(d_row, d_col);
        if is_attacker(from, &[PieceKind::King]) {
            attackers.push((from, PieceKind::King));
            if first_only {
                return attackers;
            }
        }
    }

    let slider_groups: [(&[(i8, i8); 4], [PieceKind; 2]); 2] = [
        (&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen]),
        (&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen]),
    ];
    for (directions, kinds) in slider_groups {
        for &(d_row, d_col) in directions {
            if let Some(blocker) = first_blocker(board, square, d_row, d_col) {
                if blocker.color == attacker_color && kinds.contains(&blocker.kind) {
                    attackers.push((blocker.position, blocker.kind));
                    if first_only {
                        return attackers;
                    }
                }
            }
        }
    }

    attackers
}

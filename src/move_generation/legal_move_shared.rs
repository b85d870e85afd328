use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::piece::Piece;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

/// Pushes a single-step destination unless it is off the board or holds a
/// piece of the mover's color.
#[inline]
pub fn push_step(board: &Board, piece: &Piece, to: Position, out: &mut Vec<Position>) {
    if !to.is_valid() {
        return;
    }
    match board.piece_at(to) {
        Some(occupant) if occupant.color == piece.color => {}
        _ => out.push(to),
    }
}

/// Walks one ray from the piece's square. Stops before a friendly blocker and
/// on (including) an enemy blocker.
pub fn trace_ray(board: &Board, piece: &Piece, d_row: i8, d_col: i8, out: &mut Vec<Position>) {
    let mut to = piece.position.offset(d_row, d_col);
    while to.is_valid() {
        match board.piece_at(to) {
            None => out.push(to),
            Some(occupant) => {
                if occupant.color != piece.color {
                    out.push(to);
                }
                break;
            }
        }
        to = to.offset(d_row, d_col);
    }
}

/// Walks one ray from `from` and returns the first occupied square, if any.
pub fn first_blocker(board: &Board, from: Position, d_row: i8, d_col: i8) -> Option<Piece> {
    let mut sq = from.offset(d_row, d_col);
    while sq.is_valid() {
        if let Some(occupant) = board.piece_at(sq) {
            return Some(occupant);
        }
        sq = sq.offset(d_row, d_col);
    }
    None
}

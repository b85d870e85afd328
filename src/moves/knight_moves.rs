use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_shared::{push_step, KNIGHT_JUMPS};

pub fn generate_knight_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    for (d_row, d_col) in KNIGHT_JUMPS {
        push_step(board, piece, piece.position.offset(d_row, d_col), out);
    }
}

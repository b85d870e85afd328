//! Queen move generation: union of rook and bishop rays.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Position;
use crate::game_state::piece::Piece;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::rook_moves::generate_rook_moves;

pub fn generate_queen_moves(board: &Board, piece: &Piece, out: &mut Vec<Position>) {
    generate_rook_moves(board, piece, out);
    generate_bishop_moves(board, piece, out);
}

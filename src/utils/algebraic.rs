//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board
//! positions. Parsing player input is the caller's job; these helpers exist
//! for FEN handling, move text and tests.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_types::Position;

/// Convert algebraic notation (for example: "e4") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> ChessResult<Position> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessErrors::InvalidAlgebraic(square.to_owned()));
    }

    Ok(Position::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert a position to algebraic notation (for example: "e4").
#[inline]
pub fn position_to_algebraic(pos: Position) -> ChessResult<String> {
    if !pos.is_valid() {
        return Err(ChessErrors::InvalidSquare(pos));
    }

    let file_char = char::from(b'a' + pos.col as u8);
    let rank_char = char::from(b'1' + pos.row as u8);

    Ok(format!("{file_char}{rank_char}"))
}

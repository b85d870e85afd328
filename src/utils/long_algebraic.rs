//! Long algebraic move text (`e2e4`, `e7e8q`).
//!
//! Rendering lives on `ChessMove`'s `Display`; this module parses move text
//! into coordinates and joins a move history into one line.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{PieceKind, Position};
use crate::utils::algebraic::algebraic_to_position;

/// Coordinates parsed from long algebraic text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveText {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

pub fn parse_long_algebraic(text: &str) -> ChessResult<MoveText> {
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(ChessErrors::InvalidAlgebraic(text.to_owned()));
    }

    let from = algebraic_to_position(&text[0..2])?;
    let to = algebraic_to_position(&text[2..4])?;
    let promotion = match text.as_bytes().get(4) {
        Some(&ch) => Some(char_to_promotion(ch as char)?),
        None => None,
    };

    Ok(MoveText {
        from,
        to,
        promotion,
    })
}

/// Space-separated long algebraic history.
pub fn history_to_long_algebraic(history: &[ChessMove]) -> String {
    history
        .iter()
        .map(ChessMove::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn char_to_promotion(ch: char) -> ChessResult<PieceKind> {
    match ch.to_ascii_lowercase() {
        'n' => Ok(PieceKind::Knight),
        'b' => Ok(PieceKind::Bishop),
        'r' => Ok(PieceKind::Rook),
        'q' => Ok(PieceKind::Queen),
        _ => Err(ChessErrors::InvalidAlgebraic(format!(
            "invalid promotion piece character: {ch}"
        ))),
    }
}

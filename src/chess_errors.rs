//! Errors used throughout the rule engine.
//!
//! `ChessErrors` is the single error type across the crate. Every variant is a
//! local, recoverable rejection: no operation that returns one of these leaves
//! the board, the game status or the move history changed.
//!
//! Usage guidelines:
//! - Move-entry rejections (`WrongTurn`, `NoPieceAtSquare`,
//!   `IllegalDestination`, `GameAlreadyOver`) are expected during play and are
//!   meant to be shown to the player.
//! - Setup failures (`InvalidFen`, `InvalidPosition`, `SquareOccupied`) come
//!   from building boards by hand or from FEN and indicate bad input.

use thiserror::Error;

use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game::GameStatus;

pub type ChessResult<T> = Result<T, ChessErrors>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// Coordinates outside the 8x8 board.
    #[error("square {0} is off the board")]
    InvalidSquare(Position),

    #[error("no piece on {0}")]
    NoPieceAtSquare(Position),

    /// The piece on the origin square belongs to the side not on move.
    #[error("it is {side_to_move}'s turn, but the piece on {square} is {piece_color}")]
    WrongTurn {
        square: Position,
        side_to_move: Color,
        piece_color: Color,
    },

    #[error("{from} to {to} is not a legal move")]
    IllegalDestination { from: Position, to: Position },

    /// The game already reached a terminal status.
    #[error("game is over: {0}")]
    GameAlreadyOver(GameStatus),

    /// Pawns promote to Queen, Rook, Bishop or Knight only.
    #[error("pawns cannot promote to {0}")]
    InvalidPromotionPiece(PieceKind),

    #[error("square {0} is already occupied")]
    SquareOccupied(Position),

    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraic(String),

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A structurally valid setup that breaks a board invariant, such as a
    /// missing king or the side not on move standing in check.
    #[error("invalid position: {0}")]
    InvalidPosition(String),
}

#[cfg(test)]
mod tests {
    use super::ChessErrors;
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn wrong_turn_message_names_both_sides() {
        let err = ChessErrors::WrongTurn {
            square: Position::new(6, 4),
            side_to_move: Color::White,
            piece_color: Color::Black,
        };
        assert_eq!(
            err.to_string(),
            "it is White's turn, but the piece on e7 is Black"
        );
    }
}

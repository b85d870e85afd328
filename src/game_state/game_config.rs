//! Game setup options.
//!
//! A game starts from a FEN position (the standard layout by default) and
//! promotes pawns that reach the far rank to a configured piece unless the
//! caller picks one per move. Both can be overridden from the environment:
//!
//! - `PLUM_START_FEN`: starting position in FEN.
//! - `PLUM_PROMOTION_PIECE`: one of `q`, `r`, `b`, `n`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::PieceKind;

pub const START_FEN_ENV: &str = "PLUM_START_FEN";
pub const PROMOTION_PIECE_ENV: &str = "PLUM_PROMOTION_PIECE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_fen: String,
    pub promotion_piece: PieceKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_fen: STARTING_POSITION_FEN.to_owned(),
            promotion_piece: PieceKind::Queen,
        }
    }
}

impl GameConfig {
    pub fn with_starting_fen(mut self, fen: impl Into<String>) -> Self {
        self.starting_fen = fen.into();
        self
    }

    pub fn with_promotion_piece(mut self, kind: PieceKind) -> ChessResult<Self> {
        if !kind.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(kind));
        }
        self.promotion_piece = kind;
        Ok(self)
    }

    /// Defaults overridden by `PLUM_*` environment variables.
    pub fn from_env() -> ChessResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ChessResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(fen) = lookup(START_FEN_ENV) {
            config = config.with_starting_fen(fen.trim());
        }
        if let Some(piece) = lookup(PROMOTION_PIECE_ENV) {
            config = config.with_promotion_piece(parse_promotion_piece(piece.trim())?)?;
        }
        Ok(config)
    }
}

fn parse_promotion_piece(text: &str) -> ChessResult<PieceKind> {
    match text.to_ascii_lowercase().as_str() {
        "q" | "queen" => Ok(PieceKind::Queen),
        "r" | "rook" => Ok(PieceKind::Rook),
        "b" | "bishop" => Ok(PieceKind::Bishop),
        "n" | "knight" => Ok(PieceKind::Knight),
        "k" | "king" => Err(ChessErrors::InvalidPromotionPiece(PieceKind::King)),
        "p" | "pawn" => Err(ChessErrors::InvalidPromotionPiece(PieceKind::Pawn)),
        _ => Err(ChessErrors::InvalidAlgebraic(format!(
            "unknown promotion piece: {text}"
        ))),
    }
}

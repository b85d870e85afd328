//! Canonical chess-rule constants.
//!
//! Holds the standard starting position and the fixed castling geometry shared
//! by king move generation and board execution.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Column of both kings in the starting position.
pub const KING_START_COL: i8 = 4;

/// Column geometry for one castling wing, valid for either color's home row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingWing {
    pub king_to_col: i8,
    pub rook_from_col: i8,
    pub rook_to_col: i8,
    /// Squares between king and rook that must be empty.
    pub empty_cols: &'static [i8],
    /// Squares the king starts on, crosses and lands on; none may be attacked.
    pub safe_cols: &'static [i8],
}

pub const KINGSIDE: CastlingWing = CastlingWing {
    king_to_col: 6,
    rook_from_col: 7,
    rook_to_col: 5,
    empty_cols: &[5, 6],
    safe_cols: &[4, 5, 6],
};

pub const QUEENSIDE: CastlingWing = CastlingWing {
    king_to_col: 2,
    rook_from_col: 0,
    rook_to_col: 3,
    empty_cols: &[1, 2, 3],
    safe_cols: &[4, 3, 2],
};

pub const CASTLING_WINGS: [CastlingWing; 2] = [KINGSIDE, QUEENSIDE];

/// Wing whose king destination is `king_to_col`.
#[inline]
pub fn castling_wing_for(king_to_col: i8) -> Option<CastlingWing> {
    CASTLING_WINGS
        .into_iter()
        .find(|wing| wing.king_to_col == king_to_col)
}

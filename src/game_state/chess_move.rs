//! Executed-move record.
//!
//! `ChessMove` is produced by `Board::execute` and consumed by the game
//! history. It snapshots the mover as it stood before the move and the
//! captured piece (if any), so history can be replayed or exported without
//! reading the board again.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::chess_types::{PieceKind, Position};
use crate::game_state::piece::Piece;

/// Special side effects of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    Castle {
        rook_from: Position,
        rook_to: Position,
    },
    /// The captured pawn stood beside the mover, not on the destination.
    EnPassant { captured_at: Position },
    Promotion { promoted_to: PieceKind },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessMove {
    pub from: Position,
    pub to: Position,
    /// Mover before the move; a promoting pawn is still a pawn here.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
    /// The opponent's king is attacked after the move.
    pub gives_check: bool,
}

impl ChessMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(self.kind, MoveKind::Castle { .. })
    }

    #[inline]
    pub fn promotion(&self) -> Option<PieceKind> {
        match self.kind {
            MoveKind::Promotion { promoted_to } => Some(promoted_to),
            _ => None,
        }
    }
}

impl fmt::Display for ChessMove {
    /// Long algebraic form, e.g. `e2e4` or `e7e8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion() {
            write!(f, "{}", promotion_char(kind))?;
        }
        Ok(())
    }
}

pub(crate) fn promotion_char(kind: PieceKind) -> char {
    match kind {
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::King => 'k',
        PieceKind::Pawn => 'p',
        PieceKind::Queen => 'q',
    }
}

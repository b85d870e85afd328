//! Board state: the 8x8 grid of piece slots.
//!
//! The grid is the single source of truth for occupancy. Each color also keeps
//! a list of occupied squares so callers can iterate one side's pieces without
//! scanning all 64 squares; the lists are updated alongside every grid write
//! and never consulted for occupancy.
//!
//! `execute` is a mechanical state transition. It applies castling, en passant
//! and promotion side effects but does not check legality; `Game` filters
//! moves through `Piece::legal_moves` before calling it.

use tracing::trace;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_move::{ChessMove, MoveKind};
use crate::game_state::chess_rules::castling_wing_for;
use crate::game_state::chess_types::{Color, PieceKind, Position, BOARD_SIZE};
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_generator::would_cause_self_check;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    // [row][col]
    squares: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    piece_index: [Vec<Position>; 2],
    // Square skipped by a double pawn push on the previous move.
    en_passant_target: Option<Position>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            piece_index: [Vec::with_capacity(16), Vec::with_capacity(16)],
            en_passant_target: None,
        }
    }

    /// Standard 32-piece starting layout.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in (0..BOARD_SIZE).zip(BACK_RANK) {
                board.put(Piece::new(color, kind, Position::new(home, col)));
                board.put(Piece::new(color, PieceKind::Pawn, Position::new(pawns, col)));
            }
        }
        board
    }

    /// Board part of a FEN string; side to move and counters are discarded.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen).map(|position| position.board)
    }

    #[inline]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.squares[pos.row as usize][pos.col as usize]
    }

    /// Live pieces of one color.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.piece_index[color.index()]
            .iter()
            .filter_map(move |&pos| self.piece_at(pos))
    }

    pub fn king_position(&self, color: Color) -> Option<Position> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Position> {
        self.en_passant_target
    }

    /// Only valid when the square behind `target` holds the pawn that just
    /// double-stepped; used by FEN import.
    pub(crate) fn set_en_passant_target(&mut self, target: Option<Position>) {
        self.en_passant_target = target.filter(|pos| pos.is_valid());
    }

    /// Adds a piece during setup.
    pub fn place(&mut self, piece: Piece) -> ChessResult<()> {
        if !piece.position.is_valid() {
            return Err(ChessErrors::InvalidSquare(piece.position));
        }
        if self.piece_at(piece.position).is_some() {
            return Err(ChessErrors::SquareOccupied(piece.position));
        }
        self.put(piece);
        Ok(())
    }

    /// Exactly one king per color.
    pub fn validate_kings(&self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces(color)
                .filter(|p| p.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessErrors::InvalidPosition(format!(
                    "{color} has {kings} kings, expected exactly one"
                )));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn is_square_attacked(&self, pos: Position, by_color: Color) -> bool {
        is_square_attacked(self, pos, by_color)
    }

    #[inline]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Whether moving `piece` to `to` would leave its own king attacked. The
    /// simulation runs on a scratch copy, so `self` is never modified.
    #[inline]
    pub fn would_cause_self_check(&self, piece: &Piece, to: Position) -> bool {
        would_cause_self_check(self, piece, to)
    }

    /// Moves the piece on `from` to `to`, auto-promoting pawns to a Queen.
    pub fn execute(&mut self, from: Position, to: Position) -> ChessResult<ChessMove> {
        self.execute_with_promotion(from, to, PieceKind::Queen)
    }

    /// As `execute`, with the piece a promoting pawn turns into.
    pub fn execute_with_promotion(
        &mut self,
        from: Position,
        to: Position,
        promotion: PieceKind,
    ) -> ChessResult<ChessMove> {
        if !promotion.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(promotion));
        }
        let mut chess_move = self.apply(from, to, promotion)?;
        chess_move.gives_check = self.is_king_in_check(chess_move.piece.color.opposite());
        trace!(
            mv = %chess_move,
            kind = ?chess_move.kind,
            gives_check = chess_move.gives_check,
            "board executed move"
        );
        Ok(chess_move)
    }

    /// Mechanical move application without the check annotation. Every
    /// validation happens before the first write, so an error leaves the board
    /// untouched.
    pub(crate) fn apply(
        &mut self,
        from: Position,
        to: Position,
        promotion: PieceKind,
    ) -> ChessResult<ChessMove> {
        if !from.is_valid() {
            return Err(ChessErrors::InvalidSquare(from));
        }
        if !to.is_valid() {
            return Err(ChessErrors::InvalidSquare(to));
        }
        let mover = self.piece_at(from).ok_or(ChessErrors::NoPieceAtSquare(from))?;
        let mut captured = self.piece_at(to);
        if matches!(captured, Some(occupant) if occupant.color == mover.color) {
            return Err(ChessErrors::SquareOccupied(to));
        }

        let mut kind = MoveKind::Normal;

        if mover.kind == PieceKind::Pawn
            && captured.is_none()
            && from.col != to.col
            && self.en_passant_target == Some(to)
        {
            let victim_sq = Position::new(from.row, to.col);
            if let Some(victim) = self.piece_at(victim_sq) {
                if victim.kind == PieceKind::Pawn && victim.color != mover.color {
                    self.take(victim_sq);
                    captured = Some(victim);
                    kind = MoveKind::EnPassant {
                        captured_at: victim_sq,
                    };
                }
            }
        }

        if captured.is_some() && kind == MoveKind::Normal {
            self.take(to);
        }

        let mut moved = mover;
        moved.position = to;
        moved.has_moved = true;

        if mover.kind == PieceKind::Pawn {
            if to.row == mover.color.promotion_row() {
                moved.kind = promotion;
                kind = MoveKind::Promotion {
                    promoted_to: promotion,
                };
            } else if (to.row - from.row).abs() == 2 {
                kind = MoveKind::DoublePawnPush;
            }
        }
        self.relocate(from, moved);

        if mover.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            if let Some(wing) = castling_wing_for(to.col) {
                let rook_from = Position::new(from.row, wing.rook_from_col);
                let rook_to = Position::new(from.row, wing.rook_to_col);
                if let Some(mut rook) = self.piece_at(rook_from) {
                    rook.position = rook_to;
                    rook.has_moved = true;
                    self.relocate(rook_from, rook);
                    kind = MoveKind::Castle { rook_from, rook_to };
                }
            }
        }

        self.en_passant_target = match kind {
            MoveKind::DoublePawnPush => {
                Some(from.offset(mover.color.pawn_direction(), 0))
            }
            _ => None,
        };

        Ok(ChessMove {
            from,
            to,
            piece: mover,
            captured,
            kind,
            gives_check: false,
        })
    }

    /// Unchecked grid write for setup paths that already know the square is
    /// valid and free.
    pub(crate) fn put(&mut self, piece: Piece) {
        let pos = piece.position;
        self.squares[pos.row as usize][pos.col as usize] = Some(piece);
        self.piece_index[piece.color.index()].push(pos);
    }

    fn take(&mut self, pos: Position) -> Option<Piece> {
        let piece = self.squares[pos.row as usize][pos.col as usize].take()?;
        self.piece_index[piece.color.index()].retain(|&p| p != pos);
        Some(piece)
    }

    /// Moves a piece already carrying its new position off `from`, keeping
    /// its slot in the color index.
    fn relocate(&mut self, from: Position, piece: Piece) {
        let to = piece.position;
        self.squares[from.row as usize][from.col as usize] = None;
        self.squares[to.row as usize][to.col as usize] = Some(piece);
        if let Some(slot) = self.piece_index[piece.color.index()]
            .iter_mut()
            .find(|p| **p == from)
        {
            *slot = to;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

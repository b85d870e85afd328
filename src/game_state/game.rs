//! Game state machine.
//!
//! `Game` owns one board, whose turn it is and the append-only move history.
//! Every move request is validated against the mover's legal moves before the
//! board is touched, so a rejected request changes nothing. After each
//! accepted move the status is re-derived for the side now on move:
//!
//! - no legal move and in check: checkmate, the previous mover wins;
//! - no legal move and not in check: stalemate;
//! - only kings, or kings plus a single minor piece: draw;
//! - otherwise the game stays active.
//!
//! Checkmate, stalemate and draw are terminal and reject further moves.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_move::ChessMove;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game_config::GameConfig;
use crate::game_state::piece::Piece;
use crate::move_generation::legal_move_generator::{
    generate_legal_moves, has_any_legal_move, LegalMove,
};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Active,
    Checkmate { winner: Color },
    Stalemate,
    /// Neither side has enough material left to mate.
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Active)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Active => write!(f, "active"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::Draw => write!(f, "draw by insufficient material"),
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub chess_move: ChessMove,
    /// Status for the side now on move.
    pub status: GameStatus,
}

impl MoveOutcome {
    #[inline]
    pub fn mover(&self) -> Color {
        self.chess_move.piece.color
    }

    #[inline]
    pub fn captured(&self) -> Option<Piece> {
        self.chess_move.captured
    }

    /// Check that is not also mate.
    #[inline]
    pub fn is_check(&self) -> bool {
        self.chess_move.gives_check && !matches!(self.status, GameStatus::Checkmate { .. })
    }
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.mover(), self.chess_move)?;
        if let Some(captured) = self.captured() {
            write!(f, " captures {captured_kind}", captured_kind = captured.kind)?;
        }
        match self.status {
            GameStatus::Active if self.chess_move.gives_check => write!(f, ", check"),
            GameStatus::Active => Ok(()),
            status => write!(f, ", {status}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<ChessMove>,
    status: GameStatus,
    promotion_piece: PieceKind,
    fullmove_number: u16,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            side_to_move: Color::White,
            history: Vec::new(),
            status: GameStatus::Active,
            promotion_piece: PieceKind::Queen,
            fullmove_number: 1,
        }
    }

    pub fn with_config(config: &GameConfig) -> ChessResult<Self> {
        if !config.promotion_piece.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(config.promotion_piece));
        }
        let parsed = parse_fen(&config.starting_fen)?;
        let status = evaluate_status(&parsed.board, parsed.side_to_move);
        if status.is_terminal() {
            info!(%status, "game loaded in a terminal position");
        }
        Ok(Self {
            board: parsed.board,
            side_to_move: parsed.side_to_move,
            history: Vec::new(),
            status,
            promotion_piece: config.promotion_piece,
            fullmove_number: parsed.fullmove_number,
        })
    }

    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        Self::with_config(&GameConfig::default().with_starting_fen(fen))
    }

    /// Moves the piece on `from` to `to` for the side on move, promoting with
    /// the configured piece.
    pub fn make_move(&mut self, from: Position, to: Position) -> ChessResult<MoveOutcome> {
        self.make_move_with_promotion(from, to, self.promotion_piece)
    }

    /// As `make_move`, choosing what a promoting pawn becomes. `promotion` is
    /// ignored for moves that do not promote.
    pub fn make_move_with_promotion(
        &mut self,
        from: Position,
        to: Position,
        promotion: PieceKind,
    ) -> ChessResult<MoveOutcome> {
        self.validate_move(from, to, promotion)
            .inspect_err(|err| debug!(%from, %to, %err, "move rejected"))?;

        let chess_move = self.board.execute_with_promotion(from, to, promotion)?;
        self.history.push(chess_move);
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();
        self.status = evaluate_status(&self.board, self.side_to_move);

        debug!(
            mv = %chess_move,
            gives_check = chess_move.gives_check,
            ply = self.history.len(),
            "move accepted"
        );
        if self.status.is_terminal() {
            info!(status = %self.status, ply = self.history.len(), "game over");
        }

        Ok(MoveOutcome {
            chess_move,
            status: self.status,
        })
    }

    fn validate_move(&self, from: Position, to: Position, promotion: PieceKind) -> ChessResult<()> {
        if self.status.is_terminal() {
            return Err(ChessErrors::GameAlreadyOver(self.status));
        }
        if !promotion.is_promotion_target() {
            return Err(ChessErrors::InvalidPromotionPiece(promotion));
        }
        if !from.is_valid() {
            return Err(ChessErrors::InvalidSquare(from));
        }
        if !to.is_valid() {
            return Err(ChessErrors::InvalidSquare(to));
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(ChessErrors::NoPieceAtSquare(from))?;
        if piece.color != self.side_to_move {
            return Err(ChessErrors::WrongTurn {
                square: from,
                side_to_move: self.side_to_move,
                piece_color: piece.color,
            });
        }
        if !piece.legal_moves(&self.board).contains(&to) {
            return Err(ChessErrors::IllegalDestination { from, to });
        }
        Ok(())
    }

    /// Legal destinations of the piece on `square`, for move hints. Pieces of
    /// the side not on move report the moves they would have on their turn;
    /// a finished game reports none.
    pub fn legal_moves(&self, square: Position) -> ChessResult<Vec<Position>> {
        if !square.is_valid() {
            return Err(ChessErrors::InvalidSquare(square));
        }
        let piece = self
            .board
            .piece_at(square)
            .ok_or(ChessErrors::NoPieceAtSquare(square))?;
        if self.status.is_terminal() {
            return Ok(Vec::new());
        }
        Ok(piece.legal_moves(&self.board))
    }

    /// Every legal move for the side on move.
    pub fn all_legal_moves(&self) -> Vec<LegalMove> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        generate_legal_moves(&self.board, self.side_to_move)
    }

    #[inline]
    pub fn current_status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn history(&self) -> &[ChessMove] {
        &self.history
    }

    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.board.is_king_in_check(self.side_to_move)
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn to_fen(&self) -> String {
        generate_fen(&self.board, self.side_to_move, self.fullmove_number)
    }
}

fn evaluate_status(board: &Board, side_to_move: Color) -> GameStatus {
    if !has_any_legal_move(board, side_to_move) {
        return if board.is_king_in_check(side_to_move) {
            GameStatus::Checkmate {
                winner: side_to_move.opposite(),
            }
        } else {
            GameStatus::Stalemate
        };
    }
    if has_insufficient_material(board) {
        return GameStatus::Draw;
    }
    GameStatus::Active
}

/// Bare kings, or bare kings plus one bishop or knight.
fn has_insufficient_material(board: &Board) -> bool {
    let mut others = [Color::White, Color::Black]
        .into_iter()
        .flat_map(|color| board.pieces(color))
        .filter(|p| p.kind != PieceKind::King);

    match (others.next(), others.next()) {
        (None, _) => true,
        (Some(only), None) => matches!(only.kind, PieceKind::Bishop | PieceKind::Knight),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::{Game, GameStatus};
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::game_config::GameConfig;
    use crate::utils::algebraic::algebraic_to_position;

    fn sq(name: &str) -> Position {
        algebraic_to_position(name).expect("test square should parse")
    }

    fn play(game: &mut Game, moves: &[(&str, &str)]) {
        for (from, to) in moves {
            game.make_move(sq(from), sq(to))
                .unwrap_or_else(|err| panic!("{from}{to} should be legal: {err}"));
        }
    }

    #[test]
    fn new_game_is_active_with_white_to_move() {
        let game = Game::new();
        assert_eq!(game.current_status(), GameStatus::Active);
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.all_legal_moves().len(), 20);
        assert!(game.history().is_empty());
    }

    #[test]
    fn accepted_move_flips_turn_and_appends_history() {
        let mut game = Game::new();
        let outcome = game
            .make_move(sq("e2"), sq("e4"))
            .expect("e2e4 should be legal");
        assert_eq!(outcome.mover(), Color::White);
        assert_eq!(outcome.status, GameStatus::Active);
        assert!(!outcome.is_check());
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
        assert_eq!(outcome.to_string(), "White e2e4");
    }

    #[test]
    fn rejections_are_typed_and_leave_state_unchanged() {
        let mut game = Game::new();
        let board_before = game.board().clone();

        assert_eq!(
            game.make_move(sq("e7"), sq("e5")),
            Err(ChessErrors::WrongTurn {
                square: sq("e7"),
                side_to_move: Color::White,
                piece_color: Color::Black,
            })
        );
        assert_eq!(
            game.make_move(sq("e3"), sq("e4")),
            Err(ChessErrors::NoPieceAtSquare(sq("e3")))
        );
        assert_eq!(
            game.make_move(sq("e2"), sq("e5")),
            Err(ChessErrors::IllegalDestination {
                from: sq("e2"),
                to: sq("e5"),
            })
        );
        assert_eq!(
            game.make_move(Position::new(1, 4), Position::new(8, 4)),
            Err(ChessErrors::InvalidSquare(Position::new(8, 4)))
        );

        assert_eq!(game.board(), &board_before);
        assert_eq!(game.side_to_move(), Color::White);
        assert!(game.history().is_empty());
        assert_eq!(game.current_status(), GameStatus::Active);
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let mut game = Game::new();
        play(&mut game, &[("f2", "f3"), ("e7", "e5"), ("g2", "g4")]);
        let outcome = game
            .make_move(sq("d8"), sq("h4"))
            .expect("Qh4 should be legal");

        let mate = GameStatus::Checkmate {
            winner: Color::Black,
        };
        assert_eq!(outcome.status, mate);
        assert!(outcome.chess_move.gives_check);
        assert!(!outcome.is_check());
        assert_eq!(game.current_status(), mate);
        assert_eq!(
            game.make_move(sq("a2"), sq("a3")),
            Err(ChessErrors::GameAlreadyOver(mate))
        );
        assert!(game.all_legal_moves().is_empty());
    }

    #[test]
    fn check_is_reported_in_outcome() {
        let mut game = Game::new();
        play(&mut game, &[("e2", "e4"), ("f7", "f6")]);
        let outcome = game
            .make_move(sq("d1"), sq("h5"))
            .expect("Qh5 should be legal");
        assert!(outcome.is_check());
        assert!(game.is_in_check());
        assert_eq!(outcome.to_string(), "White d1h5, check");
    }

    #[test]
    fn stalemate_is_detected() {
        let mut game = Game::from_fen("7k/8/6Q1/8/8/8/8/K7 w - - 0 1").expect("FEN should load");
        let outcome = game
            .make_move(sq("g6"), sq("f7"))
            .expect("Qf7 should be legal");
        assert_eq!(outcome.status, GameStatus::Stalemate);
        assert!(!game.is_in_check());
    }

    #[test]
    fn capturing_last_piece_draws() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/3r4/4K3 w - - 0 1").expect("FEN should load");
        let outcome = game
            .make_move(sq("e1"), sq("d2"))
            .expect("Kxd2 should be legal");
        assert_eq!(outcome.status, GameStatus::Draw);
        assert_eq!(outcome.captured().map(|p| p.kind), Some(PieceKind::Rook));
    }

    #[test]
    fn check_is_still_reported_when_the_move_draws() {
        let mut game = Game::from_fen("4k3/8/3p4/8/4N3/8/8/4K3 w - - 0 1").expect("FEN should load");
        let outcome = game
            .make_move(sq("e4"), sq("d6"))
            .expect("Nxd6 should be legal");
        assert_eq!(outcome.status, GameStatus::Draw);
        assert!(outcome.is_check());
    }

    #[test]
    fn promotion_uses_configured_piece_unless_chosen() {
        let config = GameConfig::default()
            .with_starting_fen("8/P7/7k/8/8/8/6p1/K7 w - - 0 1")
            .with_promotion_piece(PieceKind::Rook)
            .expect("rook is a valid promotion piece");
        let mut game = Game::with_config(&config).expect("config should load");
        game.make_move(sq("a7"), sq("a8")).expect("a8 should be legal");
        assert_eq!(game.board().piece_at(sq("a8")).map(|p| p.kind), Some(PieceKind::Rook));

        game.make_move_with_promotion(sq("g2"), sq("g1"), PieceKind::Knight)
            .expect("g1 should be legal");
        assert_eq!(game.board().piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::Knight));
    }

    #[test]
    fn legal_moves_query_reports_hints() {
        let game = Game::new();
        let mut hints = game.legal_moves(sq("e2")).expect("e2 holds a pawn");
        hints.sort_by_key(|p| p.row);
        assert_eq!(hints, vec![sq("e3"), sq("e4")]);
        assert_eq!(
            game.legal_moves(sq("e4")),
            Err(ChessErrors::NoPieceAtSquare(sq("e4")))
        );
    }

    #[test]
    fn loading_a_mated_position_is_terminal() {
        let game = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should load");
        assert_eq!(
            game.current_status(),
            GameStatus::Checkmate {
                winner: Color::Black
            }
        );
    }

    #[test]
    fn fen_tracks_fullmove_number() {
        let mut game = Game::new();
        play(&mut game, &[("e2", "e4"), ("e7", "e5"), ("g1", "f3")]);
        assert_eq!(
            game.to_fen(),
            "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 0 2"
        );
    }
}

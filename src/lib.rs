//! Crate root module declarations for the Plum Chess rules engine.
//!
//! This file exposes the rule subsystems (board and game state, per-piece
//! move patterns, legality filtering, and notation helpers) so binaries,
//! tests, and embedding applications can import stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_move;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game;
    pub mod game_config;
    pub mod piece;
    pub mod shared_game;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod random_playout;
    pub mod render_board;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::board::Board;
pub use game_state::chess_move::{ChessMove, MoveKind};
pub use game_state::chess_types::{Color, PieceKind, Position};
pub use game_state::game::{Game, GameStatus, MoveOutcome};
pub use game_state::game_config::GameConfig;
pub use game_state::piece::Piece;
pub use game_state::shared_game::SharedGame;

//! Random-move playouts.
//!
//! Plays uniformly random legal moves until the game ends or a ply limit is
//! reached, checking board consistency after every move. Used for soak tests
//! and by the `perft_baseline` binary.

use rand::prelude::IndexedRandom;
use rand::Rng;
use tracing::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Position};
use crate::game_state::game::{Game, GameStatus, MoveOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutSummary {
    pub plies: usize,
    pub status: GameStatus,
}

pub fn random_playout<R: Rng + ?Sized>(
    game: &mut Game,
    rng: &mut R,
    max_plies: usize,
) -> ChessResult<PlayoutSummary> {
    let mut plies = 0;
    while plies < max_plies && !game.current_status().is_terminal() {
        let moves = game.all_legal_moves();
        let Some(picked) = moves.choose(rng).copied() else {
            break;
        };
        let outcome = game.make_move(picked.from, picked.to)?;
        check_move_applied(game.board(), picked.from, picked.to, &outcome)?;
        check_board_invariants(game.board())?;
        plies += 1;
    }

    let summary = PlayoutSummary {
        plies,
        status: game.current_status(),
    };
    debug!(plies, status = %summary.status, "playout finished");
    Ok(summary)
}

/// One king per color, and every occupied square agrees with the piece's
/// recorded position.
pub fn check_board_invariants(board: &Board) -> ChessResult<()> {
    for color in [Color::White, Color::Black] {
        let kings = board
            .pieces(color)
            .filter(|piece| piece.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(ChessErrors::InvalidPosition(format!(
                "{color} has {kings} kings"
            )));
        }
    }

    for square in Position::all() {
        if let Some(piece) = board.piece_at(square) {
            if piece.position != square {
                return Err(ChessErrors::InvalidPosition(format!(
                    "piece on {square} records position {}",
                    piece.position
                )));
            }
        }
    }
    Ok(())
}

fn check_move_applied(
    board: &Board,
    from: Position,
    to: Position,
    outcome: &MoveOutcome,
) -> ChessResult<()> {
    if board.piece_at(from).is_some() {
        return Err(ChessErrors::InvalidPosition(format!(
            "{from} still occupied after moving"
        )));
    }

    let mover = outcome.chess_move.piece;
    let landed = board.piece_at(to).ok_or_else(|| {
        ChessErrors::InvalidPosition(format!("{to} empty after moving onto it"))
    })?;
    let expected_kind = outcome.chess_move.promotion().unwrap_or(mover.kind);
    if landed.color != mover.color || landed.kind != expected_kind || !landed.has_moved {
        return Err(ChessErrors::InvalidPosition(format!(
            "{to} holds {} {} instead of the moved {} {}",
            landed.color, landed.kind, mover.color, expected_kind
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{check_board_invariants, random_playout};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::game_state::game::Game;
    use crate::game_state::piece::Piece;

    #[test]
    fn seeded_playouts_keep_the_board_consistent() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();
            let summary =
                random_playout(&mut game, &mut rng, 300).expect("playout should stay consistent");
            assert_eq!(summary.plies, game.history().len());
            assert_eq!(summary.status, game.current_status());
            assert!(summary.plies == 300 || summary.status.is_terminal());
        }
    }

    #[test]
    fn playout_stops_on_finished_game() {
        let mut game = Game::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .expect("FEN should parse");
        let mut rng = StdRng::seed_from_u64(7);
        let summary = random_playout(&mut game, &mut rng, 10).expect("playout should run");
        assert_eq!(summary.plies, 0);
        assert!(summary.status.is_terminal());
    }

    #[test]
    fn missing_king_is_reported() {
        let mut board = Board::empty();
        board
            .place(Piece::new(Color::White, PieceKind::King, Position::new(0, 4)))
            .expect("square should be free");
        assert!(check_board_invariants(&board).is_err());
        assert!(check_board_invariants(&Board::standard()).is_ok());
    }
}

//! Thread-shareable game handle.
//!
//! The engine itself is single-threaded. When one game is served to several
//! threads (for example concurrent requests for the same session), every
//! access goes through the single mutex held here, so moves and queries on
//! that game are serialized. Separate games never share a lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::Position;
use crate::game_state::game::{Game, GameStatus, MoveOutcome};

#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Game>>,
}

impl SharedGame {
    pub fn new(game: Game) -> Self {
        Self {
            inner: Arc::new(Mutex::new(game)),
        }
    }

    // A panic while holding the lock cannot leave the game half-updated:
    // make_move validates before it mutates, so the inner value is reused.
    fn lock(&self) -> MutexGuard<'_, Game> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn make_move(&self, from: Position, to: Position) -> ChessResult<MoveOutcome> {
        self.lock().make_move(from, to)
    }

    pub fn legal_moves(&self, square: Position) -> ChessResult<Vec<Position>> {
        self.lock().legal_moves(square)
    }

    pub fn current_status(&self) -> GameStatus {
        self.lock().current_status()
    }

    /// Runs `f` with exclusive access to the game.
    pub fn with_game<R>(&self, f: impl FnOnce(&mut Game) -> R) -> R {
        f(&mut self.lock())
    }
}

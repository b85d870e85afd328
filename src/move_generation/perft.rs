//! Perft node counting.
//!
//! Walks the legal move tree to a fixed depth and counts leaves, a standard
//! way to validate move generation against published totals. Promotions count
//! once per destination square because the board promotes to a single piece.

use std::panic;
use std::sync::Arc;
use std::thread;

use crate::game_state::board::Board;
use crate::game_state::chess_move::MoveKind;
use crate::game_state::chess_types::Color;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: u64,
    pub captures: u64,
    pub en_passant: u64,
    pub castles: u64,
    pub promotions: u64,
    pub checks: u64,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
    }
}

pub fn perft(board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    perft_recurse(board, side_to_move, depth, &mut counts);
    counts
}

/// Splits the root moves across threads; each thread works on its own board.
pub fn perft_multi_threaded(board: &Board, side_to_move: Color, depth: u8) -> PerftCounts {
    if depth <= 1 {
        return perft(board, side_to_move, depth);
    }

    let root = Arc::new(board.clone());
    let handles: Vec<_> = generate_legal_moves(board, side_to_move)
        .into_iter()
        .map(|mv| {
            let root = Arc::clone(&root);
            thread::spawn(move || {
                let mut next = (*root).clone();
                let mut local = PerftCounts::default();
                if next.execute(mv.from, mv.to).is_ok() {
                    perft_recurse(&next, side_to_move.opposite(), depth - 1, &mut local);
                }
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(payload) => panic::resume_unwind(payload),
        }
    }
    total
}

fn perft_recurse(board: &Board, side_to_move: Color, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves(board, side_to_move) {
        let mut next = board.clone();
        let Ok(executed) = next.execute(mv.from, mv.to) else {
            continue;
        };

        if depth == 1 {
            counts.nodes += 1;
            if executed.is_capture() {
                counts.captures += 1;
            }
            if matches!(executed.kind, MoveKind::EnPassant { .. }) {
                counts.en_passant += 1;
            }
            if executed.is_castle() {
                counts.castles += 1;
            }
            if executed.promotion().is_some() {
                counts.promotions += 1;
            }
            if executed.gives_check {
                counts.checks += 1;
            }
        } else {
            perft_recurse(&next, side_to_move.opposite(), depth - 1, counts);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_multi_threaded};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    #[test]
    fn startpos_matches_known_node_counts() {
        let board = Board::standard();
        assert_eq!(perft(&board, Color::White, 0).nodes, 1);
        assert_eq!(perft(&board, Color::White, 1).nodes, 20);
        assert_eq!(perft(&board, Color::White, 2).nodes, 400);
        let depth3 = perft(&board, Color::White, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(depth3.checks, 12);
    }

    #[test]
    fn kiwipete_exercises_castling_and_en_passant() {
        let parsed = parse_fen(KIWIPETE).expect("FEN should parse");
        let depth1 = perft(&parsed.board, parsed.side_to_move, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);

        let depth2 = perft(&parsed.board, parsed.side_to_move, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
        assert_eq!(depth2.checks, 3);
    }

    #[test]
    fn position_3_matches_known_node_counts() {
        let parsed = parse_fen(POSITION_3).expect("FEN should parse");
        let counts: Vec<u64> = (1..=3)
            .map(|depth| perft(&parsed.board, parsed.side_to_move, depth).nodes)
            .collect();
        assert_eq!(counts, vec![14, 191, 2812]);
    }

    #[test]
    fn multi_threaded_matches_single_threaded() {
        let board = Board::standard();
        assert_eq!(
            perft_multi_threaded(&board, Color::White, 3),
            perft(&board, Color::White, 3)
        );

        let parsed = parse_fen(KIWIPETE).expect("FEN should parse");
        let threaded = perft_multi_threaded(&parsed.board, parsed.side_to_move, 2);
        assert_eq!(threaded.nodes, 2039);
        assert_eq!(threaded, perft(&parsed.board, parsed.side_to_move, 2));
    }
}

//! Perft and random-playout runner.
//!
//! Usage:
//! `cargo run --release --bin perft_baseline`
//! `cargo run --release --bin perft_baseline -- --depth 4 --playouts 50`
//!
//! The starting position comes from `PLUM_START_FEN` when set; log verbosity
//! follows `RUST_LOG`.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use plum_chess_rules::game_state::game::Game;
use plum_chess_rules::game_state::game_config::GameConfig;
use plum_chess_rules::move_generation::perft::perft_multi_threaded;
use plum_chess_rules::utils::long_algebraic::history_to_long_algebraic;
use plum_chess_rules::utils::random_playout::random_playout;
use plum_chess_rules::utils::render_board::render_board;
use plum_chess_rules::ChessResult;

fn parse_arg_u64(flag: &str, default: u64) -> u64 {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(v) = args[i + 1].parse::<u64>() {
                return v;
            }
        }
    }
    default
}

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let depth = parse_arg_u64("--depth", 3).clamp(1, 6) as u8;
    let playouts = parse_arg_u64("--playouts", 20);
    let seed = parse_arg_u64("--seed", 1);

    let config = GameConfig::from_env()?;
    let game = Game::with_config(&config)?;
    println!("{}", render_board(game.board()));
    println!("fen: {}", game.to_fen());

    for d in 1..=depth {
        let started = Instant::now();
        let counts = perft_multi_threaded(game.board(), game.side_to_move(), d);
        let elapsed_ms = started.elapsed().as_millis();
        let nps = if elapsed_ms == 0 {
            counts.nodes
        } else {
            counts.nodes * 1000 / elapsed_ms as u64
        };
        println!(
            "perft depth={d} nodes={} captures={} ep={} castles={} promotions={} checks={} elapsed_ms={elapsed_ms} nps={nps}",
            counts.nodes,
            counts.captures,
            counts.en_passant,
            counts.castles,
            counts.promotions,
            counts.checks
        );
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut finished = 0u64;
    for run in 0..playouts {
        let mut playout_game = game.clone();
        match random_playout(&mut playout_game, &mut rng, 400) {
            Ok(summary) => {
                if summary.status.is_terminal() {
                    finished += 1;
                }
            }
            Err(err) => {
                warn!(run, %err, "playout hit an inconsistent board");
                println!("{}", render_board(playout_game.board()));
                println!("moves: {}", history_to_long_algebraic(playout_game.history()));
                return Err(err);
            }
        }
    }
    info!(playouts, finished, seed, "random playouts complete");
    println!("playouts={playouts} finished={finished}");

    Ok(())
}

//! Self-play driver: the engine plays both sides from the initial position
//! until a King is taken, a side runs out of moves or the ply limit is hit.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::{error, info};

use grid_chess::agent::ai::{BestMove, Engine, EngineContext, SearchConfig, StartDepth, DEFAULT_SEED};
use grid_chess::agent::{judge_after_move, GameResult};
use grid_chess::game_repr::{Color, Position};
use grid_chess::apply_move;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Thinking time per move in milliseconds
    #[arg(short, long, default_value_t = 1000)]
    budget_ms: u64,

    /// Depth of the first iteration; omit to pick it from the piece count
    #[arg(long)]
    start_depth: Option<u8>,

    /// Deepest iteration the search may run
    #[arg(long, default_value_t = 64)]
    max_depth: u8,

    /// Side that starts at the bottom of the grid and moves first
    #[arg(long, value_enum, default_value_t = Side::White)]
    starter: Side,

    /// Stop after this many plies
    #[arg(long, default_value_t = 400)]
    max_plies: u32,

    /// Seed for the hashing keys
    #[arg(long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Only print the final position
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level))
        .init();

    if let Err(e) = run(&args) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = SearchConfig {
        time_budget: Duration::from_millis(args.budget_ms),
        start_depth: args.start_depth.map_or(StartDepth::PhaseAdjusted, StartDepth::Fixed),
        max_depth: args.max_depth,
    };
    let engine = Engine::with_context(Arc::new(EngineContext::with_seed(args.seed)), config)?;

    let mut pos = Position::new_game(args.starter.into());
    if !args.quiet {
        println!("{}\n", pos);
    }

    let mut result = None;
    for ply in 1..=args.max_plies {
        let side = pos.side_to_move;
        let mv = match engine.get_best_move(&pos, side)?.wait()? {
            BestMove::Move(mv) => mv,
            BestMove::NoMove => {
                result = Some(GameResult::Draw);
                break;
            }
        };

        let undo = apply_move(&mut pos, &mv)?;
        if !args.quiet {
            println!("{}. {} {}\n{}\n", ply, side, mv, pos);
        }

        if let Some(verdict) = judge_after_move(&mut pos, &undo) {
            result = Some(verdict);
            break;
        }
    }

    if args.quiet {
        println!("{}", pos);
    }
    match result {
        Some(result) => info!("game over: {:?}", result),
        None => info!("stopped after {} plies", args.max_plies),
    }
    Ok(())
}

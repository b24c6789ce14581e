// Iterative Deepening Search Orchestrator
//
// Runs full root passes at increasing depth until the time budget is spent,
// the caller cancels, the depth cap is reached or a King capture is found.
// The best move of each finished pass is tried first in the next one.
// Deadline and cancellation are only checked between passes, so a search
// can overrun its budget by at most one pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::debug;

use crate::error::ConfigError;
use crate::game_repr::{Color, Move, Position};
use super::context::EngineContext;
use super::eval_memo::EvalMemo;
use super::evaluation::KING_CAPTURE_SCORE;
use super::move_ordering::generate_ordered_moves;
use super::negamax::{captures_king, negamax};

/// Depth of the first iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartDepth {
    Fixed(u8),
    /// Shallower with more material on the board: more than 24 pieces
    /// starts at 1, more than 12 at 2, otherwise 3
    PhaseAdjusted,
}

impl StartDepth {
    pub fn resolve(self, pos: &Position) -> u8 {
        match self {
            StartDepth::Fixed(depth) => depth,
            StartDepth::PhaseAdjusted => match pos.piece_count() {
                n if n > 24 => 1,
                n if n > 12 => 2,
                _ => 3,
            },
        }
    }
}

/// Search limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Wall-clock budget; no new iteration starts once it has passed
    pub time_budget: Duration,
    pub start_depth: StartDepth,
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget: Duration::from_secs(1),
            start_depth: StartDepth::Fixed(1),
            max_depth: 64,
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_budget.is_zero() {
            return Err(ConfigError::ZeroBudget(self.time_budget));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }
        if let StartDepth::Fixed(start) = self.start_depth {
            if start == 0 {
                return Err(ConfigError::ZeroDepth);
            }
            if start > self.max_depth {
                return Err(ConfigError::DepthRange {
                    start,
                    max: self.max_depth,
                });
            }
        }
        Ok(())
    }
}

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// `None` when the side had no moves at all
    pub best_move: Option<Move>,
    pub score: f32,
    /// Deepest completed iteration
    pub depth: u8,
    pub nodes_searched: u64,
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn new() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth: 0,
            nodes_searched: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// The chosen move wins by force: the opposing King falls, or the
    /// opponent is left without a move
    pub fn is_decisive(&self) -> bool {
        self.score >= KING_CAPTURE_SCORE
    }
}

impl Default for SearchResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform iterative deepening search to find the best move for `side`
///
/// The search works on its own copy of `pos`. `cancel` is polled between
/// iterations; at least one iteration always completes.
pub fn iterative_deepening_search(
    ctx: &EngineContext,
    memo: &mut EvalMemo,
    pos: &Position,
    side: Color,
    config: &SearchConfig,
    cancel: &AtomicBool,
) -> SearchResult {
    let start_time = Instant::now();
    let mut result = SearchResult::new();
    let mut search_pos = pos.clone();
    let root_hash = ctx.zobrist.hash(&search_pos);

    let max_depth = config.max_depth.max(1);
    let mut depth = config.start_depth.resolve(pos).clamp(1, max_depth);
    let mut pv_move: Option<Move> = None;
    let mut total_nodes = 0u64;

    loop {
        let moves = generate_ordered_moves(&search_pos, side, pv_move);
        if moves.is_empty() {
            debug!("{} has no moves", side);
            break;
        }

        // A King capture at the root ends the search at once
        if let Some(mv) = moves.iter().find(|mv| captures_king(&search_pos, mv)) {
            result.best_move = Some(*mv);
            result.score = KING_CAPTURE_SCORE;
            result.depth = depth;
            break;
        }

        let mut alpha = f32::NEG_INFINITY;
        let beta = f32::INFINITY;
        let mut best_score = f32::NEG_INFINITY;
        let mut best_move = None;

        for mv in &moves {
            let (child_hash, undo) = ctx.zobrist.make_move(&mut search_pos, mv, root_hash);
            total_nodes += 1;
            let score = -negamax(
                ctx,
                memo,
                &mut search_pos,
                side.opposite(),
                depth - 1,
                -beta,
                -alpha,
                child_hash,
                &mut total_nodes,
            );
            search_pos.unmake(mv, undo);

            if score > best_score {
                best_score = score;
                best_move = Some(*mv);
            }
            alpha = alpha.max(best_score);
        }

        result.best_move = best_move;
        result.score = best_score;
        result.depth = depth;
        result.nodes_searched = total_nodes;
        result.elapsed = start_time.elapsed();
        pv_move = best_move;

        print_search_info(&result);

        if result.is_decisive()
            || depth >= max_depth
            || start_time.elapsed() >= config.time_budget
            || cancel.load(Ordering::Relaxed)
        {
            break;
        }
        depth += 1;
    }

    result.nodes_searched = total_nodes;
    result.elapsed = start_time.elapsed();
    result
}

/// Log one finished iteration
fn print_search_info(result: &SearchResult) {
    let nps = if result.elapsed.as_millis() > 0 {
        (result.nodes_searched as u128 * 1000) / result.elapsed.as_millis()
    } else {
        0
    };

    debug!(
        "depth {} score {:.2} nodes {} time {}ms nps {} best {}",
        result.depth,
        result.score,
        result.nodes_searched,
        result.elapsed.as_millis(),
        nps,
        result
            .best_move
            .map(|mv| mv.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
}

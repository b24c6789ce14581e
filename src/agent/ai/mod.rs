// Search engine - Negamax with Alpha-Beta Pruning
//
// Iterative deepening over a pseudo-legal move generator, with a static
// evaluator memoized by Zobrist hash.
//
// Key features:
// - Deterministic (same position and budget gives the same move)
// - Alpha-beta pruning with capture / promotion move ordering
// - Evaluation memo shared between searches
// - Background search with a one-shot result handoff

mod context;
mod engine;
mod eval_memo;
mod evaluation;
mod move_ordering;
mod negamax;
mod negamax_player;
mod piece_square_tables;
mod search;
mod zobrist;

#[cfg(test)]
mod tests;

pub use context::{EngineContext, DEFAULT_SEED};
pub use engine::{BestMove, Engine, SearchHandle};
pub use eval_memo::EvalMemo;
pub use evaluation::{evaluate, is_endgame, piece_value, static_eval, BIG, KING_CAPTURE_SCORE};
pub use move_ordering::{generate_ordered_moves, move_score, order_moves};
pub use negamax::{captures_king, negamax};
pub use negamax_player::{Difficulty, NegamaxPlayer};
pub use piece_square_tables::PieceSquareTables;
pub use search::{iterative_deepening_search, SearchConfig, SearchResult, StartDepth};
pub use zobrist::Zobrist;

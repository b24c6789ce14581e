// Negamax Search with Alpha-Beta Pruning
//
// Negamax uses max(a, b) = -min(-a, -b) so one function serves both sides:
// each level negates the child's score and swaps the window.
//
// There is no check detection. Taking the opposing King ends the line with
// KING_CAPTURE_SCORE; a side without any move scores -BIG.

use crate::game_repr::{Color, Move, PieceKind, Position};
use super::context::EngineContext;
use super::eval_memo::EvalMemo;
use super::evaluation::{evaluate, BIG, KING_CAPTURE_SCORE};
use super::move_ordering::generate_ordered_moves;

/// True when `mv` would take the opposing King
#[inline]
pub fn captures_king(pos: &Position, mv: &Move) -> bool {
    mv.capture
        .and_then(|sq| pos.piece_at(sq))
        .is_some_and(|p| p.kind == PieceKind::King)
}

/// Negamax search with alpha-beta pruning
///
/// # Arguments
///
/// * `pos` - Current position (mutated by make/unmake, restored on return)
/// * `side` - Side to move at this node
/// * `depth` - Remaining plies; 0 evaluates the position
/// * `alpha`, `beta` - Search window from `side`'s point of view
/// * `hash` - Zobrist hash of `pos`
/// * `nodes` - Incremented once per move made
///
/// # Returns
///
/// Score from the perspective of `side`
#[allow(clippy::too_many_arguments)]
pub fn negamax(
    ctx: &EngineContext,
    memo: &mut EvalMemo,
    pos: &mut Position,
    side: Color,
    depth: u8,
    mut alpha: f32,
    beta: f32,
    hash: u64,
    nodes: &mut u64,
) -> f32 {
    if depth == 0 {
        return evaluate(pos, side, ctx, memo, hash);
    }

    let moves = generate_ordered_moves(pos, side, None);
    if moves.is_empty() {
        return -BIG;
    }

    let mut best = f32::NEG_INFINITY;
    for mv in &moves {
        if captures_king(pos, mv) {
            return KING_CAPTURE_SCORE;
        }

        let (child_hash, undo) = ctx.zobrist.make_move(pos, mv, hash);
        *nodes += 1;
        let score = -negamax(ctx, memo, pos, side.opposite(), depth - 1, -beta, -alpha, child_hash, nodes);
        pos.unmake(mv, undo);

        if score > best {
            best = score;
        }
        alpha = alpha.max(best);
        if alpha >= beta {
            break;
        }
    }

    best
}

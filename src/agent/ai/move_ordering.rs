// Move ordering for alpha-beta search
//
// Captures are ranked by victim value minus a tenth of the attacker's value,
// promotions get a flat bonus on top of the new piece's value. Moves that
// score the same keep the generator's order.

use crate::game_repr::{Color, Move, MoveList, Position};
use super::evaluation::piece_value;

const PROMOTION_BONUS: f32 = 10.0;

/// Heuristic ordering score of a move in `pos` (higher is searched first)
pub fn move_score(pos: &Position, mv: &Move) -> f32 {
    let mut score = 0.0;

    if let Some(cap) = mv.capture {
        if let (Some(victim), Some(attacker)) = (pos.piece_at(cap), pos.piece_at(mv.from)) {
            score += piece_value(victim.kind) - 0.1 * piece_value(attacker.kind);
        }
    }

    if mv.is_promotion() {
        score += PROMOTION_BONUS;
        if let Some(kind) = mv.promotion_kind() {
            score += piece_value(kind);
        }
    }

    score
}

/// Stable sort, best first
pub fn order_moves(pos: &Position, moves: MoveList) -> MoveList {
    let mut scored: Vec<(f32, Move)> = moves.into_iter().map(|mv| (move_score(pos, &mv), mv)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, mv)| mv).collect()
}

/// Engine moves for `side`, ordered, with `pv_move` (the best move of the
/// previous iteration) searched first when it is still available
pub fn generate_ordered_moves(pos: &Position, side: Color, pv_move: Option<Move>) -> MoveList {
    let mut moves = order_moves(pos, pos.engine_moves(side));

    if let Some(pv) = pv_move {
        if let Some(idx) = moves.iter().position(|mv| *mv == pv) {
            let mv = moves.remove(idx);
            moves.insert(0, mv);
        }
    }

    moves
}

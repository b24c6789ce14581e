// Position evaluation function
// Returns score in pawns (positive = good for the requested side)

use crate::game_repr::{Color, PieceKind, Position, Square};
use super::context::EngineContext;
use super::eval_memo::EvalMemo;

/// Larger than any reachable evaluation; returned when a side has no moves
pub const BIG: f32 = 1e7;

/// Score of a position where the side to move can take the opposing King
pub const KING_CAPTURE_SCORE: f32 = BIG - 1.0;

// Material values in pawns
const PAWN_VALUE: f32 = 1.0;
const KNIGHT_VALUE: f32 = 3.2;
const BISHOP_VALUE: f32 = 3.3;
const ROOK_VALUE: f32 = 5.0;
const QUEEN_VALUE: f32 = 9.0;
const KING_VALUE: f32 = 1000.0;

const BLOCKED_PAWN_PENALTY: f32 = 0.5;
const DOUBLED_PAWN_PENALTY: f32 = 0.5;

/// Material value of a piece kind
#[inline]
pub fn piece_value(kind: PieceKind) -> f32 {
    match kind {
        PieceKind::Pawn => PAWN_VALUE,
        PieceKind::Knight => KNIGHT_VALUE,
        PieceKind::Bishop => BISHOP_VALUE,
        PieceKind::Rook => ROOK_VALUE,
        PieceKind::Queen => QUEEN_VALUE,
        PieceKind::King => KING_VALUE,
    }
}

/// Endgame when the queens are gone, or when at most two minor pieces and at
/// most one non-queen officer are left on the board
pub fn is_endgame(pos: &Position) -> bool {
    let mut queens = 0;
    let mut minors = 0;
    let mut officers = 0;

    for (_, piece) in pos.pieces() {
        match piece.kind {
            PieceKind::Queen => queens += 1,
            PieceKind::King | PieceKind::Pawn => {}
            kind => {
                officers += 1;
                if kind.is_minor() {
                    minors += 1;
                }
            }
        }
    }

    queens == 0 || (minors <= 2 && officers <= 1)
}

/// Material and piece-square score from White's point of view
fn material_and_position(pos: &Position, ctx: &EngineContext, endgame: bool) -> f32 {
    let mut score = 0.0;
    for (sq, piece) in pos.pieces() {
        let value = piece_value(piece.kind)
            + ctx.tables.value(pos, piece.kind, piece.color, sq, endgame);
        match piece.color {
            Color::White => score += value,
            Color::Black => score -= value,
        }
    }
    score
}

/// Blocked and doubled pawn penalties from White's point of view
fn pawn_structure(pos: &Position) -> f32 {
    let mut score = 0.0;

    for file in 0..8u8 {
        let mut pawns = [0u8; 2];

        for rank in 0..8u8 {
            let sq = Square::new(rank, file);
            let Some(piece) = pos.piece_at(sq) else {
                continue;
            };
            if piece.kind != PieceKind::Pawn {
                continue;
            }
            pawns[piece.color.index()] += 1;

            // Off the board counts as free
            let blocked = sq
                .offset(pos.forward(piece.color), 0)
                .is_some_and(|ahead| !pos.is_empty(ahead));
            if blocked {
                score -= sign(piece.color) * BLOCKED_PAWN_PENALTY;
            }
        }

        for color in Color::BOTH {
            if pawns[color.index()] >= 2 {
                score -= sign(color) * DOUBLED_PAWN_PENALTY;
            }
        }
    }

    score
}

#[inline]
fn sign(color: Color) -> f32 {
    match color {
        Color::White => 1.0,
        Color::Black => -1.0,
    }
}

#[inline]
fn orient(white_score: f32, pov: Color) -> f32 {
    match pov {
        Color::White => white_score,
        Color::Black => -white_score,
    }
}

/// Static evaluation without touching the memo
pub fn static_eval(pos: &Position, pov: Color, ctx: &EngineContext) -> f32 {
    let endgame = is_endgame(pos);
    let white = material_and_position(pos, ctx, endgame) + pawn_structure(pos);
    orient(white, pov)
}

/// Memoized evaluation. `hash` must be the Zobrist hash of `pos`.
pub fn evaluate(pos: &Position, pov: Color, ctx: &EngineContext, memo: &mut EvalMemo, hash: u64) -> f32 {
    let key = ctx.zobrist.memo_key(hash, pos.starter);
    if let Some(white) = memo.get(key) {
        return orient(white, pov);
    }

    let white = static_eval(pos, Color::White, ctx);
    memo.insert(key, white);
    orient(white, pov)
}

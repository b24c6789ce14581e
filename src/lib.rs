pub mod agent;
pub mod error;
pub mod game_repr;

pub use error::{ConfigError, EngineError, FenError, MoveError};

use game_repr::{Color, Move, MoveList, PieceKind, Position, Promotion, UndoRecord};

/// Pseudo-legal moves for `side`, promotions left `Undecided`
pub fn legal_moves(pos: &Position, side: Color) -> MoveList {
    pos.generate_moves(side)
}

/// Play a move coming from outside the engine (a front end, a script).
///
/// The move is matched against the generated moves of the side to move by
/// origin and destination, so only `from`, `to` and `promotion` need to be
/// filled in. A promotion may be resolved right away with
/// `Promotion::To(kind)` or left `Undecided` and settled later through
/// [`Position::promote`].
pub fn apply_move(pos: &mut Position, mv: &Move) -> Result<UndoRecord, MoveError> {
    let piece = pos.piece_at(mv.from).ok_or(MoveError::NoPieceAt(mv.from))?;
    let not_available = || MoveError::NotPseudoLegal {
        mv: *mv,
        side: pos.side_to_move,
    };
    if piece.color != pos.side_to_move {
        return Err(not_available());
    }

    let generated = pos
        .piece_moves(mv.from)
        .into_iter()
        .find(|m| m.same_squares(mv))
        .ok_or_else(not_available)?;

    let resolved = match (generated.promotion, mv.promotion) {
        (Some(_), Some(Promotion::To(kind))) => {
            if matches!(kind, PieceKind::King | PieceKind::Pawn) {
                return Err(MoveError::BadPromotion(kind));
            }
            generated.with_promotion(kind)
        }
        (None, Some(_)) => return Err(not_available()),
        _ => generated,
    };

    Ok(pos.apply(&resolved))
}

/// Take back a move played with [`apply_move`], using the record it returned
pub fn undo_move(pos: &mut Position, mv: &Move, undo: UndoRecord) {
    pos.unmake(mv, undo);
}

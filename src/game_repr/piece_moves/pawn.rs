use crate::game_repr::{Color, Move, MoveList, PieceKind, Position, Promotion, Square};

impl Position {
    /// Generate pawn moves into a provided buffer.
    ///
    /// Direction depends on whether the pawn belongs to the starter (moving
    /// up the grid) or to the other side (moving down).
    pub fn pawn_moves_into(&self, from: Square, moves: &mut MoveList) {
        let Some(pawn) = self.piece_at(from) else {
            return;
        };
        let dir = self.forward(pawn.color);
        let last_rank = self.promotion_rank(pawn.color);
        let flag_promotion = |mut mv: Move| {
            if mv.to.rank == last_rank {
                mv.promotion = Some(Promotion::Undecided);
            }
            mv
        };

        // A pawn can only stand on its own last rank while its promotion is
        // still being decided
        let Some(ahead) = from.offset(dir, 0) else {
            return;
        };

        if self.is_empty(ahead) {
            moves.push(flag_promotion(Move::quiet(from, ahead)));

            if from.rank == self.pawn_start_rank(pawn.color) {
                if let Some(two_ahead) = ahead.offset(dir, 0) {
                    if self.is_empty(two_ahead) {
                        let mut mv = Move::quiet(from, two_ahead);
                        mv.double_push = true;
                        moves.push(mv);
                    }
                }
            }
        }

        for df in [-1, 1] {
            if let Some(target) = from.offset(dir, df) {
                if matches!(self.piece_at(target), Some(p) if p.color != pawn.color) {
                    moves.push(flag_promotion(Move::capturing(from, target)));
                }
            }

            // En passant: the double-pushed pawn sits beside us
            if let (Some(ep), Some(side)) = (self.en_passant, from.offset(0, df)) {
                if ep == side && self.is_enemy_pawn(ep, pawn.color) {
                    if let Some(to) = from.offset(dir, df) {
                        if self.is_empty(to) {
                            let mut mv = Move::new(from, to, Some(ep));
                            mv.en_passant = true;
                            moves.push(mv);
                        }
                    }
                }
            }
        }
    }

    fn is_enemy_pawn(&self, sq: Square, own: Color) -> bool {
        matches!(self.piece_at(sq), Some(p) if p.kind == PieceKind::Pawn && p.color != own)
    }
}

pub mod pawn;
pub mod knight;
pub mod bishop;
pub mod rook;
pub mod queen;
pub mod king;

use smallvec::SmallVec;

use super::{Color, Move, PieceKind, Position, Promotion, Square};

/// Move buffer sized for a typical position without spilling to the heap
pub type MoveList = SmallVec<[Move; 64]>;

impl Position {
    /// Pseudo-legal moves for `side`. Moves that leave the own King capturable
    /// are kept; promotions are flagged `Undecided`. Castling is never
    /// generated.
    pub fn generate_moves(&self, side: Color) -> MoveList {
        let mut moves = MoveList::new();
        for (sq, piece) in self.pieces() {
            if piece.color == side {
                self.piece_moves_into(sq, &mut moves);
            }
        }
        moves
    }

    /// Pseudo-legal moves of the piece on `sq` (empty if the square is empty)
    pub fn piece_moves(&self, sq: Square) -> MoveList {
        let mut moves = MoveList::new();
        self.piece_moves_into(sq, &mut moves);
        moves
    }

    fn piece_moves_into(&self, sq: Square, moves: &mut MoveList) {
        let Some(piece) = self.piece_at(sq) else {
            return;
        };
        match piece.kind {
            PieceKind::Pawn => self.pawn_moves_into(sq, moves),
            PieceKind::Knight => self.knight_moves_into(sq, moves),
            PieceKind::Bishop => self.bishop_moves_into(sq, moves),
            PieceKind::Rook => self.rook_moves_into(sq, moves),
            PieceKind::Queen => self.queen_moves_into(sq, moves),
            PieceKind::King => self.king_moves_into(sq, moves),
        }
    }

    /// Moves as the search consumes them: every undecided promotion becomes
    /// a Queen promotion followed by a Knight underpromotion.
    pub fn engine_moves(&self, side: Color) -> MoveList {
        let mut out = MoveList::new();
        for mv in self.generate_moves(side) {
            match mv.promotion {
                Some(Promotion::Undecided) => {
                    out.push(mv.with_promotion(PieceKind::Queen));
                    out.push(mv.with_promotion(PieceKind::Knight));
                }
                _ => out.push(mv),
            }
        }
        out
    }

    /// Single-step moves to each on-board offset not held by a friendly piece
    pub(crate) fn step_moves_into(&self, from: Square, offsets: &[(i8, i8)], moves: &mut MoveList) {
        let Some(mover) = self.piece_at(from) else {
            return;
        };
        for &(dr, df) in offsets {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::quiet(from, to)),
                Some(target) if target.color != mover.color => moves.push(Move::capturing(from, to)),
                Some(_) => {}
            }
        }
    }

    /// Ray moves along each direction, stopping at the first occupied square
    pub(crate) fn slide_moves_into(&self, from: Square, directions: &[(i8, i8)], moves: &mut MoveList) {
        let Some(mover) = self.piece_at(from) else {
            return;
        };
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.push(Move::quiet(from, to)),
                    Some(target) => {
                        if target.color != mover.color {
                            moves.push(Move::capturing(from, to));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}

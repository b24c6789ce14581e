use crate::game_repr::{MoveList, Position, Square};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 1), (-1, -1), (-1, 1), (1, -1),
    (1, 0), (0, 1), (-1, 0), (0, -1),
];

impl Position {
    /// Generate king moves into a provided buffer.
    ///
    /// Castling rights are tracked by `apply`, but castling itself is not
    /// generated: it would need an attack map of the opponent's pieces.
    pub fn king_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KING_OFFSETS, moves);
    }
}

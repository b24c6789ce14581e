use crate::game_repr::{MoveList, Position, Square};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2), (-1, 2), (1, -2), (-1, -2),
    (2, 1), (-2, 1), (2, -1), (-2, -1),
];

impl Position {
    /// Generate knight moves into a provided buffer
    pub fn knight_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.step_moves_into(from, &KNIGHT_OFFSETS, moves);
    }
}

use crate::game_repr::{MoveList, Position, Square};

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

impl Position {
    /// Generate bishop moves into a provided buffer
    pub fn bishop_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &BISHOP_DIRECTIONS, moves);
    }
}

use crate::game_repr::{MoveList, Position, Square};

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

impl Position {
    /// Generate rook moves into a provided buffer
    pub fn rook_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &ROOK_DIRECTIONS, moves);
    }
}

use crate::game_repr::{MoveList, Position, Square};

use super::bishop::BISHOP_DIRECTIONS;
use super::rook::ROOK_DIRECTIONS;

impl Position {
    /// Generate queen moves into a provided buffer
    pub fn queen_moves_into(&self, from: Square, moves: &mut MoveList) {
        self.slide_moves_into(from, &BISHOP_DIRECTIONS, moves);
        self.slide_moves_into(from, &ROOK_DIRECTIONS, moves);
    }
}

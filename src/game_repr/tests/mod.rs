use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Empty grid with White as the starting (bottom) side
pub fn empty_board() -> Position {
    Position::empty(Color::White)
}

/// Helper function to place a piece by algebraic square name
pub fn place_piece(pos: &mut Position, square: &str, kind: PieceKind, color: Color) {
    pos.set(sq(square), Some(Piece::new(kind, color)));
}

pub fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: &str, to: &str) -> bool {
    moves.iter().any(|m| m.from == sq(from) && m.to == sq(to))
}

pub fn find_move(moves: &[Move], from: &str, to: &str) -> Move {
    *moves
        .iter()
        .find(|m| m.from == sq(from) && m.to == sq(to))
        .unwrap_or_else(|| panic!("{}{} not generated", from, to))
}

// ==================== TEST MODULES ====================

mod piece_movement;
mod make_unmake;
mod fen_parsing;

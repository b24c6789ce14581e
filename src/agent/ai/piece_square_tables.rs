// Piece-square tables for positional evaluation
// All values in pawns (1.0 = 1 pawn)
// Tables are laid out as seen by the starting side: row 0 is the far edge of
// the grid, row 7 the starter's back rank. The other side reads them flipped.

use crate::game_repr::{Color, PieceKind, Position, Square};

pub type Table = [[f32; 8]; 8];

// Pawn position values - encourage advancement and central control
pub const PAWN_TABLE: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5],  // one step from promotion
    [0.1, 0.1, 0.2, 0.3, 0.3, 0.2, 0.1, 0.1],
    [0.05, 0.05, 0.1, 0.25, 0.25, 0.1, 0.05, 0.05],
    [0.0, 0.0, 0.0, 0.2, 0.2, 0.0, 0.0, 0.0],
    [0.05, -0.05, -0.1, 0.0, 0.0, -0.1, -0.05, 0.05],
    [0.05, 0.1, 0.1, -0.2, -0.2, 0.1, 0.1, 0.05],
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
];

// Knight position values - prefer center squares
pub const KNIGHT_TABLE: Table = [
    [-0.5, -0.4, -0.3, -0.3, -0.3, -0.3, -0.4, -0.5],
    [-0.4, -0.2, 0.0, 0.0, 0.0, 0.0, -0.2, -0.4],
    [-0.3, 0.0, 0.1, 0.15, 0.15, 0.1, 0.0, -0.3],
    [-0.3, 0.05, 0.15, 0.2, 0.2, 0.15, 0.05, -0.3],
    [-0.3, 0.0, 0.15, 0.2, 0.2, 0.15, 0.0, -0.3],
    [-0.3, 0.05, 0.1, 0.15, 0.15, 0.1, 0.05, -0.3],
    [-0.4, -0.2, 0.0, 0.05, 0.05, 0.0, -0.2, -0.4],
    [-0.5, -0.4, -0.3, -0.3, -0.3, -0.3, -0.4, -0.5],
];

// Bishop position values - prefer center and long diagonals
pub const BISHOP_TABLE: Table = [
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
    [-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
    [-0.1, 0.0, 0.05, 0.1, 0.1, 0.05, 0.0, -0.1],
    [-0.1, 0.05, 0.05, 0.1, 0.1, 0.05, 0.05, -0.1],
    [-0.1, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, -0.1],
    [-0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, -0.1],
    [-0.1, 0.05, 0.0, 0.0, 0.0, 0.0, 0.05, -0.1],
    [-0.2, -0.1, -0.1, -0.1, -0.1, -0.1, -0.1, -0.2],
];

// Rook position values - bonus on the second-to-last row
pub const ROOK_TABLE: Table = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.05, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [-0.05, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.05],
    [0.0, 0.0, 0.0, 0.05, 0.05, 0.0, 0.0, 0.0],
];

// Queen position values - slight central preference
pub const QUEEN_TABLE: Table = [
    [-0.2, -0.1, -0.1, -0.05, -0.05, -0.1, -0.1, -0.2],
    [-0.1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.1],
    [-0.1, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.1],
    [-0.05, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.05],
    [0.0, 0.0, 0.05, 0.05, 0.05, 0.05, 0.0, -0.05],
    [-0.1, 0.05, 0.05, 0.05, 0.05, 0.05, 0.0, -0.1],
    [-0.1, 0.0, 0.05, 0.0, 0.0, 0.0, 0.0, -0.1],
    [-0.2, -0.1, -0.1, -0.05, -0.05, -0.1, -0.1, -0.2],
];

// King middlegame - stay behind the pawns
pub const KING_MIDDLEGAME_TABLE: Table = [
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.3, -0.4, -0.4, -0.5, -0.5, -0.4, -0.4, -0.3],
    [-0.2, -0.3, -0.3, -0.4, -0.4, -0.3, -0.3, -0.2],
    [-0.1, -0.2, -0.2, -0.2, -0.2, -0.2, -0.2, -0.1],
    [0.2, 0.2, 0.0, 0.0, 0.0, 0.0, 0.2, 0.2],
    [0.2, 0.3, 0.1, 0.0, 0.0, 0.1, 0.3, 0.2],
];

// King endgame - centralize
pub const KING_ENDGAME_TABLE: Table = [
    [-0.5, -0.4, -0.3, -0.2, -0.2, -0.3, -0.4, -0.5],
    [-0.3, -0.2, -0.1, 0.0, 0.0, -0.1, -0.2, -0.3],
    [-0.3, -0.1, 0.2, 0.3, 0.3, 0.2, -0.1, -0.3],
    [-0.3, -0.1, 0.3, 0.4, 0.4, 0.3, -0.1, -0.3],
    [-0.3, -0.1, 0.3, 0.4, 0.4, 0.3, -0.1, -0.3],
    [-0.3, -0.1, 0.2, 0.3, 0.3, 0.2, -0.1, -0.3],
    [-0.3, -0.3, 0.0, 0.0, 0.0, 0.0, -0.3, -0.3],
    [-0.5, -0.3, -0.3, -0.3, -0.3, -0.3, -0.3, -0.5],
];

/// Read-only table set, indexed by [`PieceKind::index`].
///
/// The King entry is the middlegame table; the endgame table is swapped in
/// per evaluation by passing `is_endgame` to [`PieceSquareTables::value`].
#[derive(Debug, Clone)]
pub struct PieceSquareTables {
    tables: [Table; 6],
    king_endgame: Table,
}

impl Default for PieceSquareTables {
    fn default() -> Self {
        let mut tables = [[[0.0; 8]; 8]; 6];
        tables[PieceKind::King.index()] = KING_MIDDLEGAME_TABLE;
        tables[PieceKind::Rook.index()] = ROOK_TABLE;
        tables[PieceKind::Bishop.index()] = BISHOP_TABLE;
        tables[PieceKind::Queen.index()] = QUEEN_TABLE;
        tables[PieceKind::Knight.index()] = KNIGHT_TABLE;
        tables[PieceKind::Pawn.index()] = PAWN_TABLE;
        Self {
            tables,
            king_endgame: KING_ENDGAME_TABLE,
        }
    }
}

impl PieceSquareTables {
    /// Positional value of a `color` piece of `kind` on `sq`
    #[inline]
    pub fn value(&self, pos: &Position, kind: PieceKind, color: Color, sq: Square, is_endgame: bool) -> f32 {
        let table = if kind == PieceKind::King && is_endgame {
            &self.king_endgame
        } else {
            &self.tables[kind.index()]
        };
        let row = if color == pos.starter {
            sq.rank as usize
        } else {
            7 - sq.rank as usize
        };
        table[row][sq.file as usize]
    }
}

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game_repr::{Color, Move, PieceKind, Position, Square, UndoRecord};

/// Zobrist hashing keys for grid positions
///
/// One random 64-bit key per (color, kind, square), one per castle flag, one
/// per en-passant file and one for the side to move. Hashes are built by
/// XOR-ing the keys of everything present, so a move can update the hash by
/// toggling only the keys it changes.
#[derive(Debug, Clone)]
pub struct Zobrist {
    /// [color][kind][square]
    pieces: [[[u64; 64]; 6]; 2],
    /// White long, White short, Black long, Black short
    castling: [u64; 4],
    /// [file] of the pawn that can be taken en passant
    en_passant: [u64; 8],
    /// Toggled when Black is to move
    side_to_move: u64,
    /// Folded into evaluation memo keys for a Black starter
    starter: u64,
}

impl Zobrist {
    /// Generate keys from a seeded generator so runs are reproducible
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut pieces = [[[0u64; 64]; 6]; 2];
        for color in &mut pieces {
            for kind in color {
                for square in kind {
                    *square = rng.gen();
                }
            }
        }

        let mut castling = [0u64; 4];
        for key in &mut castling {
            *key = rng.gen();
        }

        let mut en_passant = [0u64; 8];
        for key in &mut en_passant {
            *key = rng.gen();
        }

        Self {
            pieces,
            castling,
            en_passant,
            side_to_move: rng.gen(),
            starter: rng.gen(),
        }
    }

    #[inline]
    fn piece_key(&self, color: Color, kind: PieceKind, sq: Square) -> u64 {
        self.pieces[color.index()][kind.index()][sq.index()]
    }

    #[inline]
    fn en_passant_key(&self, sq: Square) -> u64 {
        self.en_passant[sq.file as usize]
    }

    /// Full hash of a position, computed from scratch
    pub fn hash(&self, pos: &Position) -> u64 {
        let mut hash = 0u64;

        for (sq, piece) in pos.pieces() {
            hash ^= self.piece_key(piece.color, piece.kind, sq);
        }

        for (key, set) in self.castling.iter().zip(pos.castle_rights.flags()) {
            if set {
                hash ^= key;
            }
        }

        if let Some(ep) = pos.en_passant {
            hash ^= self.en_passant_key(ep);
        }

        if pos.side_to_move == Color::Black {
            hash ^= self.side_to_move;
        }

        hash
    }

    /// Applies `mv` to `pos` and returns the updated hash alongside the undo
    /// record. `hash` must be the hash of `pos` before the move.
    pub fn make_move(&self, pos: &mut Position, mv: &Move, hash: u64) -> (u64, UndoRecord) {
        let old_flags = pos.castle_rights.flags();
        let old_ep = pos.en_passant;

        let undo = pos.apply(mv);
        let mover = undo.mover();
        let mut hash = hash;

        hash ^= self.piece_key(mover.color, mover.kind, mv.from);
        let placed = mv.promotion_kind().unwrap_or(mover.kind);
        hash ^= self.piece_key(mover.color, placed, mv.to);

        if let (Some(cap), Some(captured)) = (mv.capture, undo.captured()) {
            hash ^= self.piece_key(captured.color, captured.kind, cap);
        }

        if let Some(ep) = old_ep {
            hash ^= self.en_passant_key(ep);
        }
        if let Some(ep) = pos.en_passant {
            hash ^= self.en_passant_key(ep);
        }

        // Only the flags this move actually cleared
        let new_flags = pos.castle_rights.flags();
        for ((key, old), new) in self.castling.iter().zip(old_flags).zip(new_flags) {
            if old != new {
                hash ^= key;
            }
        }

        hash ^= self.side_to_move;
        (hash, undo)
    }

    /// Key for the evaluation memo. Board orientation changes the score but
    /// is not part of the position hash, so fold it in here.
    #[inline]
    pub fn memo_key(&self, hash: u64, starter: Color) -> u64 {
        match starter {
            Color::White => hash,
            Color::Black => hash ^ self.starter,
        }
    }
}

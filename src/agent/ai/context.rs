use super::piece_square_tables::PieceSquareTables;
use super::zobrist::Zobrist;

/// Seed for the default Zobrist keys
pub const DEFAULT_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// Read-only data every search needs: hashing keys and evaluation tables.
/// Built once and shared between searches behind an `Arc`.
#[derive(Debug, Clone)]
pub struct EngineContext {
    pub zobrist: Zobrist,
    pub tables: PieceSquareTables,
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineContext {
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            zobrist: Zobrist::new(seed),
            tables: PieceSquareTables::default(),
        }
    }
}

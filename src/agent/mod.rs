pub mod player;
pub use player::*;

pub mod ai;
pub use ai::{BestMove, Difficulty, Engine, NegamaxPlayer, SearchConfig, SearchHandle, SearchResult};

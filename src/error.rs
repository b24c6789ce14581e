//! Error types for the engine
//!
//! Running out of moves is not an error: the search reports it as
//! [`crate::agent::ai::BestMove::NoMove`].

use std::time::Duration;

use crate::game_repr::{Color, Move, PieceKind, Square};

/// Errors raised while parsing a position string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("empty position string")]
    Empty,

    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {0} does not describe exactly 8 squares")]
    RowLength(usize),

    #[error("unknown piece letter '{0}'")]
    BadPiece(char),

    #[error("side to move must be 'w' or 'b', got '{0}'")]
    BadSide(String),

    #[error("invalid castling field '{0}'")]
    BadCastling(String),

    #[error("invalid en-passant field '{0}'")]
    BadEnPassant(String),

    #[error("{color} must have exactly one king, found {count}")]
    KingCount { color: Color, count: usize },
}

/// Errors raised when a caller-supplied move cannot be played
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no piece on {0}")]
    NoPieceAt(Square),

    #[error("{mv} is not available to {side}")]
    NotPseudoLegal { mv: Move, side: Color },

    #[error("no pawn waiting for promotion on {0}")]
    NothingToPromote(Square),

    #[error("cannot promote to {0:?}")]
    BadPromotion(PieceKind),
}

/// Errors raised by the search engine and its worker
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("search worker exited without delivering a move")]
    Disconnected,

    #[error("search worker panicked: {0}")]
    Panicked(String),

    #[error("failed to spawn search worker: {0}")]
    Spawn(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised by search configuration validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("time budget must be positive, got {0:?}")]
    ZeroBudget(Duration),

    #[error("start depth {start} exceeds max depth {max}")]
    DepthRange { start: u8, max: u8 },

    #[error("depth must be at least 1")]
    ZeroDepth,
}

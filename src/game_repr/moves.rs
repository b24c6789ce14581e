use std::fmt;

use super::{PieceKind, Square};

/// Promotion choice carried by a pawn move that reaches the far rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Promotion {
    /// Flagged by the generator, waiting for the player to pick a piece
    Undecided,
    To(PieceKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Square of the captured piece; differs from `to` only for en passant
    pub capture: Option<Square>,
    pub promotion: Option<Promotion>,
    /// Never produced by the generator; rights are tracked but castling is off
    pub castle: bool,
    pub en_passant: bool,
    pub double_push: bool,
}

impl Move {
    pub fn new(from: Square, to: Square, capture: Option<Square>) -> Move {
        Move {
            from,
            to,
            capture,
            promotion: None,
            castle: false,
            en_passant: false,
            double_push: false,
        }
    }

    pub fn quiet(from: Square, to: Square) -> Move {
        Move::new(from, to, None)
    }

    pub fn capturing(from: Square, to: Square) -> Move {
        Move::new(from, to, Some(to))
    }

    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Kind the mover becomes on `to`, if the move resolves a promotion
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match self.promotion {
            Some(Promotion::To(kind)) => Some(kind),
            _ => None,
        }
    }

    /// Same move with the promotion resolved to `kind`
    pub fn with_promotion(mut self, kind: PieceKind) -> Move {
        self.promotion = Some(Promotion::To(kind));
        self
    }

    /// True when both moves go between the same squares, ignoring the
    /// promotion choice. Used to match a clicked destination.
    pub fn same_squares(&self, other: &Move) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        match self.promotion {
            Some(Promotion::To(kind)) => write!(f, "{}", kind.to_char()),
            Some(Promotion::Undecided) => f.write_str("?"),
            None => Ok(()),
        }
    }
}

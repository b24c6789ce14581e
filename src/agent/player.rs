//! Player trait and game-end judging.
//!
//! A [`Player`] is anything that can produce a move for a side: the engine,
//! a human behind some front end, a replay. The trait has no constructor
//! since each kind of player needs different setup.
//!
//! `get_move` is synchronous and may block; a front end that must stay
//! responsive uses [`crate::agent::ai::Engine::get_best_move`] directly and
//! polls the handle instead.

use crate::game_repr::{Color, Move, Outcome, Position, UndoRecord};

/// Result of a completed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    /// The side to move had no move at all
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning color
    pub fn from_winner(winner: Color) -> Self {
        match winner {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Winner(color) => GameResult::from_winner(color),
            Outcome::Draw => GameResult::Draw,
        }
    }
}

/// Trait for entities that can provide moves
pub trait Player {
    /// Request the next move for `color` in `pos`.
    ///
    /// Returns `None` when the player has no move or gives up.
    fn get_move(&mut self, pos: &Position, color: Color) -> Option<Move>;

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {}

    fn name(&self) -> &str {
        "Player"
    }
}

/// Decide whether the game is over after a move was applied.
///
/// Taking the King wins for the mover. Otherwise, if the side now to move
/// has no move at all, the game is drawn. The verdict is stored on the
/// position (`terminal` / `winner`).
pub fn judge_after_move(pos: &mut Position, undo: &UndoRecord) -> Option<GameResult> {
    let outcome = if undo.terminal() {
        Outcome::Winner(undo.mover().color)
    } else if pos.generate_moves(pos.side_to_move).is_empty() {
        Outcome::Draw
    } else {
        return None;
    };

    pos.terminal = true;
    pos.winner = Some(outcome);
    Some(outcome.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::{PieceKind, Piece, Square};

    #[test]
    fn test_king_capture_wins() {
        let mut pos = Position::empty(Color::White);
        pos.set(Square::new(7, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        pos.set(Square::new(7, 4), Some(Piece::new(PieceKind::King, Color::White)));
        pos.set(Square::new(0, 0), Some(Piece::new(PieceKind::King, Color::Black)));

        let mv = Move::capturing(Square::new(7, 0), Square::new(0, 0));
        let undo = pos.apply(&mv);
        assert_eq!(judge_after_move(&mut pos, &undo), Some(GameResult::WhiteWins));
        assert!(pos.terminal);
        assert_eq!(pos.winner, Some(Outcome::Winner(Color::White)));
    }

    #[test]
    fn test_no_moves_is_draw() {
        // Black's lone pawn is blocked and Black has no King
        let mut pos = Position::empty(Color::White);
        pos.set(Square::new(7, 7), Some(Piece::new(PieceKind::King, Color::White)));
        pos.set(Square::new(6, 0), Some(Piece::new(PieceKind::Rook, Color::White)));
        pos.set(Square::new(2, 3), Some(Piece::new(PieceKind::Pawn, Color::Black)));
        pos.set(Square::new(3, 3), Some(Piece::new(PieceKind::Knight, Color::White)));

        let mv = Move::quiet(Square::new(6, 0), Square::new(5, 0));
        let undo = pos.apply(&mv);
        assert_eq!(judge_after_move(&mut pos, &undo), Some(GameResult::Draw));
        assert_eq!(pos.winner, Some(Outcome::Draw));
    }

    #[test]
    fn test_ongoing_game() {
        let mut pos = Position::default();
        let mv = pos.generate_moves(Color::White)[0];
        let undo = pos.apply(&mv);
        assert_eq!(judge_after_move(&mut pos, &undo), None);
        assert!(!pos.terminal);
    }
}

// Position string parsing tests

use crate::error::FenError;
use crate::game_repr::{Color, Piece, PieceKind, Position};
use super::sq;

// ==================== FEN PARSING TESTS ====================

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -";

#[test]
fn test_default_position_matches_start_fen() {
    let parsed = Position::from_fen(START_FEN, Color::White).unwrap();
    assert_eq!(parsed, Position::default());
    assert_eq!(Position::default().to_fen(), START_FEN);
}

#[test]
fn test_new_game_layout() {
    let pos = Position::new_game(Color::Black);
    // Queen on file 3, King on file 4 for both sides
    assert_eq!(pos.piece_at(sq("d1")), Some(Piece::new(PieceKind::Queen, Color::Black)));
    assert_eq!(pos.piece_at(sq("e1")), Some(Piece::new(PieceKind::King, Color::Black)));
    assert_eq!(pos.piece_at(sq("d8")), Some(Piece::new(PieceKind::Queen, Color::White)));
    assert_eq!(pos.piece_at(sq("e8")), Some(Piece::new(PieceKind::King, Color::White)));
    assert_eq!(pos.side_to_move, Color::Black);
    assert_eq!(pos.piece_count(), 32);
}

#[test]
fn test_en_passant_field_names_skipped_square() {
    let pos = Position::from_fen(
        "rnbqkbnr/pppp1ppp/8/8/4p3/8/PPPPPPPP/RNBQKBNR b KQkq e3",
        Color::White,
    );
    assert_eq!(pos, Err(FenError::BadEnPassant("e3".to_string())));

    let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3";
    let pos = Position::from_fen(fen, Color::White).unwrap();
    assert_eq!(pos.en_passant, Some(sq("e4")));
    assert_eq!(pos.to_fen(), fen);
}

#[test]
fn test_optional_fields_default() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3", Color::White).unwrap();
    assert_eq!(pos.side_to_move, Color::White);
    assert_eq!(pos.en_passant, None);
    assert!(!pos.castle_rights.long(Color::White));
    assert_eq!(pos.to_fen(), "4k3/8/8/8/8/8/8/4K3 w - -");
}

#[test]
fn test_fen_errors() {
    assert_eq!(Position::from_fen("", Color::White), Err(FenError::Empty));
    assert_eq!(Position::from_fen("8/8/8", Color::White), Err(FenError::RowCount(3)));
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K4", Color::White),
        Err(FenError::RowLength(7))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4X3", Color::White),
        Err(FenError::BadPiece('X'))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 x", Color::White),
        Err(FenError::BadSide("x".to_string()))
    );
    assert_eq!(
        Position::from_fen("4k3/8/8/8/8/8/8/4K3 w Z", Color::White),
        Err(FenError::BadCastling("Z".to_string()))
    );
    assert_eq!(
        Position::from_fen("8/8/8/8/8/8/8/4K3", Color::White),
        Err(FenError::KingCount { color: Color::Black, count: 0 })
    );
}

#[test]
fn test_display_shows_side_to_move() {
    let text = Position::default().to_string();
    assert!(text.starts_with("8  r n b q k b n r"));
    assert!(text.ends_with("White to move"));
}

use crate::game_repr::{Color, PieceKind, Position};
use super::{empty_board, has_move, place_piece, sq};

// ==================== PIECE MOVEMENT TESTS ====================

#[test]
fn test_knight_moves_center() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", PieceKind::Knight, Color::White);

    let moves = pos.piece_moves(sq("d4"));
    assert_eq!(moves.len(), 8);
    for to in ["b3", "b5", "c2", "c6", "e2", "e6", "f3", "f5"] {
        assert!(has_move(&moves, "d4", to), "Knight should reach {}", to);
    }
}

#[test]
fn test_knight_moves_corner() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", PieceKind::Knight, Color::White);

    let moves = pos.piece_moves(sq("a1"));
    assert_eq!(moves.len(), 2);
    assert!(has_move(&moves, "a1", "b3"));
    assert!(has_move(&moves, "a1", "c2"));
}

#[test]
fn test_bishop_stops_at_blockers() {
    let mut pos = empty_board();
    place_piece(&mut pos, "c1", PieceKind::Bishop, Color::White);
    place_piece(&mut pos, "e3", PieceKind::Pawn, Color::Black);
    place_piece(&mut pos, "b2", PieceKind::Pawn, Color::White);

    let moves = pos.piece_moves(sq("c1"));
    assert!(has_move(&moves, "c1", "d2"));
    assert!(has_move(&moves, "c1", "e3"), "Bishop captures the first enemy");
    assert!(!has_move(&moves, "c1", "f4"), "Bishop cannot pass through a capture");
    assert!(!has_move(&moves, "c1", "b2"), "Bishop cannot take its own piece");
    assert_eq!(moves.len(), 2);
}

#[test]
fn test_rook_moves_empty_board() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", PieceKind::Rook, Color::White);

    let moves = pos.piece_moves(sq("d4"));
    assert_eq!(moves.len(), 14);
    assert!(has_move(&moves, "d4", "d8"));
    assert!(has_move(&moves, "d4", "a4"));
    assert!(!has_move(&moves, "d4", "e5"));
}

#[test]
fn test_queen_moves_empty_board() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", PieceKind::Queen, Color::White);

    let moves = pos.piece_moves(sq("d4"));
    assert_eq!(moves.len(), 27);
}

#[test]
fn test_king_moves_one_step() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", PieceKind::King, Color::White);
    place_piece(&mut pos, "d2", PieceKind::Pawn, Color::Black);
    place_piece(&mut pos, "f2", PieceKind::Pawn, Color::White);

    let moves = pos.piece_moves(sq("e1"));
    assert_eq!(moves.len(), 4);
    assert!(has_move(&moves, "e1", "d2"));
    assert!(has_move(&moves, "e1", "d1"));
    assert!(!has_move(&moves, "e1", "f2"));
}

#[test]
fn test_king_does_not_castle() {
    let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -", Color::White).unwrap();
    let moves = pos.piece_moves(sq("e1"));
    assert!(!has_move(&moves, "e1", "g1"));
    assert!(!has_move(&moves, "e1", "c1"));
    assert!(moves.iter().all(|m| !m.castle));
}

#[test]
fn test_moves_into_check_are_kept() {
    let mut pos = empty_board();
    place_piece(&mut pos, "e1", PieceKind::King, Color::White);
    place_piece(&mut pos, "d8", PieceKind::Rook, Color::Black);

    let moves = pos.piece_moves(sq("e1"));
    assert!(has_move(&moves, "e1", "d1"), "Pseudo-legal generation keeps self-check");
}

#[test]
fn test_generate_moves_only_for_requested_side() {
    let pos = Position::default();
    let white = pos.generate_moves(Color::White);
    let black = pos.generate_moves(Color::Black);
    assert_eq!(white.len(), 20);
    assert_eq!(black.len(), 20);
    assert!(white.iter().all(|m| pos.piece_at(m.from).unwrap().color == Color::White));
    assert!(black.iter().all(|m| pos.piece_at(m.from).unwrap().color == Color::Black));
}

#[test]
fn test_empty_square_has_no_moves() {
    let pos = empty_board();
    assert!(pos.piece_moves(sq("e4")).is_empty());
}

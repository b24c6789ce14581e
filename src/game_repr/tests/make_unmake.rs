use crate::game_repr::{CastleRights, Color, PieceKind, Position};
use super::{empty_board, find_move, place_piece, sq};

// ==================== MAKE / UNMAKE TESTS ====================

#[test]
fn test_apply_flips_side_to_move() {
    let mut pos = Position::default();
    let mv = find_move(&pos.generate_moves(Color::White), "g1", "f3");
    pos.apply(&mv);
    assert_eq!(pos.side_to_move, Color::Black);
}

#[test]
fn test_unmake_restores_every_move_from_start() {
    let start = Position::default();
    let mut pos = start.clone();
    for mv in start.generate_moves(Color::White) {
        let undo = pos.apply(&mv);
        pos.unmake(&mv, undo);
        assert_eq!(pos, start, "unmake({}) should restore the position", mv);
    }
}

#[test]
fn test_unmake_restores_nested_sequence() {
    let start = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        Color::White,
    )
    .unwrap();
    let mut pos = start.clone();

    for first in start.engine_moves(Color::White) {
        let undo1 = pos.apply(&first);
        let after_first = pos.clone();
        for second in after_first.engine_moves(Color::Black) {
            let undo2 = pos.apply(&second);
            pos.unmake(&second, undo2);
            assert_eq!(pos, after_first);
        }
        pos.unmake(&first, undo1);
        assert_eq!(pos, start);
    }
}

#[test]
fn test_capture_is_recorded_and_restored() {
    let mut pos = empty_board();
    place_piece(&mut pos, "d4", PieceKind::Rook, Color::White);
    place_piece(&mut pos, "d7", PieceKind::Queen, Color::Black);

    let mv = find_move(&pos.piece_moves(sq("d4")), "d4", "d7");
    let undo = pos.apply(&mv);
    assert_eq!(undo.captured_kind(), Some(PieceKind::Queen));
    assert_eq!(undo.prior_kind(), PieceKind::Rook);
    assert!(!undo.terminal());

    pos.unmake(&mv, undo);
    assert_eq!(pos.piece_at(sq("d7")).map(|p| p.kind), Some(PieceKind::Queen));
}

#[test]
fn test_king_capture_is_terminal() {
    let mut pos = empty_board();
    place_piece(&mut pos, "a1", PieceKind::Rook, Color::White);
    place_piece(&mut pos, "a8", PieceKind::King, Color::Black);

    let mv = find_move(&pos.piece_moves(sq("a1")), "a1", "a8");
    let undo = pos.apply(&mv);
    assert!(undo.terminal());
}

#[test]
fn test_king_move_clears_both_castle_rights() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq -", Color::White).unwrap();
    let mv = find_move(&pos.piece_moves(sq("e1")), "e1", "f1");
    let undo = pos.apply(&mv);
    assert!(!pos.castle_rights.long(Color::White));
    assert!(!pos.castle_rights.short(Color::White));
    assert!(pos.castle_rights.long(Color::Black));

    pos.unmake(&mv, undo);
    assert_eq!(pos.castle_rights, CastleRights::all());
}

#[test]
fn test_rook_move_clears_one_castle_right() {
    let mut pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq -", Color::White).unwrap();
    let mv = find_move(&pos.piece_moves(sq("h8")), "h8", "h5");
    pos.apply(&mv);
    assert!(!pos.castle_rights.short(Color::Black));
    assert!(pos.castle_rights.long(Color::Black));
}

#[test]
fn test_double_push_sets_and_unmake_clears_en_passant() {
    let mut pos = Position::default();
    let mv = find_move(&pos.generate_moves(Color::White), "e2", "e4");
    let undo = pos.apply(&mv);
    assert_eq!(pos.en_passant, Some(sq("e4")));
    pos.unmake(&mv, undo);
    assert_eq!(pos.en_passant, None);
}

#[test]
#[should_panic]
fn test_apply_from_empty_square_panics() {
    let mut pos = empty_board();
    let mv = crate::game_repr::Move::quiet(sq("e2"), sq("e4"));
    pos.apply(&mv);
}

// Tests for move ordering

use crate::agent::ai::{generate_ordered_moves, move_score, order_moves};
use crate::game_repr::{Color, Move, PieceKind, Position, Square};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

#[test]
fn test_quiet_moves_keep_generator_order() {
    let pos = Position::default();
    let generated = pos.engine_moves(Color::White);
    let ordered = order_moves(&pos, generated.clone());
    assert_eq!(ordered, generated);
}

#[test]
fn test_ordering_preserves_count() {
    let pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        Color::White,
    )
    .unwrap();
    let ordered = generate_ordered_moves(&pos, Color::White, None);
    assert_eq!(ordered.len(), pos.engine_moves(Color::White).len());
}

#[test]
fn test_captures_ordered_by_victim_then_attacker() {
    // Pawn and queen can both take the rook
    let pos = Position::from_fen("4k3/8/8/3r4/2P1p3/8/8/3QK3 w - -", Color::White).unwrap();
    let moves = generate_ordered_moves(&pos, Color::White, None);

    let pawn_takes_rook = moves.iter().position(|m| m.from == sq("c4") && m.to == sq("d5")).unwrap();
    let queen_takes_rook = moves.iter().position(|m| m.from == sq("d1") && m.to == sq("d5")).unwrap();
    assert_eq!(pawn_takes_rook, 0, "cheapest attacker on the biggest victim comes first");
    assert_eq!(queen_takes_rook, 1);

    let score = move_score(&pos, &moves[0]);
    assert!((score - (5.0 - 0.1)).abs() < 1e-5);
}

#[test]
fn test_promotions_come_first() {
    let pos = Position::from_fen("4k3/P7/8/8/8/8/8/R3K3 w - -", Color::White).unwrap();
    let moves = generate_ordered_moves(&pos, Color::White, None);
    assert_eq!(moves[0].promotion_kind(), Some(PieceKind::Queen));
    assert_eq!(moves[1].promotion_kind(), Some(PieceKind::Knight));
    assert!((move_score(&pos, &moves[0]) - 19.0).abs() < 1e-5);
}

#[test]
fn test_pv_move_goes_first() {
    let pos = Position::default();
    let pv = Move {
        double_push: true,
        ..Move::quiet(sq("e2"), sq("e4"))
    };
    let moves = generate_ordered_moves(&pos, Color::White, Some(pv));
    assert_eq!(moves[0], pv);
    assert_eq!(moves.len(), 20);
    assert_eq!(moves.iter().filter(|m| **m == pv).count(), 1);
}

#[test]
fn test_unknown_pv_move_is_ignored() {
    let pos = Position::default();
    let bogus = Move::quiet(sq("e4"), sq("e5"));
    let with_pv = generate_ordered_moves(&pos, Color::White, Some(bogus));
    let without = generate_ordered_moves(&pos, Color::White, None);
    assert_eq!(with_pv, without);
}

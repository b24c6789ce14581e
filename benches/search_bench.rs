use std::sync::atomic::AtomicBool;
use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grid_chess::agent::ai::{iterative_deepening_search, static_eval, EngineContext, EvalMemo, SearchConfig, StartDepth};
use grid_chess::game_repr::{Color, Position};

fn fixed_depth(depth: u8) -> SearchConfig {
    SearchConfig {
        time_budget: Duration::from_secs(3600),
        start_depth: StartDepth::Fixed(depth),
        max_depth: depth,
    }
}

fn bench_search_depth_3(c: &mut Criterion) {
    let ctx = EngineContext::new();
    let pos = Position::default();
    let config = fixed_depth(3);
    let cancel = AtomicBool::new(false);
    c.bench_function("search depth 3 (cold memo)", |b| {
        b.iter(|| {
            let mut memo = EvalMemo::new();
            black_box(iterative_deepening_search(&ctx, &mut memo, &pos, Color::White, &config, &cancel))
        })
    });
}

fn bench_search_depth_4_middlegame(c: &mut Criterion) {
    let ctx = EngineContext::new();
    let pos = Position::from_fen(
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -",
        Color::White,
    )
    .unwrap();
    let config = fixed_depth(4);
    let cancel = AtomicBool::new(false);
    let mut memo = EvalMemo::new();
    c.bench_function("search depth 4 kiwipete (warm memo)", |b| {
        b.iter(|| black_box(iterative_deepening_search(&ctx, &mut memo, &pos, Color::White, &config, &cancel)))
    });
}

fn bench_static_eval(c: &mut Criterion) {
    let ctx = EngineContext::new();
    let pos = Position::default();
    c.bench_function("static eval", |b| {
        b.iter(|| black_box(static_eval(&pos, Color::White, &ctx)))
    });
}

criterion_group!(benches, bench_search_depth_3, bench_search_depth_4_middlegame, bench_static_eval);
criterion_main!(benches);

//! Benchmarks for rules engine performance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::board::{Color, GameState, Square};

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let mut startpos = GameState::start();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    // Open middlegame with long slider lines and both castles pending
    let mut middlegame =
        GameState::from_fen("r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5");
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let mut endgame = GameState::from_fen("8/5k2/8/8/8/8/5K2/4R3 w - - 0 1");
    group.bench_function("endgame", |b| b.iter(|| black_box(endgame.legal_moves())));

    group.finish();
}

fn bench_in_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_check");

    let positions = [
        (
            "startpos",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        ),
        (
            "middlegame",
            "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5",
        ),
        ("checked", "4r2k/8/8/8/R7/8/7P/4K3 w - - 0 1"),
    ];

    for (name, fen) in positions {
        let game = GameState::from_fen(fen);
        group.bench_with_input(BenchmarkId::new("position", name), &game, |b, game| {
            b.iter(|| black_box(game.board().in_check(Color::White).unwrap()))
        });
    }

    group.finish();
}

fn bench_make_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_move");

    group.bench_function("opening_sequence", |b| {
        b.iter(|| {
            let mut game = GameState::start();
            game.make_move(black_box(Square(1, 4)), Square(3, 4)).unwrap();
            game.make_move(Square(6, 4), Square(4, 4)).unwrap();
            game.make_move(Square(0, 6), Square(2, 5)).unwrap();
            game.make_move(Square(7, 1), Square(5, 2)).unwrap();
            black_box(game.status())
        })
    });

    group.finish();
}

fn bench_fen(c: &mut Criterion) {
    let mut group = c.benchmark_group("fen");

    let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5";
    group.bench_function("parse", |b| {
        b.iter(|| black_box(GameState::try_from_fen(black_box(fen)).unwrap()))
    });

    let game = GameState::from_fen(fen);
    group.bench_function("emit", |b| b.iter(|| black_box(game.to_fen())));

    group.finish();
}

criterion_group!(
    benches,
    bench_legal_moves,
    bench_in_check,
    bench_make_move,
    bench_fen
);
criterion_main!(benches);

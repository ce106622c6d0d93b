use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

use pawnstorm::board::{legal_moves, Color, Position};
use pawnstorm::eval::{Evaluator, ALL_HEURISTICS};
use pawnstorm::search::SearchEngine;

const MIDGAME_FEN: &str = "8/1p1p3p/2P5/1P3p2/8/5P2/3P3P/8";

fn bench_movegen_start(c: &mut Criterion) {
    let position = Position::start();
    c.bench_function("movegen_start_16_pawns", |b| {
        b.iter(|| legal_moves(black_box(&position)))
    });
}

fn bench_movegen_midgame(c: &mut Criterion) {
    let position = Position::from_fen(MIDGAME_FEN, Color::White).unwrap();
    c.bench_function("movegen_midgame", |b| {
        b.iter(|| legal_moves(black_box(&position)))
    });
}

fn bench_evaluate_full(c: &mut Criterion) {
    let evaluator = Evaluator::new(&ALL_HEURISTICS);
    let position = Position::from_fen(MIDGAME_FEN, Color::White).unwrap();
    c.bench_function("evaluate_all_heuristics", |b| {
        b.iter(|| evaluator.score(black_box(&position), black_box(Color::White)))
    });
}

fn bench_search_depth3(c: &mut Criterion) {
    let position = Position::start();
    let mut group = c.benchmark_group("search");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(10));
    group.bench_function("start_depth3_pruned", |b| {
        let mut engine = SearchEngine::with_seed(Evaluator::new(&ALL_HEURISTICS), 42);
        b.iter(|| engine.search(black_box(&position), 3, true).unwrap())
    });
    group.bench_function("start_depth3_plain", |b| {
        let mut engine = SearchEngine::with_seed(Evaluator::new(&ALL_HEURISTICS), 42);
        b.iter(|| engine.search(black_box(&position), 3, false).unwrap())
    });
    group.finish();
}

fn bench_position_apply(c: &mut Criterion) {
    let position = Position::start();
    let mv = legal_moves(&position)[0];
    c.bench_function("position_apply", |b| {
        b.iter(|| black_box(&position).apply(black_box(mv)))
    });
}

criterion_group!(
    benches,
    bench_movegen_start,
    bench_movegen_midgame,
    bench_evaluate_full,
    bench_search_depth3,
    bench_position_apply,
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_circuit::core::{evaluate, generate, Board, GameState, SimpleRng, Tile};
use tui_circuit::types::{PieceKind, Rotation};

fn bench_evaluate_full_grid(c: &mut Criterion) {
    // Worst case: a 4x4 of crosses visits every tile.
    let board = Board::new(4, 4);
    let tiles: Vec<Tile> = (0..16)
        .map(|i| Tile::new(i, PieceKind::Cross, Rotation::Deg0, false))
        .collect();

    c.bench_function("evaluate_4x4_cross", |b| {
        b.iter(|| evaluate(black_box(&board), black_box(&tiles), 0, &[3, 15], false))
    });
}

fn bench_generate_level(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_level_3", |b| {
        b.iter(|| generate(black_box(3), &mut rng).unwrap())
    });
}

fn bench_rotate_and_reevaluate(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start().unwrap();

    c.bench_function("rotate_tile", |b| {
        b.iter(|| {
            game.rotate_tile(black_box(1));
        })
    });
}

criterion_group!(
    benches,
    bench_evaluate_full_grid,
    bench_generate_level,
    bench_rotate_and_reevaluate
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{Board, GameState, Piece, SimpleRng};
use tui_blockfall::types::CellColor;

fn bench_tick(c: &mut Criterion) {
    c.bench_function("game_tick", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| black_box(state.tick()))
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(CellColor::Red));
                }
            }
            board.clear_full_rows()
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    c.bench_function("spawn_piece", |b| {
        let mut rng = SimpleRng::new(12345);
        b.iter(|| black_box(Piece::spawn(&mut rng)))
    });
}

fn bench_try_move(c: &mut Criterion) {
    c.bench_function("try_move", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| state.try_move(black_box(1), black_box(0)))
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    c.bench_function("try_rotate", |b| {
        let mut state = GameState::new(12345);
        b.iter(|| state.try_rotate())
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);

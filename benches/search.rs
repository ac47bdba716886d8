use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_ttt::core::{Board, Difficulty, GameRng, Mark, Settings};
use rust_ttt::search::{best_move, reachable_positions, select_move};

fn bench_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");
    let positions = [
        ("empty", Board::empty()),
        ("corner_opening", "X../.../...".parse::<Board>().unwrap()),
        ("midgame", "X.O/.X./..O".parse::<Board>().unwrap()),
    ];

    for (name, board) in positions {
        let mark = board.next_mark();
        group.bench_with_input(BenchmarkId::from_parameter(name), &board, |b, board| {
            b.iter(|| best_move(black_box(board), mark).unwrap())
        });
    }
    group.finish();
}

fn bench_select_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("select_move");
    let board: Board = "X../.../...".parse().unwrap();

    for difficulty in Difficulty::ALL {
        let settings = Settings::new(Mark::O, difficulty);
        let mut rng = GameRng::new(42);
        group.bench_function(difficulty.name(), |b| {
            b.iter(|| select_move(black_box(&board), &settings, &mut rng).unwrap())
        });
    }
    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    c.bench_function("reachable_positions", |b| b.iter(|| reachable_positions().len()));
}

criterion_group!(benches, bench_best_move, bench_select_move, bench_enumerate);
criterion_main!(benches);

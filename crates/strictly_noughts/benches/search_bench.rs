use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use strictly_noughts::{best_move, Board, GameStatus, Player};

fn bench_empty_board() {
    best_move(black_box(&Board::new()), Player::X).ok();
}

fn bench_after_opening() {
    let board: Board = "... .O. ...".parse().unwrap_or_default();
    best_move(black_box(&board), Player::X).ok();
}

fn bench_full_game() {
    let mut board = Board::new();
    let mut to_move = Player::X;
    while board.status() == GameStatus::InProgress {
        let Ok(pos) = best_move(&board, to_move) else {
            break;
        };
        if board.place(pos, to_move).is_err() {
            break;
        }
        to_move = to_move.opponent();
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");
    group.sample_size(10);

    group.bench_function("empty_board", |b| b.iter(bench_empty_board));
    group.bench_function("after_opening", |b| b.iter(bench_after_opening));
    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);

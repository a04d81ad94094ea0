use criterion::{Criterion, criterion_group, criterion_main};

use common::game::{GameOutcome, Mark, empty_board, evaluate, select_move};

fn bench_select_move_empty_board(c: &mut Criterion) {
    c.bench_function("select_move_empty_board", |b| {
        let board = empty_board();
        b.iter(|| select_move(&board, Mark::O));
    });
}

fn bench_select_move_midgame(c: &mut Criterion) {
    c.bench_function("select_move_midgame", |b| {
        let mut board = empty_board();
        board[4] = Mark::X;
        board[0] = Mark::O;
        board[8] = Mark::X;
        b.iter(|| select_move(&board, Mark::O));
    });
}

fn bench_self_play_full_game(c: &mut Criterion) {
    c.bench_function("self_play_full_game", |b| {
        b.iter(|| {
            let mut board = empty_board();
            let mut side = Mark::X;
            while evaluate(&board) == GameOutcome::InProgress {
                let cell = select_move(&board, side).expect("in-progress board has a move");
                board[cell] = side;
                side = side.opponent().expect("side is never empty");
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_select_move_empty_board,
    bench_select_move_midgame,
    bench_self_play_full_game
);
criterion_main!(benches);

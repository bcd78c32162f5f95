use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_blockfall::core::{check_shift, Board};
use tui_blockfall::types::Direction;

fn bench_update(c: &mut Criterion) {
    c.bench_function("update_until_game_over", |b| {
        b.iter(|| {
            let mut board = Board::new(black_box(20), black_box(10)).unwrap();
            while !board.is_game_over() {
                board.update();
            }
            board
        })
    });
}

fn bench_move_piece(c: &mut Criterion) {
    let mut board = Board::new(20, 10).unwrap();
    board.update();

    c.bench_function("move_piece_left_right", |b| {
        b.iter(|| {
            board.move_piece(black_box(Direction::Left));
            board.move_piece(black_box(Direction::Right));
        })
    });
}

fn bench_check_shift(c: &mut Criterion) {
    let mut board = Board::new(20, 10).unwrap();
    board.update();
    let cells = board.active().map(|a| a.cells.clone()).unwrap_or_default();

    c.bench_function("check_shift_down", |b| {
        b.iter(|| check_shift(board.grid(), black_box(&cells), 1, 0))
    });
}

fn bench_display(c: &mut Criterion) {
    let mut board = Board::new(20, 10).unwrap();
    for _ in 0..50 {
        board.update();
    }

    c.bench_function("board_to_string", |b| b.iter(|| black_box(&board).to_string()));
}

criterion_group!(
    benches,
    bench_update,
    bench_move_piece,
    bench_check_shift,
    bench_display
);
criterion_main!(benches);

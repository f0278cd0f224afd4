use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{clear_lines, is_valid_placement, Board, ScoreTable, Shape};
use blockfall::engine::{check_game_over, perform_line_clearing, EngineConfig};
use blockfall::types::{ColorName, GameMode, BOARD_SIZE};

fn almost_full_board() -> Board {
    let mut board = Board::new();
    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            if (row, col) != (5, 5) {
                board.set_block(row, col, Some(ColorName::Blue));
            }
        }
    }
    board
}

fn bench_clear_pass(c: &mut Criterion) {
    let mut board = Board::new();
    // Four full rows and one full column.
    for row in 0..4 {
        for col in 0..BOARD_SIZE as i8 {
            board.set_block(row, col, Some(ColorName::Orange));
        }
    }
    for row in 0..BOARD_SIZE as i8 {
        board.set_block(row, 0, Some(ColorName::Teal));
    }
    let scores = ScoreTable::default();

    c.bench_function("clear_4_rows_1_col", |b| {
        b.iter(|| clear_lines(black_box(&board), &scores))
    });
}

fn bench_perform_line_clearing(c: &mut Criterion) {
    let mut board = Board::new();
    for col in 0..BOARD_SIZE as i8 {
        board.set_block(0, col, Some(ColorName::Red));
    }
    let config = EngineConfig::default();

    c.bench_function("full_clearing_pass", |b| {
        b.iter(|| perform_line_clearing(black_box(&board), 0, &config))
    });
}

fn bench_placement_check(c: &mut Criterion) {
    let board = almost_full_board();
    let square = Shape::from_offsets(ColorName::Red, &[(0, 0), (0, 1), (1, 0), (1, 1)]);

    c.bench_function("is_valid_placement", |b| {
        b.iter(|| is_valid_placement(black_box(&square), 4, 4, &board, GameMode::Classic))
    });
}

fn bench_game_over_search(c: &mut Criterion) {
    let board = almost_full_board();
    // Worst case: nothing fits, every position is probed for all rotations.
    let shapes = [
        Shape::from_offsets(ColorName::Red, &[(0, 0), (0, 1), (1, 0), (1, 1)]),
        Shape::from_offsets(ColorName::Green, &[(0, 0), (0, 1), (0, 2)]),
        Shape::from_offsets(ColorName::Blue, &[(0, 0), (1, 0), (1, 1)]),
    ];
    let unlocked = [true, true, true];

    c.bench_function("game_over_search", |b| {
        b.iter(|| check_game_over(black_box(&board), &shapes, &unlocked, GameMode::Classic))
    });
}

criterion_group!(
    benches,
    bench_clear_pass,
    bench_perform_line_clearing,
    bench_placement_check,
    bench_game_over_search
);
criterion_main!(benches);

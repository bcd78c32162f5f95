//! Property tests for the board state machine.
//!
//! Random sequences of moves and gravity ticks on random board sizes must keep:
//! - the active footprint in bounds, on one row, four adjacent columns, and
//!   written into the grid with the piece's value
//! - the filled cell count equal to four per successful spawn (nothing clears)
//! - blocked or ignored calls leaving the board untouched
//! - accepted shifts changing exactly the two edge cells
//! - game over terminal: once set, no call changes the board again

use proptest::prelude::*;
use tui_blockfall::core::{Board, Status};
use tui_blockfall::types::{Direction, PIECE_CELLS};

#[derive(Debug, Clone, Copy)]
enum Op {
    Left,
    Right,
    Tick,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Left), Just(Op::Right), Just(Op::Tick)]
}

fn apply(board: &mut Board, op: Op) -> Status {
    match op {
        Op::Left => board.move_piece(Direction::Left),
        Op::Right => board.move_piece(Direction::Right),
        Op::Tick => board.update(),
    }
}

fn filled(board: &Board) -> usize {
    board.grid().cells().iter().filter(|&&v| v != 0).count()
}

fn changed_cells(a: &Board, b: &Board) -> usize {
    a.grid()
        .cells()
        .iter()
        .zip(b.grid().cells())
        .filter(|(x, y)| x != y)
        .count()
}

fn assert_footprint_ok(board: &Board) {
    let Some(active) = board.active() else {
        return;
    };
    assert_eq!(active.cells.len(), PIECE_CELLS);

    let row = active.cells[0].row;
    let first_col = active.cells[0].col;
    for (i, cell) in active.cells.iter().enumerate() {
        assert_eq!(cell.row, row);
        assert_eq!(cell.col, first_col + i);
        assert!(cell.row < board.height() && cell.col < board.width());
        assert_eq!(board.get(cell.row, cell.col), Some(active.value()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn board_invariants_hold(
        height in 4usize..24,
        width in 4usize..16,
        ops in prop::collection::vec(op(), 0..400),
    ) {
        let mut board = Board::new(height, width).unwrap();
        let mut spawns = 0usize;

        for op in ops {
            let before = board.clone();
            let was_over = board.is_game_over();
            let status = apply(&mut board, op);

            if was_over {
                prop_assert_eq!(&status, &Status::Ignored);
                prop_assert_eq!(&board, &before);
                continue;
            }

            match &status {
                Status::Spawned { .. } => spawns += 1,
                Status::Moved { .. } => prop_assert_eq!(changed_cells(&before, &board), 2),
                Status::MovedDown(_) => {
                    prop_assert_eq!(changed_cells(&before, &board), 2 * PIECE_CELLS)
                }
                Status::Ignored | Status::BlockedByWall(_) | Status::BlockedByPiece => {
                    prop_assert_eq!(&board, &before)
                }
                Status::Settled => {
                    prop_assert_eq!(changed_cells(&before, &board), 0);
                    prop_assert!(board.active().is_none());
                }
                Status::GameOver => {
                    prop_assert!(board.is_game_over());
                    prop_assert_eq!(changed_cells(&before, &board), 0);
                }
            }

            prop_assert_eq!(filled(&board), spawns * PIECE_CELLS);
            prop_assert_eq!(board.score(), 0);
            assert_footprint_ok(&board);
        }
    }

    #[test]
    fn ticks_alone_always_end_the_game(height in 4usize..12, width in 4usize..12) {
        let mut board = Board::new(height, width).unwrap();
        // Each bar needs at most height + 2 ticks; one bar per row fits.
        let budget = (height + 2) * (height + 1);
        for _ in 0..budget {
            board.update();
        }
        prop_assert!(board.is_game_over());
        prop_assert_eq!(filled(&board), height * PIECE_CELLS);
    }
}

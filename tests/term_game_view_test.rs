use tui_blockfall::core::Board;
use tui_blockfall::term::{GameView, Palette, StatusLog, Viewport};
use tui_blockfall::types::{ColorName, Direction};

fn spawned(height: usize, width: usize) -> Board {
    let mut board = Board::new(height, width).unwrap();
    board.update();
    board
}

#[test]
fn term_view_renders_border_corners() {
    let board = Board::new(20, 10).unwrap();
    let view = GameView::default();

    // Frame is 2 * 10 + 2 wide and 20 + 2 tall, centered on 80x24:
    // left = 40 - 11, top = 12 - 11.
    let fb = view.render(&board, &StatusLog::new(8), Viewport::new(80, 24));

    assert_eq!(fb.get(29, 1).unwrap().ch, '╔');
    assert_eq!(fb.get(50, 1).unwrap().ch, '╗');
    assert_eq!(fb.get(29, 22).unwrap().ch, '╚');
    assert_eq!(fb.get(50, 22).unwrap().ch, '╝');
    assert_eq!(fb.get(30, 1).unwrap().ch, '═');
    assert_eq!(fb.get(29, 2).unwrap().ch, '║');
}

#[test]
fn term_view_renders_piece_two_columns_wide() {
    let board = spawned(20, 10);
    let palette = Palette::classic();
    let view = GameView::new(palette);
    let fb = view.render(&board, &StatusLog::new(8), Viewport::new(80, 24));

    // Inside the border the origin is (30, 2); the bar covers columns 3..=6.
    let cyan = palette.cell_style(ColorName::Cyan);
    for x in 36..44 {
        let cell = fb.get(x, 2).unwrap();
        assert_eq!(cell.ch, '■');
        assert_eq!(cell.style, cyan);
    }

    let background = palette.cell_style(ColorName::Background);
    assert_eq!(fb.get(34, 2).unwrap().style, background);
    assert_eq!(fb.get(44, 2).unwrap().style, background);
}

#[test]
fn term_view_follows_board_moves() {
    let mut board = spawned(20, 10);
    board.move_piece(Direction::Left);
    board.update();

    let palette = Palette::classic();
    let fb = GameView::new(palette).render(&board, &StatusLog::new(8), Viewport::new(80, 24));

    let cyan = palette.cell_style(ColorName::Cyan);
    assert_ne!(fb.get(34, 2).unwrap().style, cyan);
    assert_eq!(fb.get(34, 3).unwrap().style, cyan);
    assert_eq!(fb.get(41, 3).unwrap().style, cyan);
}

#[test]
fn term_view_log_is_newest_first_and_truncated() {
    let board = spawned(20, 10);
    let mut log = StatusLog::new(8);
    log.push("older line");
    log.push("Summoned piece 1 at [[0, 3], [0, 4], [0, 5], [0, 6]]");

    let fb = GameView::default().render(&board, &log, Viewport::new(80, 24));

    // 28 columns fit left of the board frame.
    let top: String = fb.row_text(0).chars().take(29).collect();
    assert_eq!(top, "Summoned piece 1 at [[0, 3], ");
    let second: String = fb.row_text(1).chars().take(10).collect();
    assert_eq!(second, "older line");
}

#[test]
fn term_view_draws_warning_bottom_right() {
    let board = spawned(20, 10);
    let palette = Palette::classic();
    let mut fb = tui_blockfall::term::FrameBuffer::new(0, 0);
    GameView::new(palette).render_into_with_warning(
        &board,
        &StatusLog::new(8),
        Some("UNKNOWN KEY: x"),
        Viewport::new(80, 24),
        &mut fb,
    );

    assert!(fb.row_text(23).ends_with("UNKNOWN KEY: x "));
    assert_eq!(fb.get(65, 23).unwrap().style, palette.warning);
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = Board::new(4, 4).unwrap();
    while !board.is_game_over() {
        board.update();
    }

    let fb = GameView::default().render(&board, &StatusLog::new(8), Viewport::new(80, 24));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("r: retry  q: quit"));
}

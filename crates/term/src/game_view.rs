//! GameView: maps a `core::Board` and the status log into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout:
//!
//! ```text
//! newest log line          ╔════════════════════╗
//! older log line           ║■■■■■■■■■■■■■■■■■■■■║
//! ...                      ║■■■■■■■■■■■■■■■■■■■■║
//!                          ╚════════════════════╝
//!                                       UNKNOWN KEY: x
//! ```

use crate::core::Board;
use crate::fb::{CellStyle, FrameBuffer};
use crate::log::StatusLog;
use crate::palette::Palette;
use crate::types::ColorName;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame lands for a given viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Column of the left border
    pub left: u16,
    /// Row of the top border
    pub top: u16,
    /// `2 * width + 2`
    pub frame_w: u16,
    /// `height + 2`
    pub frame_h: u16,
}

impl BoardLayout {
    /// Columns available to the log, left of the board
    pub fn log_width(&self) -> u16 {
        self.left.saturating_sub(1)
    }
}

/// A lightweight terminal view of the board.
pub struct GameView {
    palette: Palette,
    /// Board cell width in terminal columns.
    cell_w: u16,
    glyph: char,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

impl GameView {
    pub fn new(palette: Palette) -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            palette,
            cell_w: 2,
            glyph: '■',
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Board frame centered on the viewport.
    pub fn layout(&self, board: &Board, viewport: Viewport) -> BoardLayout {
        let width = clamp_u16(board.width());
        let height = clamp_u16(board.height());

        BoardLayout {
            left: (viewport.width / 2).saturating_sub(width.saturating_add(1)),
            top: (viewport.height / 2).saturating_sub(height / 2 + 1),
            frame_w: width.saturating_mul(self.cell_w).saturating_add(2),
            frame_h: height.saturating_add(2),
        }
    }

    /// Render the board and log into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        board: &Board,
        log: &StatusLog,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.render_into_with_warning(board, log, None, viewport, fb);
    }

    pub fn render_into_with_warning(
        &self,
        board: &Board,
        log: &StatusLog,
        warning: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.text.into_cell(' '));

        let layout = self.layout(board, viewport);

        self.draw_border(fb, layout);

        for (row, cells) in board.rows().enumerate() {
            for (col, &value) in cells.iter().enumerate() {
                let name = board.color_name(value).unwrap_or(ColorName::Background);
                self.draw_board_cell(fb, layout, row, col, self.palette.cell_style(name));
            }
        }

        self.draw_log(fb, log, layout, viewport);

        if let Some(text) = warning {
            let w = text.chars().count() as u16;
            let x = viewport.width.saturating_sub(w.saturating_add(1));
            fb.put_str(x, viewport.height.saturating_sub(1), text, self.palette.warning);
        }

        if board.is_game_over() {
            self.draw_overlay_text(fb, layout, 0, "GAME OVER");
            self.draw_overlay_text(fb, layout, 1, "r: retry  q: quit");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, board: &Board, log: &StatusLog, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(board, log, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, layout: BoardLayout) {
        let BoardLayout {
            left: x,
            top: y,
            frame_w: w,
            frame_h: h,
        } = layout;
        let style = self.palette.border;

        let right = x.saturating_add(w - 1);
        let bottom = y.saturating_add(h - 1);

        fb.put_char(x, y, '╔', style);
        fb.put_char(right, y, '╗', style);
        fb.put_char(x, bottom, '╚', style);
        fb.put_char(right, bottom, '╝', style);

        for dx in 1..w - 1 {
            fb.put_char(x.saturating_add(dx), y, '═', style);
            fb.put_char(x.saturating_add(dx), bottom, '═', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y.saturating_add(dy), '║', style);
            fb.put_char(right, y.saturating_add(dy), '║', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: BoardLayout,
        row: usize,
        col: usize,
        style: CellStyle,
    ) {
        let px = layout
            .left
            .saturating_add(1)
            .saturating_add(clamp_u16(col).saturating_mul(self.cell_w));
        let py = layout.top.saturating_add(1).saturating_add(clamp_u16(row));
        fb.fill_rect(px, py, self.cell_w, 1, self.glyph, style);
    }

    fn draw_log(&self, fb: &mut FrameBuffer, log: &StatusLog, layout: BoardLayout, viewport: Viewport) {
        let max = layout.log_width();
        if max == 0 {
            return;
        }
        for (y, line) in (0..viewport.height).zip(log.iter()) {
            fb.put_str_max(0, y, line, max, self.palette.text);
        }
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, layout: BoardLayout, line: u16, text: &str) {
        let mid_y = layout.top.saturating_add(layout.frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = layout
            .left
            .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y, text, self.palette.text.bold());
    }
}

fn clamp_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

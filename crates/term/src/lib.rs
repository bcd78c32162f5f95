//! Terminal rendering for the falling-block game.
//!
//! Renders into a simple framebuffer that is diffed and flushed to the
//! terminal through crossterm. The view only reads the board.
//!
//! - [`fb`]: styled character framebuffer
//! - [`palette`]: concrete colors for the board's color names
//! - [`log`]: newest-first status log
//! - [`game_view`]: board frame, cells, log column, warning line
//! - [`renderer`]: raw mode / alternate screen and diff flushing

pub mod fb;
pub mod game_view;
pub mod log;
pub mod palette;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{BoardLayout, GameView, Viewport};
pub use log::StatusLog;
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

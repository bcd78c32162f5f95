//! TUI Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_blockfall::{core,input,term,types}`
//! and adds the pieces the binary needs: configuration, logging setup and the
//! [`Session`] that ties the board, the key map and the status log together.

pub mod config;
pub mod logging;
pub mod session;

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;

pub use config::GameConfig;
pub use session::{Flow, Session};

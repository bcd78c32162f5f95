//! One play session: a board plus the controller and log glue around it.
//!
//! The session is terminal-free so the game loop's behavior (key handling,
//! logging, game over, retry) can be tested directly. The binary only adds
//! event polling, the gravity timer and drawing.

use crossterm::event::KeyEvent;
use tracing::{info, warn};

use crate::config::GameConfig;
use crate::core::{Board, BoardError, Status};
use crate::input::{key_label, map_key, KeyIntent};
use crate::term::StatusLog;

/// Whether the game loop should keep running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    board: Board,
    log: StatusLog,
    warning: Option<String>,
    game_over_reported: bool,
}

impl Session {
    /// Build the board and run the first `update`, which spawns a piece.
    pub fn new(config: &GameConfig) -> Result<Self, BoardError> {
        let board = Board::new(config.height, config.width)?;
        let mut session = Self {
            board,
            log: StatusLog::new(config.log_capacity),
            warning: None,
            game_over_reported: false,
        };
        info!(height = config.height, width = config.width, "session started");
        session.tick();
        Ok(session)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn log(&self) -> &StatusLog {
        &self.log
    }

    /// Bottom-line warning for the last unknown key, if any
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// Gravity timer fired.
    pub fn tick(&mut self) {
        let status = self.board.update();
        self.record(&status);
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Flow, BoardError> {
        let intent = map_key(key);

        if self.board.is_game_over() {
            return match intent {
                KeyIntent::Quit => Ok(Flow::Quit),
                KeyIntent::Retry => {
                    self.retry()?;
                    Ok(Flow::Continue)
                }
                _ => Ok(Flow::Continue),
            };
        }

        match intent {
            KeyIntent::Quit => return Ok(Flow::Quit),
            KeyIntent::Move(direction) => {
                self.log.push(format!("Key pressed: {}", key_label(key)));
                self.warning = None;
                let status = self.board.move_piece(direction);
                self.record(&status);
            }
            KeyIntent::Inert => {
                self.log.push(format!("Key pressed: {}", key_label(key)));
                self.warning = None;
            }
            // Retry only means something once the game is over.
            KeyIntent::Retry | KeyIntent::Unknown => {
                let text = format!("UNKNOWN KEY: {}", key_label(key));
                warn!(key = %key_label(key), "unknown key");
                self.log.push(text.clone());
                self.warning = Some(text);
            }
        }
        Ok(Flow::Continue)
    }

    /// Fresh board with the same size. The status log carries over.
    fn retry(&mut self) -> Result<(), BoardError> {
        info!(score = self.board.score(), "retry");
        self.board = Board::new(self.board.height(), self.board.width())?;
        self.warning = None;
        self.game_over_reported = false;
        self.tick();
        Ok(())
    }

    fn record(&mut self, status: &Status) {
        if !status.is_empty() {
            self.log.push(status.to_string());
        }
        if self.board.is_game_over() && !self.game_over_reported {
            self.game_over_reported = true;
            self.log
                .push(format!("Game over, score {}", self.board.score()));
        }
    }
}

/// Errors raised while constructing a board.
///
/// Both axes must lie within [`MIN_BOARD_DIMENSION`](crate::types::MIN_BOARD_DIMENSION)
/// and [`MAX_BOARD_DIMENSION`](crate::types::MAX_BOARD_DIMENSION).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board needs to be 4x4 minimum (got {height}x{width})")]
    TooSmall { height: usize, width: usize },
    #[error("board can be at most 1024x1024 (got {height}x{width})")]
    TooLarge { height: usize, width: usize },
}

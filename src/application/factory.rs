//! Board construction with default-size fallback

use tracing::debug;

use crate::domain::{validate_size, Board, DEFAULT_BOARD_SIZE};

/// Build a board for `size`, substituting the default size when it is out of bounds.
///
/// The validation error is logged and dropped; this never fails.
pub fn create_board(size: i64) -> Board {
    if let Err(e) = validate_size(size) {
        debug!("create_board: size={} rejected ({}), using {}", size, e, DEFAULT_BOARD_SIZE);
        return Board::new(DEFAULT_BOARD_SIZE);
    }
    // in bounds, hence non-negative
    Board::new(size as usize)
}

//! Board value and size bounds

use crate::domain::DomainError;

/// Side length used when no size is given or the requested one is rejected.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Smallest accepted side length.
pub const MIN_BOARD_SIZE: usize = 4;

/// Largest accepted side length.
pub const MAX_BOARD_SIZE: usize = 100;

const _: () = assert!(
    MIN_BOARD_SIZE > 0 && MIN_BOARD_SIZE <= DEFAULT_BOARD_SIZE && DEFAULT_BOARD_SIZE <= MAX_BOARD_SIZE
);

/// A square board, described only by its side length.
///
/// The size is fixed at construction. `Board::new` does not check bounds;
/// use [`crate::application::create_board`] to get a board that honours them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    size: usize,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Check a requested side length against the fixed bounds.
///
/// Accepts any integer, including negative and arbitrarily large values.
pub fn validate_size(size: i64) -> Result<(), DomainError> {
    if size < MIN_BOARD_SIZE as i64 {
        return Err(DomainError::TooSmall {
            min: MIN_BOARD_SIZE,
        });
    }
    if size > MAX_BOARD_SIZE as i64 {
        return Err(DomainError::TooLarge {
            max: MAX_BOARD_SIZE,
        });
    }
    Ok(())
}

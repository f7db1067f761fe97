//! Domain layer: board value, size bounds and pattern rendering
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod board;
pub mod error;
pub mod pattern;

pub use board::{validate_size, Board, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use error::DomainError;
pub use pattern::{render, render_with, Cell, Palette};

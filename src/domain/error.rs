//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent board size violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("board size cannot be less than {min}")]
    TooSmall { min: usize },

    #[error("board size cannot exceed {max}")]
    TooLarge { max: usize },
}

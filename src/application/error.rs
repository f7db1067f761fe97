//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add input and config failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("negative numbers are not supported: '{0}'")]
    NegativeNotSupported(String),

    #[error("fractional numbers are not supported: '{0}'")]
    FractionalNotSupported(String),

    #[error("invalid number format: '{0}'")]
    InvalidFormat(String),

    #[error("config error: {message}")]
    Config { message: String },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

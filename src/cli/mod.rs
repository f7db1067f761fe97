//! CLI layer: argument parsing and command dispatch

pub mod args;
pub mod commands;
pub mod error;

pub use args::Cli;
pub use commands::{execute_command, run, version_line};
pub use error::{CliError, CliResult};

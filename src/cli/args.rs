//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

/// Print an NxN checkerboard pattern
#[derive(Parser, Debug)]
#[command(name = "chessboard")]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Board side length (4..=100, default 8)
    #[arg(allow_hyphen_values = true)]
    pub size: Option<String>,

    /// Anything after the size is ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Print version, commit and build date, then exit
    #[arg(long)]
    pub version: bool,

    /// Log verbosity on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (TOML)
    #[arg(short, long, env = "CHESSBOARD_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML, then exit
    #[arg(long)]
    pub print_config: bool,

    /// Generate shell completions
    #[arg(long = "generate", value_enum)]
    pub generator: Option<clap_complete::Shell>,
}

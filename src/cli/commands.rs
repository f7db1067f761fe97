use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::application::{board_report, create_board, select_size, SizeSource};
use crate::cli::args::Cli;
use crate::cli::error::{CliError, CliResult};
use crate::config::Settings;
use crate::domain::{Palette, DEFAULT_BOARD_SIZE};

/// `chessboard version <v>, commit <c>, built <d>`.
///
/// Commit and date are taken from `CHESSBOARD_COMMIT` / `CHESSBOARD_BUILD_DATE`
/// at compile time.
pub fn version_line() -> String {
    format!(
        "chessboard version {}, commit {}, built {}",
        env!("CARGO_PKG_VERSION"),
        option_env!("CHESSBOARD_COMMIT").unwrap_or("none"),
        option_env!("CHESSBOARD_BUILD_DATE").unwrap_or("unknown"),
    )
}

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let config_file = cli.config.as_deref().map(|p| {
        PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
    });
    let settings = Settings::load(config_file.as_deref())?;
    debug!("settings: {:?}", settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.print_config {
        let toml = settings.to_toml()?;
        return write!(out, "{}", toml).map_err(|e| CliError::io("write config", e));
    }

    if !cli.rest.is_empty() {
        debug!("ignoring extra arguments: {:?}", cli.rest);
    }

    let palette = settings.palette()?;
    run(cli.size.as_deref(), &palette, &mut out)
}

/// Select a size, build the board and write the report to `out`.
///
/// Bad input never fails this: it is reported on `out` and the default size
/// is used instead. Only write failures are returned.
#[instrument(skip(palette, out))]
pub fn run<W: Write>(size_arg: Option<&str>, palette: &Palette, out: &mut W) -> CliResult<()> {
    let selection = select_size(size_arg);
    let d = DEFAULT_BOARD_SIZE;

    match &selection.source {
        SizeSource::Argument => {}
        SizeSource::Default => {
            writeln!(out, "Using default size {d}x{d}")
                .map_err(|e| CliError::io("write notice", e))?;
        }
        SizeSource::Rejected(reason) => {
            writeln!(out, "Error: {reason}. Using default size {d}x{d}.")
                .map_err(|e| CliError::io("write notice", e))?;
        }
    }

    let board = create_board(selection.size);
    debug!("run: board size {}", board.size());
    writeln!(out, "{}", board_report(&board, palette)).map_err(|e| CliError::io("write board", e))
}

//! Size selection and report assembly for one invocation

use tracing::debug;

use crate::application::{parse_board_size, ApplicationError};
use crate::domain::{render_with, Board, Palette, DEFAULT_BOARD_SIZE};

/// Where the selected size came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSource {
    /// Parsed from the argument and accepted.
    Argument,
    /// No argument was given.
    Default,
    /// An argument was given but refused; the default size replaces it.
    Rejected(ApplicationError),
}

/// Size chosen at the input boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizeSelection {
    pub size: i64,
    pub source: SizeSource,
}

/// Choose the board size from an optional raw argument.
///
/// Never fails: any parse or validation error degrades to the default size
/// and is kept in [`SizeSource::Rejected`] for reporting.
pub fn select_size(arg: Option<&str>) -> SizeSelection {
    let default = DEFAULT_BOARD_SIZE as i64;
    match arg {
        None => SizeSelection {
            size: default,
            source: SizeSource::Default,
        },
        Some(raw) => match parse_board_size(raw) {
            Ok(size) => SizeSelection {
                size,
                source: SizeSource::Argument,
            },
            Err(e) => {
                debug!("select_size: rejected {:?}: {}", raw, e);
                SizeSelection {
                    size: default,
                    source: SizeSource::Rejected(e),
                }
            }
        },
    }
}

/// Header line followed by the rendered pattern.
pub fn board_report(board: &Board, palette: &Palette) -> String {
    let n = board.size();
    format!("Chessboard {n}x{n}:\n{}", render_with(board, palette))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_argument_when_selecting_then_default_source() {
        let selection = select_size(None);
        assert_eq!(selection.size, 8);
        assert_eq!(selection.source, SizeSource::Default);
    }

    #[test]
    fn given_valid_argument_when_selecting_then_argument_source() {
        let selection = select_size(Some("12"));
        assert_eq!(selection.size, 12);
        assert_eq!(selection.source, SizeSource::Argument);
    }

    #[test]
    fn given_bad_argument_when_selecting_then_rejected_with_default_size() {
        let selection = select_size(Some("abc"));
        assert_eq!(selection.size, 8);
        assert_eq!(
            selection.source,
            SizeSource::Rejected(ApplicationError::InvalidFormat("abc".into()))
        );
    }

    #[test]
    fn given_board_when_reporting_then_header_precedes_pattern() {
        let report = board_report(&Board::new(4), &Palette::default());
        assert_eq!(report, "Chessboard 4x4:\n # #\n# # \n # #\n# # ");
    }
}

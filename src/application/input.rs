//! Strict parsing of the board size argument

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::validate_size;

/// Parse a raw size token.
///
/// Rules, in order:
/// 1. surrounding whitespace is trimmed
/// 2. a leading `-` is rejected as negative
/// 3. any `.` or `,` is rejected as fractional
/// 4. anything that is not an integer is rejected as malformed
/// 5. the integer must pass [`validate_size`]
pub fn parse_board_size(input: &str) -> ApplicationResult<i64> {
    let input = input.trim();
    debug!("parse_board_size: input={:?}", input);

    if input.starts_with('-') {
        return Err(ApplicationError::NegativeNotSupported(input.to_string()));
    }
    if input.contains(['.', ',']) {
        return Err(ApplicationError::FractionalNotSupported(input.to_string()));
    }

    let size: i64 = input
        .parse()
        .map_err(|_| ApplicationError::InvalidFormat(input.to_string()))?;

    validate_size(size)?;
    Ok(size)
}

//! Application layer: use cases around the board domain
//!
//! Parses raw input, applies the default-size fallback and assembles output text.

pub mod error;
pub mod factory;
pub mod input;
pub mod session;

pub use error::{ApplicationError, ApplicationResult};
pub use factory::create_board;
pub use input::parse_board_size;
pub use session::{board_report, select_size, SizeSelection, SizeSource};

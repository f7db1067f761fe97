//! chessboard: print an NxN checkerboard pattern
//!
//! Layers, innermost first: [`domain`] (board, bounds, rendering),
//! [`application`] (parsing, fallback, report), [`config`], [`cli`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

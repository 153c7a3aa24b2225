//! Terminal output formatting
//!
//! Display utilities for the line-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_puzzle_header, print_result, print_score, print_stats};

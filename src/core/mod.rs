//! Core domain types for Formulaic
//!
//! Symbols, codes and feedback scoring. Everything here is pure and has no
//! knowledge of dates, storage or presentation.

mod code;
mod feedback;
mod symbol;

pub use code::{CODE_LENGTH, Code, CodeError};
pub use feedback::{EXACT_GLYPH, Feedback, PARTIAL_GLYPH};
pub use symbol::{PALETTE, PALETTE_SIZE, Symbol, UnknownSymbol};

/// Maximum number of guesses per daily game
pub const MAX_GUESSES: usize = 9;

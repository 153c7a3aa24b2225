//! Guess scoring
//!
//! Feedback counts how many guess symbols sit in the right position (exact) and
//! how many of the rest appear elsewhere in the secret (partial). Partial credit
//! is capped by multiplicity, so a symbol guessed twice but hidden once earns at
//! most one partial.
//!
//! Stored records keep the browser game's field names: `black` for exact and
//! `white` for partial.

use super::code::{CODE_LENGTH, Code};
use super::symbol::Symbol;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph for one exact match
pub const EXACT_GLYPH: &str = "⚫";

/// Glyph for one partial match
pub const PARTIAL_GLYPH: &str = "⚪";

/// Score of a guess against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Feedback {
    #[serde(rename = "black")]
    exact: u8,
    #[serde(rename = "white")]
    partial: u8,
}

impl Feedback {
    /// Every position correct
    pub const SOLVED: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if the counts exceed the code length
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8) -> Self {
        debug_assert!(
            (exact as usize) + (partial as usize) <= CODE_LENGTH,
            "exact + partial must not exceed the code length"
        );
        Self { exact, partial }
    }

    /// Symbols in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Symbols present elsewhere in the secret
    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Check if the guess matched the secret completely
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches; every other position puts its
    ///    secret symbol and guess symbol into two separate multisets
    /// 2. Partial count: for each symbol in the guess multiset, add
    ///    `min(guess count, secret count)`
    ///
    /// # Examples
    /// ```
    /// use formulaic::core::{Code, Feedback};
    ///
    /// let secret = Code::parse("11345").unwrap();
    /// let guess = Code::parse("13345").unwrap();
    ///
    /// // Positions 0, 2, 3, 4 are exact; the leftover 🌼 is not in the leftover secret
    /// assert_eq!(Feedback::evaluate(&secret, &guess), Feedback::new(4, 0));
    /// ```
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Code) -> Self {
        Self::evaluate_symbols(secret, guess.symbols())
    }

    /// Score an incomplete guess
    ///
    /// Positions past the end of `symbols` are treated as empty slots that match
    /// nothing. Used to preview an in-progress row.
    #[must_use]
    pub fn evaluate_partial(secret: &Code, symbols: &[Symbol]) -> Self {
        Self::evaluate_symbols(secret, &symbols[..symbols.len().min(CODE_LENGTH)])
    }

    fn evaluate_symbols(secret: &Code, guess: &[Symbol]) -> Self {
        let mut exact = 0u8;
        let mut secret_unmatched: FxHashMap<Symbol, u8> = FxHashMap::default();
        let mut guess_unmatched: FxHashMap<Symbol, u8> = FxHashMap::default();

        // First pass: exact matches, everything else into the multisets
        for (i, &secret_symbol) in secret.symbols().iter().enumerate() {
            match guess.get(i) {
                Some(&guessed) if guessed == secret_symbol => exact += 1,
                Some(&guessed) => {
                    *secret_unmatched.entry(secret_symbol).or_insert(0) += 1;
                    *guess_unmatched.entry(guessed).or_insert(0) += 1;
                }
                None => {
                    *secret_unmatched.entry(secret_symbol).or_insert(0) += 1;
                }
            }
        }

        // Second pass: partial matches capped by multiplicity
        let partial = guess_unmatched
            .iter()
            .map(|(symbol, &count)| count.min(secret_unmatched.get(symbol).copied().unwrap_or(0)))
            .sum();

        Self { exact, partial }
    }

    /// Render as glyphs, exact first: `"⚫⚫⚪"`
    #[must_use]
    pub fn to_glyphs(self) -> String {
        let mut result = String::with_capacity(CODE_LENGTH * EXACT_GLYPH.len());
        result.push_str(&EXACT_GLYPH.repeat(self.exact as usize));
        result.push_str(&PARTIAL_GLYPH.repeat(self.partial as usize));
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_glyphs())
    }
}

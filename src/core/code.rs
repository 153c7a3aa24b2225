//! Code representation
//!
//! A Code is an ordered sequence of exactly five palette symbols. Both the daily
//! secret and every submitted guess are codes.

use super::symbol::{Symbol, UnknownSymbol};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of symbols in a code
pub const CODE_LENGTH: usize = 5;

/// A five-symbol code
///
/// Serializes as a JSON array of emoji strings; decoding rejects arrays of any
/// other length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct Code {
    symbols: [Symbol; CODE_LENGTH],
}

/// Error type for invalid codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    UnknownSymbol(UnknownSymbol),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} symbols, got {len}")
            }
            Self::UnknownSymbol(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for CodeError {}

impl From<UnknownSymbol> for CodeError {
    fn from(err: UnknownSymbol) -> Self {
        Self::UnknownSymbol(err)
    }
}

impl Code {
    /// Create a code from an array of symbols
    #[inline]
    #[must_use]
    pub const fn new(symbols: [Symbol; CODE_LENGTH]) -> Self {
        Self { symbols }
    }

    /// Create a code from a slice
    ///
    /// # Errors
    /// Returns `CodeError::InvalidLength` unless the slice holds exactly five symbols.
    pub fn from_slice(symbols: &[Symbol]) -> Result<Self, CodeError> {
        let symbols: [Symbol; CODE_LENGTH] = symbols
            .try_into()
            .map_err(|_| CodeError::InvalidLength(symbols.len()))?;
        Ok(Self { symbols })
    }

    /// Parse a code typed as digits or emoji
    ///
    /// # Errors
    /// Returns `CodeError` if a character is not a palette symbol or the code
    /// does not have exactly five symbols.
    ///
    /// # Examples
    /// ```
    /// use formulaic::core::Code;
    ///
    /// let digits = Code::parse("12345").unwrap();
    /// let emoji = Code::parse("🍓🚚🌼🌲🧵").unwrap();
    /// assert_eq!(digits, emoji);
    ///
    /// assert!(Code::parse("1234").is_err());
    /// assert!(Code::parse("12349").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, CodeError> {
        let symbols = Symbol::parse_sequence(input)?;
        Self::from_slice(&symbols)
    }

    /// Get the symbols in order
    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Symbol; CODE_LENGTH] {
        &self.symbols
    }

    /// Get the symbol at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    /// Check if the code contains a specific symbol
    #[inline]
    #[must_use]
    pub fn contains(&self, symbol: Symbol) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Get the count of each symbol in the code
    #[must_use]
    pub fn symbol_counts(&self) -> FxHashMap<Symbol, u8> {
        let mut counts = FxHashMap::default();
        for &symbol in &self.symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    /// Keyboard digits for this code, e.g. `"36645"`
    #[must_use]
    pub fn to_digits(&self) -> String {
        self.symbols.iter().map(|s| s.digit()).collect()
    }
}

impl fmt::Display for Code {
    /// Space-separated glyphs, as shown in the solution reveal
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(symbol.glyph())?;
        }
        Ok(())
    }
}

impl From<Code> for Vec<Symbol> {
    fn from(code: Code) -> Self {
        code.symbols.to_vec()
    }
}

impl TryFrom<Vec<Symbol>> for Code {
    type Error = CodeError;

    fn try_from(value: Vec<Symbol>) -> Result<Self, Self::Error> {
        Self::from_slice(&value)
    }
}

impl std::str::FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

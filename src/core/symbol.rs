//! Palette symbols
//!
//! The game is played with a fixed palette of eight emoji. Each symbol also has
//! a keyboard digit (`1`-`8`) so codes can be typed without an emoji keyboard.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of distinct symbols in the palette
pub const PALETTE_SIZE: usize = 8;

/// Variation selector that some platforms append to `☂`
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// One selectable symbol of the palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Symbol {
    Strawberry,
    Truck,
    Blossom,
    Tree,
    Thread,
    Umbrella,
    Hearts,
    Ring,
}

/// The palette in display order; index `i` is typed as digit `i + 1`
pub const PALETTE: [Symbol; PALETTE_SIZE] = [
    Symbol::Strawberry,
    Symbol::Truck,
    Symbol::Blossom,
    Symbol::Tree,
    Symbol::Thread,
    Symbol::Umbrella,
    Symbol::Hearts,
    Symbol::Ring,
];

/// Error type for text that is not a palette symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSymbol(pub String);

impl fmt::Display for UnknownSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' is not a palette symbol (use 1-8 or the emoji)", self.0)
    }
}

impl std::error::Error for UnknownSymbol {}

impl Symbol {
    /// Symbol at a palette index
    ///
    /// Returns `None` if `index >= PALETTE_SIZE`.
    #[inline]
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        PALETTE.get(index).copied()
    }

    /// Position of this symbol in the palette (0-7)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Symbol bound to a keyboard digit `'1'..='8'`
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        let value = digit.to_digit(10)? as usize;
        value.checked_sub(1).and_then(Self::from_index)
    }

    /// Keyboard digit for this symbol
    #[must_use]
    pub fn digit(self) -> char {
        char::from(b'1' + self.index() as u8)
    }

    /// Emoji glyph as stored and displayed
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Strawberry => "🍓",
            Self::Truck => "🚚",
            Self::Blossom => "🌼",
            Self::Tree => "🌲",
            Self::Thread => "🧵",
            Self::Umbrella => "☂️",
            Self::Hearts => "💕",
            Self::Ring => "💍",
        }
    }

    /// Match a single character against the palette
    ///
    /// Accepts either the keyboard digit or the emoji's base code point.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(symbol) = Self::from_digit(ch) {
            return Some(symbol);
        }
        PALETTE
            .into_iter()
            .find(|symbol| symbol.glyph().chars().next() == Some(ch))
    }

    /// Parse a whole token (`"3"`, `"🌼"`, `"☂"` or `"☂️"`)
    ///
    /// # Errors
    /// Returns `UnknownSymbol` if the token is not exactly one palette symbol.
    pub fn parse(token: &str) -> Result<Self, UnknownSymbol> {
        let mut chars = token.trim().chars().filter(|&c| c != VARIATION_SELECTOR);
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch).ok_or_else(|| UnknownSymbol(token.to_string())),
            _ => Err(UnknownSymbol(token.to_string())),
        }
    }

    /// Parse every palette symbol found in free-form input
    ///
    /// Whitespace, commas and variation selectors are skipped. Stops at the first
    /// character that is not a symbol.
    ///
    /// # Errors
    /// Returns `UnknownSymbol` naming the first unrecognised character.
    pub fn parse_sequence(input: &str) -> Result<Vec<Self>, UnknownSymbol> {
        input
            .chars()
            .filter(|&c| c != VARIATION_SELECTOR && c != ',' && !c.is_whitespace())
            .map(|c| Self::from_char(c).ok_or_else(|| UnknownSymbol(c.to_string())))
            .collect()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.glyph().to_string()
    }
}

impl TryFrom<String> for Symbol {
    type Error = UnknownSymbol;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

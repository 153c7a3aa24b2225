//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Feedback, PALETTE, Symbol};

/// Placeholder drawn for an empty board slot
pub const EMPTY_SLOT: &str = "⬜";

/// Format a row of the board: filled slots, then placeholders up to five
#[must_use]
pub fn format_row(symbols: &[Symbol]) -> String {
    let mut cells: Vec<&str> = symbols.iter().map(|s| s.glyph()).collect();
    cells.resize(CODE_LENGTH.max(cells.len()), EMPTY_SLOT);
    cells.join(" ")
}

/// Format feedback as glyphs padded to a fixed width of five cells
#[must_use]
pub fn format_feedback(feedback: Feedback) -> String {
    let used = (feedback.exact() + feedback.partial()) as usize;
    format!(
        "{}{}",
        feedback.to_glyphs(),
        "·".repeat(CODE_LENGTH.saturating_sub(used))
    )
}

/// Palette with keyboard digits: `1 🍓  2 🚚  ...`
#[must_use]
pub fn palette_legend() -> String {
    PALETTE
        .iter()
        .map(|s| format!("{} {}", s.digit(), s.glyph()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width).div_ceil(100).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

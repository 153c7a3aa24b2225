//! Daily puzzle derivation
//!
//! Date → puzzle number and seed → seeded generator → secret code.

mod day;
mod generator;
mod rng;

pub use day::{EPOCH, PuzzleDay, format_countdown, time_until_next_puzzle};
pub use generator::{DailyPuzzle, generate_secret};
pub use rng::{SeededRng, Xmur3, scale_to_index};

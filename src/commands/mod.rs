//! Command implementations

pub mod score;
pub mod simple;
pub mod today;

pub use score::{ScoreResult, score_codes};
pub use simple::{HOW_TO_PLAY, run_simple};
pub use today::{TodaySummary, print_summary, summarize};

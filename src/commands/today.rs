//! Puzzle status command
//!
//! Summarises the selected day's puzzle without changing anything.

use crate::game::{GameStatus, Session};
use crate::puzzle::{format_countdown, time_until_next_puzzle};
use crate::storage::Store;
use chrono::{DateTime, TimeZone};

/// Snapshot of a day's progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodaySummary {
    pub puzzle_number: u32,
    pub seed: String,
    pub attempts: usize,
    pub remaining: usize,
    pub status: GameStatus,
    /// `HH:MM:SS` until the next puzzle
    pub next_puzzle_in: String,
}

/// Summarise `session` as of `now`
#[must_use]
pub fn summarize<S: Store, Tz: TimeZone>(session: &Session<S>, now: &DateTime<Tz>) -> TodaySummary {
    let day = session.day();
    let state = session.state();
    TodaySummary {
        puzzle_number: day.puzzle_number(),
        seed: day.seed(),
        attempts: state.attempts(),
        remaining: state.remaining_guesses(),
        status: state.status(),
        next_puzzle_in: format_countdown(time_until_next_puzzle(now)),
    }
}

/// Print a summary
pub fn print_summary(summary: &TodaySummary) {
    use colored::Colorize;

    println!(
        "{} {}",
        "Puzzle".bright_cyan().bold(),
        format!("#{}", summary.puzzle_number).bright_yellow().bold()
    );
    println!("   Seed:        {}", summary.seed);
    let status = match summary.status {
        GameStatus::InProgress => format!("in progress ({} guesses left)", summary.remaining).normal(),
        GameStatus::Won => format!("won in {}", summary.attempts).green(),
        GameStatus::Lost => "lost".red(),
    };
    println!("   Status:      {status}");
    println!("   Guesses:     {}", summary.attempts);
    println!("   Next puzzle: {}", summary.next_puzzle_in);
}

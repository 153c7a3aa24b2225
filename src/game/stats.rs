//! Cross-day statistics

use crate::core::MAX_GUESSES;
use serde::{Deserialize, Serialize};

/// Smallest bar width (percent) drawn for an empty distribution bucket
pub const MIN_BAR_PERCENT: u8 = 6;

/// Aggregate results over every completed daily game
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub games_played: u32,
    pub games_won: u32,
    pub current_streak: u32,
    pub max_streak: u32,
    /// Wins bucketed by attempts: index 0 is a first-guess win
    pub guess_distribution: [u32; MAX_GUESSES],
}

impl Stats {
    /// Fold one finished game into the totals
    ///
    /// A win extends the streak and bumps the bucket for `attempts`; a loss
    /// resets the current streak. Attempts outside `1..=9` are not bucketed.
    pub fn record(&mut self, won: bool, attempts: usize) {
        self.games_played += 1;
        if won {
            self.games_won += 1;
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
            if let Some(bucket) = attempts
                .checked_sub(1)
                .and_then(|i| self.guess_distribution.get_mut(i))
            {
                *bucket += 1;
            }
        } else {
            self.current_streak = 0;
        }
    }

    /// Win percentage rounded to the nearest integer (0 with no games)
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.games_won) / f64::from(self.games_played) * 100.0).round() as u32
    }

    /// Bar width per distribution bucket, as a percentage of the largest bucket
    #[must_use]
    pub fn distribution_bar_widths(&self) -> [u8; MAX_GUESSES] {
        let max = self.guess_distribution.iter().copied().max().unwrap_or(0).max(1);
        self.guess_distribution.map(|count| {
            let pct = (f64::from(count) / f64::from(max) * 100.0).round() as u8;
            pct.max(MIN_BAR_PERCENT)
        })
    }
}

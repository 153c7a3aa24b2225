//! Puzzle calendar
//!
//! Maps local calendar dates to puzzle numbers and seed strings. Puzzle #1 is
//! the epoch date; every following local day gets the next number.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};

/// First puzzle date (local time): 1 January 2025
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 1) {
    Some(date) => date,
    None => panic!("epoch date is valid"),
};

/// One calendar day's puzzle identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleDay {
    date: NaiveDate,
    day_index: u32,
}

impl PuzzleDay {
    /// Puzzle for a given local date relative to `epoch`
    ///
    /// Dates before the epoch clamp to day index 0.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use formulaic::puzzle::{EPOCH, PuzzleDay};
    ///
    /// let day = PuzzleDay::from_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(), EPOCH);
    /// assert_eq!(day.day_index(), 30);
    /// assert_eq!(day.puzzle_number(), 31);
    /// assert_eq!(day.seed(), "2025-01-31");
    /// ```
    #[must_use]
    pub fn from_date(date: NaiveDate, epoch: NaiveDate) -> Self {
        let days = date.signed_duration_since(epoch).num_days().max(0);
        let day_index = u32::try_from(days).unwrap_or(u32::MAX);
        Self { date, day_index }
    }

    /// Puzzle for today's local date
    #[must_use]
    pub fn today(epoch: NaiveDate) -> Self {
        Self::from_date(Local::now().date_naive(), epoch)
    }

    /// Calendar date this puzzle belongs to
    #[inline]
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Days since the epoch (0 on the epoch date)
    #[inline]
    #[must_use]
    pub const fn day_index(&self) -> u32 {
        self.day_index
    }

    /// Public puzzle number (`day_index + 1`)
    #[inline]
    #[must_use]
    pub const fn puzzle_number(&self) -> u32 {
        self.day_index.saturating_add(1)
    }

    /// Seed string `YYYY-MM-DD`
    #[must_use]
    pub fn seed(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Time left until the next local midnight, when a new puzzle unlocks
#[must_use]
pub fn time_until_next_puzzle<Tz: TimeZone>(now: &DateTime<Tz>) -> Duration {
    let tomorrow = now.date_naive().succ_opt().unwrap_or(NaiveDate::MAX);
    let midnight = tomorrow.and_hms_opt(0, 0, 0).unwrap_or_default();
    now.timezone()
        .from_local_datetime(&midnight)
        .earliest()
        .map_or_else(Duration::zero, |next| next.signed_duration_since(now.clone()))
        .max(Duration::zero())
}

/// Format a duration as `HH:MM:SS`, clamping negatives to zero
#[must_use]
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_is_puzzle_one() {
        let day = PuzzleDay::from_date(EPOCH, EPOCH);
        assert_eq!(day.day_index(), 0);
        assert_eq!(day.puzzle_number(), 1);
        assert_eq!(day.seed(), "2025-01-01");
    }

    #[test]
    fn dates_before_epoch_clamp_to_zero() {
        let day = PuzzleDay::from_date(date(2024, 12, 25), EPOCH);
        assert_eq!(day.day_index(), 0);
        assert_eq!(day.puzzle_number(), 1);
        // Seed still follows the real date
        assert_eq!(day.seed(), "2024-12-25");
    }

    #[test]
    fn day_index_counts_calendar_days() {
        assert_eq!(PuzzleDay::from_date(date(2025, 10, 19), EPOCH).day_index(), 291);
        assert_eq!(PuzzleDay::from_date(date(2026, 1, 1), EPOCH).day_index(), 365);
        assert_eq!(PuzzleDay::from_date(date(2026, 10, 19), EPOCH).puzzle_number(), 657);
    }

    #[test]
    fn seed_is_zero_padded() {
        assert_eq!(PuzzleDay::from_date(date(2025, 3, 7), EPOCH).seed(), "2025-03-07");
    }

    #[test]
    fn countdown_to_midnight() {
        let tz = FixedOffset::east_opt(2 * 3600).unwrap();
        let now = tz
            .from_local_datetime(&date(2025, 6, 1).and_time(NaiveTime::from_hms_opt(22, 30, 15).unwrap()))
            .unwrap();
        let remaining = time_until_next_puzzle(&now);
        assert_eq!(remaining.num_seconds(), 3600 + 29 * 60 + 45);
        assert_eq!(format_countdown(remaining), "01:29:45");
    }

    #[test]
    fn countdown_at_midnight_is_full_day() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let now = tz
            .from_local_datetime(&date(2025, 6, 1).and_hms_opt(0, 0, 0).unwrap())
            .unwrap();
        assert_eq!(format_countdown(time_until_next_puzzle(&now)), "24:00:00");
    }

    #[test]
    fn format_countdown_clamps_negative() {
        assert_eq!(format_countdown(Duration::seconds(-5)), "00:00:00");
        assert_eq!(format_countdown(Duration::seconds(59)), "00:00:59");
    }
}

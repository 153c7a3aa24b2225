//! Runtime configuration
//!
//! Resolved once from command-line flags and environment in `main`, then passed
//! down to the commands.

use crate::game::DEFAULT_SHARE_ORIGIN;
use crate::puzzle::{EPOCH, PuzzleDay};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Environment variable that overrides the data directory
pub const DATA_DIR_ENV: &str = "FORMULAIC_DATA_DIR";

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the JSON records
    pub data_dir: PathBuf,
    /// Persist records; when false play is kept in memory only
    pub save: bool,
    /// Play a specific calendar day instead of today
    pub date: Option<NaiveDate>,
    /// Link appended to shared results
    pub share_origin: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            save: true,
            date: None,
            share_origin: DEFAULT_SHARE_ORIGIN.to_string(),
        }
    }
}

impl Config {
    /// The puzzle day selected by this configuration
    ///
    /// An override before the epoch selects puzzle #1 itself, so the seed and
    /// the save key always belong to the same day.
    #[must_use]
    pub fn puzzle_day(&self) -> PuzzleDay {
        self.date.map_or_else(
            || PuzzleDay::today(EPOCH),
            |date| PuzzleDay::from_date(date.max(EPOCH), EPOCH),
        )
    }

    /// File the interactive mode logs to
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("formulaic.log")
    }
}

/// `$HOME/.formulaic`, or `saves/` next to the executable without a home directory
#[must_use]
pub fn default_data_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME").filter(|h| !h.is_empty()) {
        return PathBuf::from(home).join(".formulaic");
    }
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(std::path::Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("saves")
}

/// Parse a `YYYY-MM-DD` date argument
///
/// # Errors
/// Returns a message naming the expected format, or the first puzzle date if
/// `value` comes before it.
pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| format!("expected a date like 2025-01-31: {e}"))?;
    if date < EPOCH {
        return Err(format!("the first puzzle is {EPOCH}"));
    }
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_override_selects_puzzle() {
        let config = Config {
            date: Some(NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()),
            ..Config::default()
        };
        assert_eq!(config.puzzle_day().puzzle_number(), 10);
    }

    #[test]
    fn parse_date_formats() {
        assert_eq!(
            parse_date("2025-10-19"),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 19).unwrap())
        );
        assert!(parse_date("19/10/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn parse_date_rejects_days_before_first_puzzle() {
        assert!(parse_date("2024-12-31").is_err());
        assert_eq!(parse_date("2025-01-01"), Ok(EPOCH));
    }

    #[test]
    fn pre_epoch_days_share_one_puzzle() {
        use crate::game::Session;
        use crate::puzzle::DailyPuzzle;
        use crate::storage::MemoryStore;

        let config = |d| Config {
            date: NaiveDate::from_ymd_opt(2024, 12, d),
            save: false,
            ..Config::default()
        };
        let first = config(20).puzzle_day();
        let second = config(25).puzzle_day();
        assert_eq!(first, second);
        assert_eq!(first.seed(), "2025-01-01");

        // A board won on one pre-epoch date is the same puzzle on another
        let mut session = Session::open(MemoryStore::new(), first);
        for symbol in *DailyPuzzle::new(first).secret().symbols() {
            session.append_symbol(symbol);
        }
        session.submit_guess().unwrap();

        let reopened = Session::open(session.store().clone(), second);
        assert!(reopened.state().is_win());
        assert_eq!(reopened.revealed_secret(), session.revealed_secret());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(config.save);
        assert_eq!(config.share_origin, DEFAULT_SHARE_ORIGIN);
        assert!(config.log_path().ends_with("formulaic.log"));
    }
}

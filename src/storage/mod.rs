//! Key-value persistence
//!
//! Game records live in a small key-value store holding JSON text. Storage is
//! best-effort: a missing or malformed value reads as absent, and a failed write
//! is logged and otherwise ignored so play can continue in memory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

/// Key of the aggregate statistics record
pub const STATS_KEY: &str = "formulaic_stats";

/// Key of the "how to play has been seen" flag
pub const SEEN_HOW_TO_KEY: &str = "formulaic_seenHowTo";

const DAILY_KEY_PREFIX: &str = "formulaic_daily_";

/// Key of the board record for a day
#[must_use]
pub fn daily_key(day_index: u32) -> String {
    format!("{DAILY_KEY_PREFIX}{day_index}")
}

/// Storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is read-only")]
    ReadOnly,

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A string key-value store
pub trait Store {
    /// Read the raw value for `key`, `Ok(None)` if absent
    ///
    /// # Errors
    /// Returns `StorageError` if the backend cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`
    ///
    /// # Errors
    /// Returns `StorageError` if the backend rejects the write.
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Decode the JSON value at `key`
///
/// Absent keys, unreadable storage and malformed JSON all yield `None`.
#[must_use]
pub fn load_json<T, S>(store: &S, key: &str) -> Option<T>
where
    T: DeserializeOwned,
    S: Store + ?Sized,
{
    let raw = match store.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!(key, "no stored value");
            return None;
        }
        Err(err) => {
            warn!(key, %err, "storage read failed");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(key, %err, "discarding malformed stored value");
            None
        }
    }
}

/// Encode `value` as JSON and write it to `key`
///
/// Returns whether the write succeeded; failures are logged, never raised.
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: Store + ?Sized,
{
    let json = match serde_json::to_string(value) {
        Ok(json) => json,
        Err(err) => {
            warn!(key, %err, "could not serialize value");
            return false;
        }
    };

    match store.write(key, &json) {
        Ok(()) => {
            debug!(key, bytes = json.len(), "saved");
            true
        }
        Err(err) => {
            warn!(key, %err, "storage write failed; keeping state in memory");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Stats;

    #[test]
    fn daily_key_format() {
        assert_eq!(daily_key(0), "formulaic_daily_0");
        assert_eq!(daily_key(291), "formulaic_daily_291");
    }

    #[test]
    fn json_round_trip_through_store() {
        let mut store = MemoryStore::new();
        let stats = Stats {
            games_played: 2,
            games_won: 1,
            ..Stats::default()
        };
        assert!(save_json(&mut store, STATS_KEY, &stats));
        assert_eq!(load_json::<Stats, _>(&store, STATS_KEY), Some(stats));
    }

    #[test]
    fn missing_and_malformed_values_read_as_none() {
        let mut store = MemoryStore::new();
        assert_eq!(load_json::<Stats, _>(&store, STATS_KEY), None);

        store.write(STATS_KEY, "{not json").unwrap();
        assert_eq!(load_json::<Stats, _>(&store, STATS_KEY), None);

        store.write(STATS_KEY, r#"{"gamesPlayed":"many"}"#).unwrap();
        assert_eq!(load_json::<Stats, _>(&store, STATS_KEY), None);
    }

    #[test]
    fn failed_write_is_reported_not_raised() {
        let mut store = MemoryStore::new();
        store.set_read_only(true);
        assert!(!save_json(&mut store, SEEN_HOW_TO_KEY, &true));
        assert_eq!(load_json::<bool, _>(&store, SEEN_HOW_TO_KEY), None);
    }
}

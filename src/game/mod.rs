//! Game engine
//!
//! Board state machine, statistics, share text and the persisted session that
//! ties them to a store.

mod session;
mod share;
mod state;
mod stats;

pub use session::{Session, SubmitOutcome};
pub use share::{DEFAULT_SHARE_ORIGIN, GAME_TITLE, build_share_text};
pub use state::{GameState, GameStatus, SubmitError};
pub use stats::{MIN_BAR_PERCENT, Stats};

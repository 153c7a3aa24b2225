//! A day's play session
//!
//! The session owns today's board, the global stats and the store they persist
//! to. Every effective mutation is written back immediately; write failures are
//! logged and play continues from memory.

use super::share::build_share_text;
use super::state::{GameState, GameStatus, SubmitError};
use super::stats::Stats;
use crate::core::{Code, Feedback, Symbol};
use crate::puzzle::{DailyPuzzle, PuzzleDay};
use crate::storage::{SEEN_HOW_TO_KEY, STATS_KEY, Store, daily_key, load_json, save_json};
use tracing::{debug, info};

/// Result of an accepted submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub feedback: Feedback,
    pub status: GameStatus,
    /// Whether this submission ended the game and was counted in the stats
    pub stats_updated: bool,
}

/// Today's puzzle bound to its persisted state
pub struct Session<S: Store> {
    puzzle: DailyPuzzle,
    state: GameState,
    stats: Stats,
    store: S,
}

impl<S: Store> Session<S> {
    /// Load (or start) the game for `day`
    ///
    /// A saved board that fails validation is discarded. Missing or malformed
    /// stats start from zero. A board that finished without being counted (for
    /// example because the process exited mid-save) is counted now.
    #[must_use]
    pub fn open(store: S, day: PuzzleDay) -> Self {
        let puzzle = DailyPuzzle::new(day);
        let key = daily_key(day.day_index());

        let saved: Option<GameState> = load_json(&store, &key);
        let state = GameState::restore(saved, day.day_index());

        let stats: Stats = load_json(&store, STATS_KEY).unwrap_or_default();

        info!(
            puzzle = day.puzzle_number(),
            seed = %day.seed(),
            guesses = state.attempts(),
            "opened session"
        );

        let mut session = Self {
            puzzle,
            state,
            stats,
            store,
        };
        session.complete_game();
        session
    }

    /// Type a symbol into the current row
    pub fn append_symbol(&mut self, symbol: Symbol) -> bool {
        let changed = self.state.append_symbol(symbol);
        if changed {
            self.persist_state();
        }
        changed
    }

    /// Erase the last typed symbol
    pub fn delete_last_symbol(&mut self) -> bool {
        let changed = self.state.delete_last_symbol();
        if changed {
            self.persist_state();
        }
        changed
    }

    /// Submit the current row
    ///
    /// A submission that ends the game also updates the stats.
    ///
    /// # Errors
    /// Returns `SubmitError` if the row is incomplete or the game is over;
    /// nothing is changed or written in that case.
    pub fn submit_guess(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let feedback = self.state.submit_guess(self.puzzle.secret())?;
        self.persist_state();

        let stats_updated = self.complete_game();
        let status = self.state.status();
        debug!(
            attempt = self.state.attempts(),
            exact = feedback.exact(),
            partial = feedback.partial(),
            ?status,
            "guess scored"
        );

        Ok(SubmitOutcome {
            feedback,
            status,
            stats_updated,
        })
    }

    /// Count a finished game in the stats and persist both records
    ///
    /// Safe to call any number of times; only the first call after the game
    /// ends has an effect.
    pub fn complete_game(&mut self) -> bool {
        if !self.state.complete_game(&mut self.stats) {
            return false;
        }
        info!(
            won = self.state.is_win(),
            attempts = self.state.attempts(),
            streak = self.stats.current_streak,
            "game completed"
        );
        save_json(&mut self.store, STATS_KEY, &self.stats);
        self.persist_state();
        true
    }

    /// Whether the how-to-play screen should open automatically
    ///
    /// Shown until dismissed once, and never over a finished board.
    #[must_use]
    pub fn should_show_how_to(&self) -> bool {
        let seen: bool = load_json(&self.store, SEEN_HOW_TO_KEY).unwrap_or(false);
        !seen && !self.state.is_complete()
    }

    /// Remember that the how-to-play screen was dismissed
    pub fn mark_how_to_seen(&mut self) {
        save_json(&mut self.store, SEEN_HOW_TO_KEY, &true);
    }

    /// Share text for the current board
    #[must_use]
    pub fn share_text(&self, origin: &str) -> String {
        build_share_text(
            &self.state,
            self.puzzle.secret(),
            self.puzzle.day().puzzle_number(),
            origin,
        )
    }

    /// The secret, but only once the game is over
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Code> {
        self.state.is_complete().then(|| self.puzzle.secret())
    }

    #[must_use]
    pub const fn day(&self) -> PuzzleDay {
        self.puzzle.day()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Stats {
        &self.stats
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist_state(&mut self) {
        let key = daily_key(self.state.day_index());
        save_json(&mut self.store, &key, &self.state);
    }
}

//! Per-day game state machine
//!
//! A `GameState` starts in progress with an empty board, accepts symbols into the
//! current row, scores submitted rows against the secret and ends as either won
//! or lost. Terminal states accept no further input.
//!
//! The state never holds the secret; callers pass it to [`GameState::submit_guess`].

use super::stats::Stats;
use crate::core::{CODE_LENGTH, Code, Feedback, MAX_GUESSES, Symbol};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Reason a submission was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    /// The current row does not hold exactly five symbols
    InvalidLength { len: usize },
    /// The game already ended
    GameOver,
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { .. } => write!(f, "Enter {CODE_LENGTH} emojis"),
            Self::GameOver => write!(f, "Today's game is over"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// One day's board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    day_index: u32,
    guesses: Vec<Code>,
    feedbacks: Vec<Feedback>,
    current_guess: Vec<Symbol>,
    #[serde(default)]
    is_complete: bool,
    #[serde(default)]
    is_win: bool,
    #[serde(default)]
    stats_counted: bool,
}

impl GameState {
    /// Fresh board for a day
    #[must_use]
    pub const fn new(day_index: u32) -> Self {
        Self {
            day_index,
            guesses: Vec::new(),
            feedbacks: Vec::new(),
            current_guess: Vec::new(),
            is_complete: false,
            is_win: false,
            stats_counted: false,
        }
    }

    /// Use a saved board if it is valid for `day_index`, otherwise start fresh
    #[must_use]
    pub fn restore(saved: Option<Self>, day_index: u32) -> Self {
        match saved {
            Some(state) if state.is_valid_for(day_index) => state,
            Some(state) => {
                debug!(
                    saved_day = state.day_index,
                    day_index, "discarding saved board that does not fit today"
                );
                Self::new(day_index)
            }
            None => Self::new(day_index),
        }
    }

    /// Check a decoded record before trusting it
    ///
    /// The record must belong to `day_index`, have one feedback per guess, fit
    /// on the board, and carry flags consistent with its history: a full board
    /// is finished, a finished board has no row being typed, and only a
    /// finished board can be won.
    #[must_use]
    pub fn is_valid_for(&self, day_index: u32) -> bool {
        let fits = self.day_index == day_index
            && self.guesses.len() == self.feedbacks.len()
            && self.guesses.len() <= MAX_GUESSES
            && self.current_guess.len() <= CODE_LENGTH;
        let consistent = (self.is_complete || self.guesses.len() < MAX_GUESSES)
            && !(self.is_complete && !self.current_guess.is_empty())
            && (self.is_complete || !self.is_win);
        fits && consistent
    }

    /// Add a symbol to the current row
    ///
    /// Returns `false` without changing anything if the game is over or the row
    /// is full.
    pub fn append_symbol(&mut self, symbol: Symbol) -> bool {
        if self.is_complete || self.current_guess.len() >= CODE_LENGTH {
            return false;
        }
        self.current_guess.push(symbol);
        true
    }

    /// Remove the last symbol of the current row
    ///
    /// Returns `false` without changing anything if the game is over or the row
    /// is empty.
    pub fn delete_last_symbol(&mut self) -> bool {
        if self.is_complete {
            return false;
        }
        self.current_guess.pop().is_some()
    }

    /// Score the current row against `secret`
    ///
    /// On success the row moves to the guess history, the current row is cleared
    /// and win/loss is decided: five exact matches wins, otherwise the ninth
    /// guess loses.
    ///
    /// # Errors
    /// Returns `SubmitError::InvalidLength` if the row is not full and
    /// `SubmitError::GameOver` if the game already ended. The state is unchanged
    /// in both cases.
    pub fn submit_guess(&mut self, secret: &Code) -> Result<Feedback, SubmitError> {
        if self.is_complete {
            return Err(SubmitError::GameOver);
        }
        let guess = Code::from_slice(&self.current_guess).map_err(|_| SubmitError::InvalidLength {
            len: self.current_guess.len(),
        })?;

        let feedback = Feedback::evaluate(secret, &guess);
        self.guesses.push(guess);
        self.feedbacks.push(feedback);
        self.current_guess.clear();

        if feedback.is_solved() {
            self.is_complete = true;
            self.is_win = true;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.is_complete = true;
            self.is_win = false;
        }

        Ok(feedback)
    }

    /// Count a finished game in `stats`, once
    ///
    /// Returns `true` only on the call that actually updated `stats`; later calls
    /// (or calls before the game ends) do nothing.
    pub fn complete_game(&mut self, stats: &mut Stats) -> bool {
        if !self.is_complete || self.stats_counted {
            return false;
        }
        stats.record(self.is_win, self.guesses.len());
        self.stats_counted = true;
        true
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        match (self.is_complete, self.is_win) {
            (false, _) => GameStatus::InProgress,
            (true, true) => GameStatus::Won,
            (true, false) => GameStatus::Lost,
        }
    }

    #[inline]
    #[must_use]
    pub const fn day_index(&self) -> u32 {
        self.day_index
    }

    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Code] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub fn feedbacks(&self) -> &[Feedback] {
        &self.feedbacks
    }

    /// Submitted rows paired with their scores
    pub fn history(&self) -> impl Iterator<Item = (&Code, &Feedback)> {
        self.guesses.iter().zip(&self.feedbacks)
    }

    #[inline]
    #[must_use]
    pub fn current_guess(&self) -> &[Symbol] {
        &self.current_guess
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.is_win
    }

    #[inline]
    #[must_use]
    pub const fn stats_counted(&self) -> bool {
        self.stats_counted
    }

    /// Number of submitted guesses
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> Code {
        Code::parse("12345").unwrap()
    }

    fn type_code(state: &mut GameState, code: &str) {
        for symbol in Code::parse(code).unwrap().symbols() {
            assert!(state.append_symbol(*symbol));
        }
    }

    fn lose(state: &mut GameState) {
        for _ in 0..MAX_GUESSES {
            type_code(state, "66666");
            state.submit_guess(&secret()).unwrap();
        }
    }

    #[test]
    fn new_state_is_in_progress() {
        let state = GameState::new(7);
        assert_eq!(state.day_index(), 7);
        assert_eq!(state.status(), GameStatus::InProgress);
        assert!(state.guesses().is_empty());
        assert!(state.current_guess().is_empty());
        assert_eq!(state.remaining_guesses(), 9);
    }

    #[test]
    fn append_stops_at_code_length() {
        let mut state = GameState::new(0);
        type_code(&mut state, "11111");
        assert!(!state.append_symbol(Symbol::Ring));
        assert_eq!(state.current_guess().len(), CODE_LENGTH);
    }

    #[test]
    fn delete_on_empty_row_is_noop() {
        let mut state = GameState::new(0);
        assert!(!state.delete_last_symbol());

        state.append_symbol(Symbol::Tree);
        state.append_symbol(Symbol::Ring);
        assert!(state.delete_last_symbol());
        assert_eq!(state.current_guess(), &[Symbol::Tree]);
    }

    #[test]
    fn short_submission_is_rejected_without_change() {
        let mut state = GameState::new(0);
        type_code(&mut state, "12345");
        state.delete_last_symbol();
        let before = state.clone();

        assert_eq!(
            state.submit_guess(&secret()),
            Err(SubmitError::InvalidLength { len: 4 })
        );
        assert_eq!(state, before);
        assert_eq!(
            SubmitError::InvalidLength { len: 4 }.to_string(),
            "Enter 5 emojis"
        );
    }

    #[test]
    fn submission_records_feedback_and_clears_row() {
        let mut state = GameState::new(0);
        type_code(&mut state, "13245");
        let feedback = state.submit_guess(&secret()).unwrap();

        assert_eq!(feedback, Feedback::new(3, 2));
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.feedbacks(), &[feedback]);
        assert!(state.current_guess().is_empty());
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn exact_guess_wins() {
        let mut state = GameState::new(0);
        type_code(&mut state, "66666");
        state.submit_guess(&secret()).unwrap();
        type_code(&mut state, "12345");
        let feedback = state.submit_guess(&secret()).unwrap();

        assert!(feedback.is_solved());
        assert_eq!(state.status(), GameStatus::Won);
        assert!(state.is_complete() && state.is_win());
        assert_eq!(state.attempts(), 2);
    }

    #[test]
    fn ninth_miss_loses_and_freezes_board() {
        let mut state = GameState::new(0);
        lose(&mut state);

        assert_eq!(state.status(), GameStatus::Lost);
        assert!(state.is_complete() && !state.is_win());

        let frozen = state.clone();
        assert!(!state.append_symbol(Symbol::Strawberry));
        assert!(!state.delete_last_symbol());
        assert_eq!(state.submit_guess(&secret()), Err(SubmitError::GameOver));
        assert_eq!(state, frozen);
    }

    #[test]
    fn win_on_ninth_guess_is_a_win() {
        let mut state = GameState::new(0);
        for _ in 0..MAX_GUESSES - 1 {
            type_code(&mut state, "77777");
            state.submit_guess(&secret()).unwrap();
        }
        type_code(&mut state, "12345");
        state.submit_guess(&secret()).unwrap();
        assert_eq!(state.status(), GameStatus::Won);
    }

    #[test]
    fn complete_game_counts_once() {
        let mut state = GameState::new(0);
        let mut stats = Stats::default();
        type_code(&mut state, "11111");
        state.submit_guess(&secret()).unwrap();
        type_code(&mut state, "12345");
        state.submit_guess(&secret()).unwrap();

        assert!(state.complete_game(&mut stats));
        assert!(!state.complete_game(&mut stats));
        assert!(!state.complete_game(&mut stats));

        assert!(state.stats_counted());
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.guess_distribution[1], 1);
    }

    #[test]
    fn complete_game_ignores_unfinished_game() {
        let mut state = GameState::new(0);
        let mut stats = Stats::default();
        assert!(!state.complete_game(&mut stats));
        assert!(!state.stats_counted());
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn loss_resets_streak_via_complete_game() {
        let mut state = GameState::new(0);
        let mut stats = Stats {
            games_played: 3,
            games_won: 3,
            current_streak: 3,
            max_streak: 3,
            ..Stats::default()
        };
        lose(&mut state);
        assert!(state.complete_game(&mut stats));
        assert_eq!(stats.games_played, 4);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.max_streak, 3);
    }

    #[test]
    fn restore_rejects_other_day() {
        let mut saved = GameState::new(4);
        saved.append_symbol(Symbol::Tree);
        let restored = GameState::restore(Some(saved.clone()), 5);
        assert_eq!(restored, GameState::new(5));

        let restored = GameState::restore(Some(saved.clone()), 4);
        assert_eq!(restored, saved);

        assert_eq!(GameState::restore(None, 4), GameState::new(4));
    }

    #[test]
    fn restore_rejects_mismatched_history() {
        let mut saved = GameState::new(1);
        type_code(&mut saved, "12345");
        saved.submit_guess(&secret()).unwrap();
        saved.feedbacks.clear();
        assert!(!saved.is_valid_for(1));
        assert_eq!(GameState::restore(Some(saved), 1), GameState::new(1));
    }

    #[test]
    fn restore_rejects_full_board_still_in_progress() {
        let mut saved = GameState::new(291);
        lose(&mut saved);
        saved.is_complete = false;
        assert!(!saved.is_valid_for(291));

        let mut restored = GameState::restore(Some(saved), 291);
        assert_eq!(restored, GameState::new(291));
        type_code(&mut restored, "33333");
        restored.submit_guess(&secret()).unwrap();
        assert_eq!(restored.guesses().len(), 1);
    }

    #[test]
    fn restore_rejects_finished_board_with_typed_row() {
        let mut saved = GameState::new(2);
        lose(&mut saved);
        saved.current_guess.push(Symbol::Ring);
        assert!(!saved.is_valid_for(2));
        assert_eq!(GameState::restore(Some(saved), 2), GameState::new(2));
    }

    #[test]
    fn restore_rejects_win_without_completion() {
        let mut saved = GameState::new(2);
        type_code(&mut saved, "12345");
        saved.submit_guess(&secret()).unwrap();
        saved.is_complete = false;
        assert!(saved.is_win());
        assert!(!saved.is_valid_for(2));
        assert_eq!(GameState::restore(Some(saved), 2), GameState::new(2));
    }

    #[test]
    fn restore_keeps_finished_boards() {
        let mut lost = GameState::new(2);
        lose(&mut lost);
        assert!(lost.is_valid_for(2));

        let mut won = GameState::new(2);
        type_code(&mut won, "12345");
        won.submit_guess(&secret()).unwrap();
        assert!(won.is_valid_for(2));
    }

    #[test]
    fn restore_rejects_ten_guess_record_from_json() {
        let guess = r#"["🍓","🍓","🍓","🍓","🍓"]"#;
        let feedback = r#"{"black":1,"white":0}"#;
        let json = format!(
            r#"{{"dayIndex":291,"guesses":[{}],"feedbacks":[{}],"currentGuess":[],"isComplete":true}}"#,
            vec![guess; 10].join(","),
            vec![feedback; 10].join(",")
        );
        let saved: GameState = serde_json::from_str(&json).unwrap();
        assert!(!saved.is_valid_for(291));
    }

    #[test]
    fn json_matches_browser_record() {
        let mut state = GameState::new(291);
        type_code(&mut state, "61654");
        state.submit_guess(&Code::parse("62654").unwrap()).unwrap();
        state.append_symbol(Symbol::Hearts);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["dayIndex"], 291);
        assert_eq!(json["guesses"][0][0], "☂️");
        assert_eq!(json["feedbacks"][0]["black"], 4);
        assert_eq!(json["feedbacks"][0]["white"], 0);
        assert_eq!(json["currentGuess"][0], "💕");
        assert_eq!(json["isComplete"], false);
        assert_eq!(json["statsCounted"], false);

        let back: GameState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn json_missing_flags_default_to_false() {
        let json = r#"{"dayIndex":3,"guesses":[],"feedbacks":[],"currentGuess":["🍓"]}"#;
        let state: GameState = serde_json::from_str(json).unwrap();
        assert!(state.is_valid_for(3));
        assert!(!state.is_complete());
        assert_eq!(state.current_guess(), &[Symbol::Strawberry]);
    }

    #[test]
    fn json_non_array_fields_are_rejected() {
        let json = r#"{"dayIndex":3,"guesses":{},"feedbacks":[],"currentGuess":[]}"#;
        assert!(serde_json::from_str::<GameState>(json).is_err());
    }
}

//! Formulaic
//!
//! A daily code-breaking puzzle: find five hidden emojis in nine guesses. Every
//! calendar day maps to one deterministic secret, so all players share the same
//! puzzle without a server.
//!
//! # Quick Start
//!
//! ```rust
//! use formulaic::core::{Code, Feedback};
//! use formulaic::puzzle::{DailyPuzzle, EPOCH, PuzzleDay};
//!
//! let date = chrono::NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();
//! let puzzle = DailyPuzzle::new(PuzzleDay::from_date(date, EPOCH));
//!
//! let guess = Code::parse("12345").unwrap();
//! let feedback = Feedback::evaluate(puzzle.secret(), &guess);
//! println!("{guess} -> {feedback}");
//! ```

// Core domain types
pub mod core;

// Daily seeding and secret generation
pub mod puzzle;

// Game state, stats and sessions
pub mod game;

// Key-value persistence
pub mod storage;

// Runtime configuration
pub mod config;

// Log subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

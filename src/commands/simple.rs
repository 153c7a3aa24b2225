//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a row as digits or emoji and press
//! Enter to submit it.

use crate::core::{Code, Symbol};
use crate::game::{GameStatus, Session, SubmitError, SubmitOutcome};
use crate::output::formatters::{format_feedback, palette_legend};
use crate::output::{print_board, print_puzzle_header, print_result, print_stats};
use crate::storage::Store;
use colored::Colorize;
use std::io::{self, Write};

/// Text of the how-to-play screen
pub const HOW_TO_PLAY: &[&str] = &[
    "Crack the hidden code of 5 emojis in 9 guesses.",
    "Emojis may repeat. After each guess you get:",
    "  ⚫ one per emoji in the right spot",
    "  ⚪ one per emoji in the code but in another spot",
    "Type emojis by number (1-8) or paste them directly.",
    "A new puzzle unlocks every day at local midnight.",
];

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Store>(session: &mut Session<S>, share_origin: &str) -> Result<(), String> {
    print_puzzle_header(session.day());

    if session.should_show_how_to() {
        println!();
        for line in HOW_TO_PLAY {
            println!("  {line}");
        }
        session.mark_how_to_seen();
    }

    println!("\nPalette: {}", palette_legend());
    println!("Commands: 'quit' to exit, 'stats' for statistics, 'share' for share text\n");

    loop {
        print_board(session.state());

        if session.state().is_complete() {
            if let Some(secret) = session.revealed_secret() {
                print_result(session.state(), secret);
            }
            print_stats(session.stats());
            println!("\n{}\n", session.share_text(share_origin));
            return Ok(());
        }

        let input = get_user_input(&format!(
            "Guess {}/9 (digits or emoji)",
            session.state().attempts() + 1
        ))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Come back tomorrow!\n");
                return Ok(());
            }
            "stats" => {
                print_stats(session.stats());
                continue;
            }
            "share" => {
                println!("\n{}\n", session.share_text(share_origin));
                continue;
            }
            _ => {}
        }

        let symbols = match Symbol::parse_sequence(&input) {
            Ok(symbols) => symbols,
            Err(err) => {
                println!("{} {err}\n", "❌".red());
                continue;
            }
        };

        match enter_row(session, &symbols) {
            Ok(outcome) => {
                println!("\n  {}", format_feedback(outcome.feedback).bold());
                if outcome.status == GameStatus::InProgress {
                    println!(
                        "  {} guesses left\n",
                        session.state().remaining_guesses()
                    );
                }
            }
            Err(err @ SubmitError::InvalidLength { .. }) => {
                println!("{} {err}\n", "❌".red());
            }
            Err(SubmitError::GameOver) => {}
        }
    }
}

/// Submit a typed line as the current row
///
/// The line either finishes a row that was started earlier (for example in the
/// TUI) or replaces it with five symbols of its own. Anything else is rejected
/// before the session is touched.
///
/// # Errors
/// Returns `SubmitError::InvalidLength` if the line does not make a full row,
/// or `SubmitError::GameOver` if the game already ended.
pub fn enter_row<S: Store>(
    session: &mut Session<S>,
    typed: &[Symbol],
) -> Result<SubmitOutcome, SubmitError> {
    if session.state().is_complete() {
        return Err(SubmitError::GameOver);
    }

    let started = session.state().current_guess();
    let continued: Vec<Symbol> = started.iter().chain(typed).copied().collect();
    let code = Code::from_slice(&continued)
        .or_else(|_| Code::from_slice(typed))
        .map_err(|_| SubmitError::InvalidLength { len: typed.len() })?;

    let keep = if code.symbols().starts_with(started) {
        started.len()
    } else {
        0
    };
    while session.state().current_guess().len() > keep {
        session.delete_last_symbol();
    }
    for &symbol in &code.symbols()[keep..] {
        session.append_symbol(symbol);
    }
    session.submit_guess()
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

//! Shareable result summary
//!
//! Produces the spoiler-free text players paste elsewhere: the puzzle number,
//! the attempt count and one line of feedback glyphs per guess.

use super::state::GameState;
use crate::core::{Code, Feedback, MAX_GUESSES};

/// Title printed at the top of shared results
pub const GAME_TITLE: &str = "Formulaic";

/// Link appended to shared results when no origin is configured
pub const DEFAULT_SHARE_ORIGIN: &str = "play.yourgamesite.com";

/// Build the share text for a board
///
/// An unfinished game shows `X/9`, like a loss. If a row is being typed its
/// partial score is included as the next guess line.
///
/// # Examples
/// ```
/// use formulaic::core::Code;
/// use formulaic::game::{GameState, build_share_text};
///
/// let secret = Code::parse("12345").unwrap();
/// let mut state = GameState::new(0);
/// for symbol in secret.symbols() {
///     state.append_symbol(*symbol);
/// }
/// state.submit_guess(&secret).unwrap();
///
/// let text = build_share_text(&state, &secret, 1, "example.com");
/// assert_eq!(text, "Formulaic #1 - 1/9\n\nGuess 1: ⚫⚫⚫⚫⚫\n\nexample.com");
/// ```
#[must_use]
pub fn build_share_text(state: &GameState, secret: &Code, puzzle_number: u32, origin: &str) -> String {
    let attempts = if state.is_win() {
        format!("{}/{MAX_GUESSES}", state.attempts())
    } else {
        format!("X/{MAX_GUESSES}")
    };

    let mut lines = vec![format!("{GAME_TITLE} #{puzzle_number} - {attempts}"), String::new()];

    for (i, feedback) in state.feedbacks().iter().enumerate() {
        lines.push(format!("Guess {}: {}", i + 1, feedback.to_glyphs()));
    }

    if !state.is_complete() && !state.current_guess().is_empty() {
        let preview = Feedback::evaluate_partial(secret, state.current_guess());
        lines.push(format!(
            "Guess {}: {}",
            state.feedbacks().len() + 1,
            preview.to_glyphs()
        ));
    }

    lines.push(String::new());
    lines.push(origin.to_string());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Symbol;

    fn submit(state: &mut GameState, secret: &Code, guess: &str) {
        for symbol in Code::parse(guess).unwrap().symbols() {
            state.append_symbol(*symbol);
        }
        state.submit_guess(secret).unwrap();
    }

    #[test]
    fn share_text_for_win() {
        let secret = Code::parse("12345").unwrap();
        let mut state = GameState::new(290);
        submit(&mut state, &secret, "13245");
        submit(&mut state, &secret, "66666");
        submit(&mut state, &secret, "12345");

        let text = build_share_text(&state, &secret, 291, DEFAULT_SHARE_ORIGIN);
        let expected = "Formulaic #291 - 3/9\n\
                        \n\
                        Guess 1: ⚫⚫⚫⚪⚪\n\
                        Guess 2: \n\
                        Guess 3: ⚫⚫⚫⚫⚫\n\
                        \n\
                        play.yourgamesite.com";
        assert_eq!(text, expected);
    }

    #[test]
    fn share_text_for_loss_uses_x() {
        let secret = Code::parse("12345").unwrap();
        let mut state = GameState::new(0);
        for _ in 0..MAX_GUESSES {
            submit(&mut state, &secret, "77777");
        }
        let text = build_share_text(&state, &secret, 1, "o");
        assert!(text.starts_with("Formulaic #1 - X/9\n\n"));
        assert_eq!(text.lines().filter(|l| l.starts_with("Guess")).count(), MAX_GUESSES);
    }

    #[test]
    fn share_text_includes_row_in_progress() {
        let secret = Code::parse("12345").unwrap();
        let mut state = GameState::new(0);
        submit(&mut state, &secret, "54321");
        state.append_symbol(Symbol::Strawberry);
        state.append_symbol(Symbol::Thread);

        let text = build_share_text(&state, &secret, 1, "o");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Formulaic #1 - X/9");
        assert_eq!(lines[2], "Guess 1: ⚫⚪⚪⚪⚪");
        assert_eq!(lines[3], "Guess 2: ⚫⚪");
        assert_eq!(lines[5], "o");
    }

    #[test]
    fn share_text_for_empty_board() {
        let secret = Code::parse("12345").unwrap();
        let state = GameState::new(0);
        assert_eq!(build_share_text(&state, &secret, 1, "o"), "Formulaic #1 - X/9\n\n\no");
    }
}

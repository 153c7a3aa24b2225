//! Code scoring command
//!
//! Scores an arbitrary guess against an arbitrary secret, handy for checking
//! how feedback treats repeated symbols.

use crate::core::{Code, Feedback};

/// Result of scoring a guess
pub struct ScoreResult {
    pub secret: Code,
    pub guess: Code,
    pub feedback: Feedback,
}

/// Parse both codes and score `guess` against `secret`
///
/// # Errors
///
/// Returns an error if either code is not five palette symbols.
pub fn score_codes(secret: &str, guess: &str) -> Result<ScoreResult, String> {
    let secret = Code::parse(secret).map_err(|e| format!("Invalid secret: {e}"))?;
    let guess = Code::parse(guess).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = Feedback::evaluate(&secret, &guess);

    Ok(ScoreResult {
        secret,
        guess,
        feedback,
    })
}

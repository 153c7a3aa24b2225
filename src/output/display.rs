//! Display functions for command results

use super::formatters::{create_progress_bar, format_feedback, format_row};
use crate::core::{Code, Feedback, MAX_GUESSES};
use crate::game::{GameState, GameStatus, Stats};
use crate::puzzle::PuzzleDay;
use colored::Colorize;

/// Print the board: submitted rows, the row being typed, then empty rows
pub fn print_board(state: &GameState) {
    println!("{}", "─".repeat(40).cyan());
    for (i, (guess, feedback)) in state.history().enumerate() {
        println!(
            " {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            format_row(guess.symbols()),
            format_feedback(*feedback)
        );
    }

    let mut row = state.attempts();
    if !state.is_complete() && row < MAX_GUESSES {
        println!(
            " {} {}",
            format!("{}.", row + 1).bright_yellow().bold(),
            format_row(state.current_guess())
        );
        row += 1;
    }
    for i in row..MAX_GUESSES {
        println!(" {} {}", format!("{}.", i + 1).bright_black(), format_row(&[]));
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the puzzle header line
pub fn print_puzzle_header(day: PuzzleDay) {
    println!(
        "\n{} {}  {}",
        "FORMULAIC".bright_cyan().bold(),
        format!("#{}", day.puzzle_number()).bright_yellow().bold(),
        day.seed().bright_black()
    );
}

/// Print the result of a finished game
pub fn print_result(state: &GameState, secret: &Code) {
    match state.status() {
        GameStatus::Won => println!(
            "\n{}",
            format!("🎉 You Win! Solved in {}/{MAX_GUESSES}", state.attempts())
                .green()
                .bold()
        ),
        GameStatus::Lost => println!("\n{}", "So Close!".red().bold()),
        GameStatus::InProgress => return,
    }
    println!("Solution: {secret}");
}

/// Print the aggregate statistics with a distribution chart
pub fn print_stats(stats: &Stats) {
    println!("\n{}", "═".repeat(50).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(50).cyan());

    println!("   Played:          {}", stats.games_played);
    println!(
        "   Win %:           {}",
        format!("{}%", stats.win_rate()).bright_yellow().bold()
    );
    println!("   Current streak:  {}", stats.current_streak);
    println!("   Max streak:      {}", stats.max_streak);

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let widths = stats.distribution_bar_widths();
    for (i, (&count, &width)) in stats.guess_distribution.iter().zip(&widths).enumerate() {
        let bar = create_progress_bar(width, 30);
        let bar = if count > 0 {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count}", i + 1);
    }
}

/// Print the score of one code against another
pub fn print_score(secret: &Code, guess: &Code, feedback: Feedback) {
    println!("Secret:   {secret}");
    println!("Guess:    {guess}");
    println!(
        "Feedback: {}  ({} exact, {} partial)",
        format_feedback(feedback),
        feedback.exact().to_string().bright_white().bold(),
        feedback.partial().to_string().bright_white().bold()
    );
    if feedback.is_solved() {
        println!("{}", "✅ Solved!".green().bold());
    }
}

//! Formulaic - CLI
//!
//! Daily emoji code-breaking puzzle with TUI and line modes.

use anyhow::{Result, bail};
use chrono::Local;
use clap::{Parser, Subcommand};
use formulaic::{
    commands::{print_summary, run_simple, score_codes, summarize},
    config::{Config, DATA_DIR_ENV, parse_date},
    game::{DEFAULT_SHARE_ORIGIN, Session},
    logging,
    output::{print_board, print_puzzle_header, print_result, print_score, print_stats},
    storage::{FileStore, MemoryStore, Store},
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "formulaic",
    about = "Crack the daily code of five emojis in nine guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved games and stats (default: ~/.formulaic)
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long, global = true)]
    no_save: bool,

    /// Play the puzzle of another day (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date)]
    date: Option<chrono::NaiveDate>,

    /// Link appended to the share text
    #[arg(long, global = true, default_value = DEFAULT_SHARE_ORIGIN)]
    share_origin: String,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// Show the puzzle number, progress and time until the next puzzle
    Today,

    /// Show statistics and the guess distribution
    Stats,

    /// Print the share text for the selected day
    Share,

    /// Score a guess against a secret, e.g. `score 11345 13345`
    Score {
        /// Secret code as digits (1-8) or emoji
        secret: String,

        /// Guessed code as digits (1-8) or emoji
        guess: String,
    },

    /// Show the solution of a finished or past puzzle
    Reveal,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let mut config = Config {
        save: !cli.no_save,
        date: cli.date,
        share_origin: cli.share_origin.clone(),
        ..Config::default()
    };
    if let Some(dir) = cli.data_dir.clone() {
        config.data_dir = dir;
    }

    // The TUI owns the terminal, so it always logs to a file
    let log_file = match (&command, cli.log_file) {
        (_, Some(path)) => Some(path),
        (Commands::Play, None) => Some(config.log_path()),
        _ => None,
    };
    logging::init(cli.verbose, log_file.as_deref())?;

    if let Commands::Score { secret, guess } = &command {
        return run_score_command(secret, guess);
    }

    if config.save {
        info!(dir = %config.data_dir.display(), "using file storage");
        run(&command, &config, FileStore::new(config.data_dir.clone()))
    } else {
        info!("storage disabled");
        run(&command, &config, MemoryStore::new())
    }
}

fn run<S: Store>(command: &Commands, config: &Config, store: S) -> Result<()> {
    let day = config.puzzle_day();
    let mut session = Session::open(store, day);

    match command {
        Commands::Play => run_play_command(session, config),
        Commands::Simple => {
            run_simple(&mut session, &config.share_origin).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Today => {
            print_summary(&summarize(&session, &Local::now()));
            Ok(())
        }
        Commands::Stats => {
            print_stats(session.stats());
            Ok(())
        }
        Commands::Share => {
            println!("{}", session.share_text(&config.share_origin));
            Ok(())
        }
        Commands::Reveal => run_reveal_command(&session),
        Commands::Score { secret, guess } => run_score_command(secret, guess),
    }
}

fn run_play_command<S: Store>(session: Session<S>, config: &Config) -> Result<()> {
    use formulaic::interactive::{App, run_tui};

    let app = App::new(session, config.share_origin.clone());
    run_tui(app)
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let result = score_codes(secret, guess).map_err(|e| anyhow::anyhow!(e))?;
    print_score(&result.secret, &result.guess, result.feedback);
    Ok(())
}

fn run_reveal_command<S: Store>(session: &Session<S>) -> Result<()> {
    let day = session.day();
    let is_past = day.date() < Local::now().date_naive();

    print_puzzle_header(day);
    if let Some(secret) = session.revealed_secret() {
        print_board(session.state());
        print_result(session.state(), secret);
        return Ok(());
    }
    if !is_past {
        bail!("puzzle #{} is still in progress", day.puzzle_number());
    }

    let puzzle = formulaic::puzzle::DailyPuzzle::new(day);
    println!("Solution: {}", puzzle.secret());
    Ok(())
}

//! Hangman - CLI
//!
//! Terminal Hangman with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman_tui::{
    commands::{inspect_embedded, inspect_file, run_simple},
    core::{Session, WordEntry},
    output::print_wordlist_report,
    wordlists::{
        WORDS,
        loader::{entries_from_pairs, load_from_file},
    },
};

#[derive(Parser)]
#[command(
    name = "hangman_tui",
    about = "Terminal Hangman word-guessing game with TUI and CLI modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a word|hint file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Inspect a word list and report unplayable entries
    Words {
        /// Path to the list to inspect (defaults to the -w selection)
        path: Option<String>,
    },
}

/// Load the word list selected by the -w flag
fn load_entries(wordlist_mode: &str) -> Result<Vec<WordEntry>> {
    match wordlist_mode {
        "embedded" => Ok(entries_from_pairs(WORDS)),
        path => load_from_file(path).with_context(|| format!("Failed to load word list {path}")),
    }
}

/// Build a session, failing fast on an empty or unusable list
fn new_session(wordlist_mode: &str) -> Result<Session> {
    let entries = load_entries(wordlist_mode)?;
    Session::new(entries).context("Cannot start a game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli.wordlist),
        Commands::Simple => run_simple_command(&cli.wordlist),
        Commands::Words { path } => run_words_command(path.as_deref(), &cli.wordlist),
    }
}

fn run_play_command(wordlist_mode: &str) -> Result<()> {
    use hangman_tui::interactive::{App, run_tui};

    let app = App::new(new_session(wordlist_mode)?);
    run_tui(app)
}

fn run_simple_command(wordlist_mode: &str) -> Result<()> {
    run_simple(new_session(wordlist_mode)?).map_err(|e| anyhow::anyhow!(e))
}

fn run_words_command(path: Option<&str>, wordlist_mode: &str) -> Result<()> {
    let report = match path.unwrap_or(wordlist_mode) {
        "embedded" => inspect_embedded(WORDS),
        path => inspect_file(path).map_err(|e| anyhow::anyhow!(e))?,
    };

    print_wordlist_report(&report);
    Ok(())
}

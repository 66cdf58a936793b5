//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::core::{GuessOutcome, Session};
use crate::output::formatters::{gallows, guess_bar, guessed_letters, masked_word};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(mut session: Session) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Hangman - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the word one letter at a time.");
    println!("Six wrong guesses and the round is lost. Spaces are free.\n");
    println!("Commands: 'quit' to exit, 'new' to skip to the next word");
    println!("(single letters are always guesses)\n");

    let mut rounds_played = 0_usize;

    loop {
        let round = session.round();

        println!("────────────────────────────────────────────────────────────");
        println!("{}", gallows(round.incorrect_count()));
        println!(
            "\n  [{}] {} guesses left",
            guess_bar(round.remaining_guesses(), 12),
            round.remaining_guesses()
        );
        println!("\n  Word:  {}", masked_word(round).bright_white().bold());
        println!("  Hint:  {}", round.entry().hint().cyan());

        let guessed = guessed_letters(round);
        if !guessed.is_empty() {
            println!("  Tried: {}", guessed.bright_black());
        }
        println!();

        let input = get_user_input("Guess a letter (or command)")?.to_lowercase();

        // Multi-letter commands only; a single letter is always a guess
        match input.as_str() {
            "quit" | "exit" => {
                print_goodbye(session.score(), rounds_played);
                return Ok(());
            }
            "new" | "skip" => {
                session.start_round();
                println!("\n🔄 New word!\n");
                continue;
            }
            _ => {}
        }

        let Some(letter) = input.chars().next() else {
            println!("{}", "Type a letter to guess.\n".yellow());
            continue;
        };

        if input.chars().count() > 1 {
            println!("{}", "One letter at a time!\n".yellow());
            continue;
        }

        match session.guess(letter) {
            GuessOutcome::Correct => {
                println!(
                    "\n{}",
                    format!("✓ {} is in the word!", letter.to_ascii_uppercase())
                        .green()
                        .bold()
                );
            }
            GuessOutcome::Incorrect => {
                println!(
                    "\n{}",
                    format!("✗ No {} in this word", letter.to_ascii_uppercase())
                        .red()
                        .bold()
                );
            }
            GuessOutcome::Ignored => {
                if letter.is_ascii_alphabetic() {
                    println!("{}", "Already tried that one!\n".yellow());
                } else {
                    println!("{}", "Letters only!\n".yellow());
                }
            }
            GuessOutcome::Won => {
                rounds_played += 1;
                print_win_banner(&session);

                if !ask_play_again()? {
                    print_goodbye(session.score(), rounds_played);
                    return Ok(());
                }
                session.start_round();
                println!("\n🔄 New word!\n");
            }
            GuessOutcome::Lost => {
                rounds_played += 1;
                print_loss_banner(&session);

                if !ask_play_again()? {
                    print_goodbye(session.score(), rounds_played);
                    return Ok(());
                }
                session.start_round();
                println!("\n🔄 New word!\n");
            }
        }
    }
}

fn print_win_banner(session: &Session) {
    let round = session.round();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "        🎉 🎊 ✨  Y O U   W O N !  ✨ 🎊 🎉        "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match round.incorrect_count() {
        0 => ("🏆 Flawless!", "Not a single miss!"),
        1 => ("⭐ Excellent!", "Just one wrong guess!"),
        2 => ("💫 Great!", "Very well played!"),
        3 => ("✨ Good!", "Nice work!"),
        4 => ("👍 Solved!", "Got there!"),
        _ => ("😅 Phew!", "That was close!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  The word was {}",
        round.entry().word().bright_white().bold()
    );
    println!(
        "  Score: {}",
        session.score().to_string().bright_cyan().bold()
    );
    println!("\n{}", "═".repeat(70).bright_cyan());
}

fn print_loss_banner(session: &Session) {
    let round = session.round();

    println!("\n{}", "═".repeat(70).bright_black());
    println!("{}", "              💀  G A M E   O V E R  💀              ".red().bold());
    println!("{}", "═".repeat(70).bright_black());

    println!("{}", gallows(round.incorrect_count()).red());
    println!(
        "\n  The word was {}",
        round.entry().word().bright_white().bold()
    );
    println!("  Hint: {}", round.entry().hint().cyan());
    println!(
        "  Score: {}",
        session.score().to_string().bright_cyan().bold()
    );
    println!("\n{}", "═".repeat(70).bright_black());
}

fn print_goodbye(score: u32, rounds_played: usize) {
    if rounds_played > 0 {
        println!(
            "\n👋 Thanks for playing! {score} won out of {rounds_played} rounds.\n"
        );
    } else {
        println!("\n👋 Thanks for playing!\n");
    }
}

fn ask_play_again() -> Result<bool, String> {
    let answer = get_user_input("\nPlay again? (yes/no)")?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}

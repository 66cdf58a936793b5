//! Display functions for command results

use crate::commands::WordlistReport;
use colored::Colorize;

/// Print the result of inspecting a word list
pub fn print_wordlist_report(report: &WordlistReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD LIST:".bright_cyan().bold(),
        report.source.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Entries:  {}", report.total);
    println!(
        "   Playable: {}",
        report.valid.to_string().green().bold()
    );

    if report.invalid.is_empty() {
        println!("\n{}", "✅ Every entry is playable".green().bold());
    } else {
        println!(
            "   Invalid:  {}",
            report.invalid.len().to_string().red().bold()
        );

        println!("\n{}", "Problems:".bright_cyan().bold());
        for line in &report.invalid {
            println!(
                "   line {:>3}: {}  {}",
                line.line_number.to_string().yellow(),
                line.content,
                format!("({})", line.reason).bright_black()
            );
        }
    }
    println!();
}

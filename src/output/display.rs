//! Display functions for command results

use super::formatters::{color_swatch, format_submission, join_words};
use crate::core::{GroupColor, Grouping, Puzzle, PuzzleSummary};
use crate::rules::{Hint, SubmissionOutcome, SubmissionResult};
use colored::{ColoredString, Colorize};

/// Color a word with its group color
#[must_use]
pub fn paint(text: &str, color: GroupColor) -> ColoredString {
    match color {
        GroupColor::Yellow => text.bright_yellow(),
        GroupColor::Green => text.bright_green(),
        GroupColor::Blue => text.bright_blue(),
        GroupColor::Purple => text.bright_magenta(),
    }
}

/// Print the board: each color group, then the uncolored words
pub fn print_board(puzzle: &Puzzle, grouping: &Grouping) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Puzzle {} ({})",
        puzzle.id().bright_white().bold(),
        puzzle.date()
    );
    println!("{}", "─".repeat(60).cyan());

    for color in GroupColor::ALL {
        let words: Vec<String> = grouping
            .words(color)
            .iter()
            .map(|w| paint(w, color).bold().to_string())
            .collect();
        println!(
            "{} {:<7} [{}/4] {}",
            color_swatch(color),
            color.name(),
            grouping.count(color),
            words.join("  ")
        );
    }

    let unassigned = grouping.unassigned(puzzle);
    if !unassigned.is_empty() {
        println!("\n{}", "Unassigned:".bright_black());
        for row in unassigned.chunks(4) {
            println!("   {}", join_words(row).bright_white());
        }
    }
    println!();
}

/// Print a submission result with success/partial/error styling
pub fn print_submission_result(result: &SubmissionResult) {
    let message = format_submission(result);
    match result.outcome() {
        SubmissionOutcome::Solved => {
            println!("\n{}", "═".repeat(60).bright_cyan());
            println!("  🎉 {}", message.bright_green().bold());
            println!("{}", "═".repeat(60).bright_cyan());
        }
        SubmissionOutcome::Partial => println!("\n{}", message.yellow()),
        SubmissionOutcome::AllIncorrect => println!("\n{}", message.red()),
    }
}

/// Print a hint with its level
pub fn print_hint(hint: &Hint) {
    println!(
        "\n💡 {} {}",
        format!("[{}]", hint.level).bright_cyan().bold(),
        hint.text
    );
}

/// Print an error message for the player
pub fn print_error(message: &str) {
    println!("\n❌ {}", message.red());
}

/// Print a puzzle listing in the order given
pub fn print_puzzle_list(listing: &[PuzzleSummary]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "AVAILABLE PUZZLES".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    for entry in listing {
        println!(
            "   {}  {}",
            entry.date.to_string().bright_black(),
            entry.id.bright_white()
        );
    }
    if listing.is_empty() {
        println!("   {}", "No puzzles match.".bright_black());
    }
    println!("\n{} puzzle(s)", listing.len());
}

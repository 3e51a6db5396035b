//! Formatting utilities for terminal output

use crate::core::GroupColor;
use crate::rules::SubmissionResult;
use std::fmt::Write;

/// Square emoji for a group color
#[must_use]
pub const fn color_swatch(color: GroupColor) -> &'static str {
    match color {
        GroupColor::Yellow => "🟨",
        GroupColor::Green => "🟩",
        GroupColor::Blue => "🟦",
        GroupColor::Purple => "🟪",
    }
}

/// Comma-separated word list
#[must_use]
pub fn join_words<S: AsRef<str>>(words: &[S]) -> String {
    words
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Plain-text summary of a submission
///
/// Correct groups first, then incorrect ones, one line per group.
#[must_use]
pub fn format_submission(result: &SubmissionResult) -> String {
    if result.is_solved() {
        return "Congratulations! You solved the puzzle!".to_string();
    }

    let mut message = String::new();

    if !result.correct_groups.is_empty() {
        message.push_str("Correct groups:\n");
        for group in &result.correct_groups {
            let _ = writeln!(
                message,
                "- {}: {}",
                group.color.name().to_uppercase(),
                group.category_name
            );
        }
    }

    if !result.incorrect_groups.is_empty() {
        if !message.is_empty() {
            message.push('\n');
        }
        message.push_str("Incorrect groups:\n");
        for group in &result.incorrect_groups {
            let _ = writeln!(
                message,
                "- {}: {}",
                group.color.name().to_uppercase(),
                join_words(&group.submitted_words)
            );
        }
    }

    message
}

/// Swatch row for the found categories, padded with blanks
#[must_use]
pub fn progress_row(found: &[GroupColor]) -> String {
    let mut row: String = found.iter().map(|&color| color_swatch(color)).collect();
    for _ in found.len()..4 {
        row.push('⬜');
    }
    row
}

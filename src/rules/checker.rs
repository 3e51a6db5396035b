//! Submission checking
//!
//! Compares every complete color group against the puzzle's categories and
//! classifies each one as correct or incorrect. Rendering the result is left
//! to the caller.

use super::validator::first_partial_group;
use crate::core::{CATEGORY_COUNT, GroupColor, Grouping, Puzzle};
use tracing::debug;

/// Error type for groupings that cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Each colored group must have exactly 4 cards ({color} has {count}).")]
    PartialGroup { color: GroupColor, count: usize },

    #[error("Please assign colors to at least one group of cards.")]
    NoCompleteGroup,
}

/// A submitted group that matches a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectGroup {
    pub color: GroupColor,
    pub category_name: String,
}

/// A submitted group that matches no category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncorrectGroup {
    pub color: GroupColor,
    /// Submitted words in sorted order
    pub submitted_words: Vec<String>,
}

/// How a submission resolved, for styling the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every category found
    Solved,
    /// Some, but not all, categories found
    Partial,
    /// No submitted group matched
    AllIncorrect,
}

/// Classification of one submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionResult {
    pub correct_groups: Vec<CorrectGroup>,
    pub incorrect_groups: Vec<IncorrectGroup>,
}

impl SubmissionResult {
    /// The puzzle is solved only when all four groups are correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.correct_groups.len() == CATEGORY_COUNT
    }

    #[must_use]
    pub fn outcome(&self) -> SubmissionOutcome {
        if self.is_solved() {
            SubmissionOutcome::Solved
        } else if self.correct_groups.is_empty() {
            SubmissionOutcome::AllIncorrect
        } else {
            SubmissionOutcome::Partial
        }
    }
}

/// Check the complete groups of a grouping against the puzzle
///
/// Colors are checked in order yellow, green, blue, purple. A group is correct
/// when its words equal some category's words exactly (case-sensitive); which
/// color the player used does not matter.
///
/// # Errors
/// Returns `ValidationError::PartialGroup` if any color holds 1-3 words, or
/// `ValidationError::NoCompleteGroup` if no color holds a full group.
///
/// # Examples
/// ```
/// use connections_plus::core::{GroupColor, Grouping};
/// use connections_plus::puzzles::{BundledSource, PuzzleRequest, PuzzleSource};
/// use connections_plus::rules::check_submission;
///
/// let puzzle = BundledSource::new().load_puzzle(&PuzzleRequest::Daily).unwrap();
/// let grouping = Grouping::new().with_group(
///     GroupColor::Yellow,
///     ["SOURDOUGH", "BAGUETTE", "CIABATTA", "FOCACCIA"],
/// );
///
/// let result = check_submission(&grouping, &puzzle).unwrap();
/// assert_eq!(result.correct_groups[0].category_name, "Types of Bread");
/// assert!(!result.is_solved());
/// ```
pub fn check_submission(
    grouping: &Grouping,
    puzzle: &Puzzle,
) -> Result<SubmissionResult, ValidationError> {
    if let Some((color, count)) = first_partial_group(grouping) {
        return Err(ValidationError::PartialGroup { color, count });
    }

    let mut result = SubmissionResult::default();

    for color in grouping.complete_colors() {
        // Sets are already ordered, so this is the sorted word list
        let submitted: Vec<&str> = grouping.words(color).iter().map(String::as_str).collect();

        // Category word sets are disjoint, so at most one can match
        let matched = puzzle
            .categories()
            .iter()
            .find(|category| category.sorted_words() == submitted);

        match matched {
            Some(category) => result.correct_groups.push(CorrectGroup {
                color,
                category_name: category.name.clone(),
            }),
            None => result.incorrect_groups.push(IncorrectGroup {
                color,
                submitted_words: submitted.iter().map(|w| (*w).to_string()).collect(),
            }),
        }
    }

    if result.correct_groups.is_empty() && result.incorrect_groups.is_empty() {
        return Err(ValidationError::NoCompleteGroup);
    }

    debug!(
        puzzle = puzzle.id(),
        correct = result.correct_groups.len(),
        incorrect = result.incorrect_groups.len(),
        "Checked submission"
    );

    Ok(result)
}

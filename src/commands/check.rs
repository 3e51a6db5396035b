//! One-shot submission and hint commands
//!
//! Build a board from color/word lists given on the command line, then check
//! it or ask for a hint.

use crate::core::GroupColor;
use crate::rules::{Hint, HintError, HintLevel, IndexSource, SubmissionResult};
use crate::session::{CheckError, GroupingError, Session};

/// Error type for one-shot commands
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Grouping(#[from] GroupingError),

    #[error(transparent)]
    Check(#[from] CheckError),

    #[error(transparent)]
    Hint(#[from] HintError),
}

/// Color the given words on the session's board
///
/// Typed words match board words regardless of ASCII case.
///
/// # Errors
/// Returns `GroupingError` for words that are not on the board.
pub fn apply_groups(
    session: &mut Session,
    groups: &[(GroupColor, Vec<String>)],
) -> Result<(), GroupingError> {
    for (color, words) in groups {
        for typed in words {
            let word = session.resolve_word(typed)?;
            session.assign(&word, *color)?;
        }
    }
    Ok(())
}

/// Split a comma-separated word list, trimming blanks
///
/// # Examples
/// ```
/// use connections_plus::commands::split_words;
///
/// assert_eq!(split_words(" MOON, COMET ,,PLANET"), vec!["MOON", "COMET", "PLANET"]);
/// ```
#[must_use]
pub fn split_words(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Check a board built from `groups`
///
/// # Errors
/// Returns `CommandError` for unknown words, partial groups or no complete group.
pub fn run_check(
    session: &mut Session,
    groups: &[(GroupColor, Vec<String>)],
) -> Result<SubmissionResult, CommandError> {
    apply_groups(session, groups)?;
    Ok(session.submit()?)
}

/// Ask for a hint on a board built from `groups`
///
/// # Errors
/// Returns `CommandError` for unknown words or when no puzzle is loaded.
pub fn run_hint(
    session: &mut Session,
    groups: &[(GroupColor, Vec<String>)],
    level: HintLevel,
    indices: &mut impl IndexSource,
) -> Result<Hint, CommandError> {
    apply_groups(session, groups)?;
    Ok(session.hint(level, indices)?.clone())
}

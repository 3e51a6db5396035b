//! Puzzle browsing
//!
//! Listings are shown newest first and can be narrowed by a search term that
//! matches the identifier or the date.

use crate::core::PuzzleSummary;
use crate::puzzles::{PuzzleSource, SourceError};

/// True when `term` appears in the entry's id or date, ignoring case
///
/// # Examples
/// ```
/// use connections_plus::commands::matches_search;
/// use connections_plus::core::{PuzzleSummary, parse_date};
///
/// let entry = PuzzleSummary {
///     id: "sample2".into(),
///     date: parse_date("2023-01-02").unwrap(),
/// };
/// assert!(matches_search(&entry, "SAMPLE"));
/// assert!(matches_search(&entry, "2023-01"));
/// assert!(!matches_search(&entry, "2024"));
/// ```
#[must_use]
pub fn matches_search(entry: &PuzzleSummary, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || entry.id.to_lowercase().contains(&term)
        || entry.date.to_string().contains(&term)
}

/// Sort newest first and keep the entries matching `search`
#[must_use]
pub fn filter_listing(
    mut listing: Vec<PuzzleSummary>,
    search: Option<&str>,
) -> Vec<PuzzleSummary> {
    listing.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    if let Some(term) = search {
        listing.retain(|entry| matches_search(entry, term));
    }
    listing
}

/// List a source's puzzles, newest first, optionally filtered
///
/// # Errors
/// Propagates the source's listing error.
pub fn browse_puzzles<S: PuzzleSource + ?Sized>(
    source: &S,
    search: Option<&str>,
) -> Result<Vec<PuzzleSummary>, SourceError> {
    Ok(filter_listing(source.list_puzzles()?, search))
}

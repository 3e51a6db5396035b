//! Bundled puzzle set
//!
//! The default puzzles compiled into the binary. Always available, so it is
//! the fallback for every other source.

use super::embedded::BUNDLED_PUZZLES;
use super::{PuzzleRequest, PuzzleSource, SourceError};
use crate::core::{Puzzle, PuzzleSummary};
use tracing::warn;

/// Puzzle source backed by the embedded puzzle files
#[derive(Debug, Clone)]
pub struct BundledSource {
    puzzles: Vec<Puzzle>,
}

impl BundledSource {
    /// Parse the embedded puzzles, skipping any that are malformed
    #[must_use]
    pub fn new() -> Self {
        Self::from_json_entries(BUNDLED_PUZZLES)
    }

    fn from_json_entries(entries: &[(&str, &str)]) -> Self {
        let puzzles = entries
            .iter()
            .filter_map(|&(name, json)| match Puzzle::from_json(json) {
                Ok(puzzle) => Some(puzzle),
                Err(e) => {
                    warn!(file = name, error = %e, "Skipping malformed bundled puzzle");
                    None
                }
            })
            .collect();
        Self { puzzles }
    }

    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// The puzzle served when nothing more specific is available
    #[must_use]
    pub fn default_puzzle(&self) -> Option<&Puzzle> {
        self.puzzles.first()
    }
}

impl Default for BundledSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleSource for BundledSource {
    fn load_puzzle(&self, request: &PuzzleRequest) -> Result<Puzzle, SourceError> {
        match request {
            PuzzleRequest::Daily => self.default_puzzle().cloned().ok_or_else(|| {
                SourceError::SourceUnavailable("no bundled puzzles".to_string())
            }),
            PuzzleRequest::Id(id) => self
                .puzzles
                .iter()
                .find(|p| p.id() == id.as_str())
                .cloned()
                .ok_or_else(|| SourceError::PuzzleNotFound(id.clone())),
        }
    }

    fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError> {
        Ok(self.puzzles.iter().map(Puzzle::summary).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::BUNDLED_PUZZLES_COUNT;

    #[test]
    fn every_bundled_puzzle_parses() {
        let source = BundledSource::new();
        assert_eq!(source.puzzles().len(), BUNDLED_PUZZLES_COUNT);
        assert!(BUNDLED_PUZZLES_COUNT >= 2);
    }

    #[test]
    fn bundled_file_names_match_ids() {
        for &(name, json) in BUNDLED_PUZZLES {
            let puzzle = Puzzle::from_json(json).unwrap();
            assert_eq!(puzzle.id(), name, "file {name}.json has a different id");
        }
    }

    #[test]
    fn daily_is_first_puzzle() {
        let puzzle = BundledSource::new()
            .load_puzzle(&PuzzleRequest::Daily)
            .unwrap();
        assert_eq!(puzzle.id(), "sample1");
        assert_eq!(puzzle.categories()[0].name, "Types of Bread");
    }

    #[test]
    fn load_by_id() {
        let puzzle = BundledSource::new()
            .load_puzzle(&PuzzleRequest::Id("sample2".to_string()))
            .unwrap();
        assert_eq!(puzzle.categories()[3].name, "Board Games");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let result = BundledSource::new().load_puzzle(&PuzzleRequest::Id("nope".to_string()));
        assert_eq!(result, Err(SourceError::PuzzleNotFound("nope".to_string())));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let good = BUNDLED_PUZZLES[0];
        let source = BundledSource::from_json_entries(&[("broken", "{ not json"), good]);
        assert_eq!(source.puzzles().len(), 1);
    }

    #[test]
    fn listing_has_ids_and_dates() {
        let listing = BundledSource::new().list_puzzles().unwrap();
        assert_eq!(listing.len(), BUNDLED_PUZZLES_COUNT);
        assert_eq!(listing[0].id, "sample1");
        assert_eq!(listing[0].date.to_string(), "2023-01-01");
    }
}

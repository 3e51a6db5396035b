//! Puzzle sources
//!
//! Where puzzles come from: the set bundled into the binary, an on-disk
//! archive, or an archive that falls back to the bundled set when it fails.

mod bundled;
mod directory;
mod embedded;
mod fallback;

pub use bundled::BundledSource;
pub use directory::DirectorySource;
pub use embedded::{BUNDLED_PUZZLES, BUNDLED_PUZZLES_COUNT};
pub use fallback::FallbackSource;

use crate::core::{Puzzle, PuzzleSummary};
use crate::rules::IndexSource;
use crate::rules::random::pick;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Which puzzle to load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleRequest {
    /// The puzzle of the day
    Daily,
    /// A specific puzzle by identifier
    Id(String),
}

impl FromStr for PuzzleRequest {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("daily") {
            Ok(Self::Daily)
        } else {
            Ok(Self::Id(s.to_string()))
        }
    }
}

impl fmt::Display for PuzzleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => f.write_str("daily"),
            Self::Id(id) => f.write_str(id),
        }
    }
}

/// Error type for puzzle sources
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    #[error("Puzzle '{0}' was not found")]
    PuzzleNotFound(String),

    #[error("Puzzle source unavailable: {0}")]
    SourceUnavailable(String),
}

/// A supplier of puzzle definitions
pub trait PuzzleSource {
    /// Load one puzzle
    ///
    /// # Errors
    /// Returns `SourceError::PuzzleNotFound` for unknown identifiers and
    /// `SourceError::SourceUnavailable` when the source cannot be read.
    fn load_puzzle(&self, request: &PuzzleRequest) -> Result<Puzzle, SourceError>;

    /// List every puzzle the source offers
    ///
    /// # Errors
    /// Returns `SourceError::SourceUnavailable` when the source cannot be read.
    fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError>;
}

/// Load a uniformly chosen puzzle from a source
///
/// # Errors
/// Propagates listing and loading errors; an empty listing is
/// `SourceError::SourceUnavailable`.
pub fn random_puzzle<S: PuzzleSource + ?Sized>(
    source: &S,
    indices: &mut impl IndexSource,
) -> Result<Puzzle, SourceError> {
    let listing = source.list_puzzles()?;
    let entry = pick(indices, &listing)
        .ok_or_else(|| SourceError::SourceUnavailable("no puzzles listed".to_string()))?;
    source.load_puzzle(&PuzzleRequest::Id(entry.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ScriptedIndices;

    #[test]
    fn request_parsing() {
        assert_eq!("daily".parse(), Ok(PuzzleRequest::Daily));
        assert_eq!("DAILY".parse(), Ok(PuzzleRequest::Daily));
        assert_eq!(
            " sample2 ".parse(),
            Ok(PuzzleRequest::Id("sample2".to_string()))
        );
        assert_eq!(PuzzleRequest::Id("x".into()).to_string(), "x");
    }

    #[test]
    fn random_puzzle_uses_index_source() {
        let source = BundledSource::new();
        let mut indices = ScriptedIndices::new([1]);
        let puzzle = random_puzzle(&source, &mut indices).unwrap();
        assert_eq!(puzzle.id(), "sample2");
    }
}

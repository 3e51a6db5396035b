//! Source with a bundled fallback
//!
//! Wraps another source and answers from the bundled set whenever the primary
//! fails, so callers always get a playable puzzle.

use super::{BundledSource, PuzzleRequest, PuzzleSource, SourceError};
use crate::core::{Puzzle, PuzzleSummary};
use tracing::warn;

/// A primary source backed by the bundled puzzles
pub struct FallbackSource<P> {
    primary: P,
    bundled: BundledSource,
}

impl<P: PuzzleSource> FallbackSource<P> {
    #[must_use]
    pub fn new(primary: P) -> Self {
        Self {
            primary,
            bundled: BundledSource::new(),
        }
    }
}

impl<P: PuzzleSource> PuzzleSource for FallbackSource<P> {
    fn load_puzzle(&self, request: &PuzzleRequest) -> Result<Puzzle, SourceError> {
        self.primary.load_puzzle(request).or_else(|error| {
            warn!(%request, %error, "Primary puzzle source failed, using bundled puzzles");
            // Unknown ids get the default bundled puzzle rather than an error
            self.bundled
                .load_puzzle(request)
                .or_else(|_| self.bundled.load_puzzle(&PuzzleRequest::Daily))
        })
    }

    fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError> {
        self.primary.list_puzzles().or_else(|error| {
            warn!(%error, "Primary puzzle listing failed, using bundled puzzles");
            self.bundled.list_puzzles()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::letter_puzzle;

    /// Source that always fails with the given error
    struct Broken(SourceError);

    impl PuzzleSource for Broken {
        fn load_puzzle(&self, _: &PuzzleRequest) -> Result<Puzzle, SourceError> {
            Err(self.0.clone())
        }

        fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError> {
            Err(self.0.clone())
        }
    }

    /// Source holding a single puzzle
    struct Single(Puzzle);

    impl PuzzleSource for Single {
        fn load_puzzle(&self, _: &PuzzleRequest) -> Result<Puzzle, SourceError> {
            Ok(self.0.clone())
        }

        fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError> {
            Ok(vec![self.0.summary()])
        }
    }

    fn unavailable() -> Broken {
        Broken(SourceError::SourceUnavailable("offline".to_string()))
    }

    #[test]
    fn primary_success_passes_through() {
        let source = FallbackSource::new(Single(letter_puzzle()));
        let puzzle = source.load_puzzle(&PuzzleRequest::Daily).unwrap();
        assert_eq!(puzzle.id(), "letters");
        assert_eq!(source.list_puzzles().unwrap().len(), 1);
    }

    #[test]
    fn unavailable_primary_serves_bundled_puzzle() {
        let source = FallbackSource::new(unavailable());
        let puzzle = source
            .load_puzzle(&PuzzleRequest::Id("sample2".to_string()))
            .unwrap();
        assert_eq!(puzzle.id(), "sample2");
    }

    #[test]
    fn unknown_id_serves_default_puzzle() {
        let source = FallbackSource::new(Broken(SourceError::PuzzleNotFound("x".to_string())));
        let puzzle = source
            .load_puzzle(&PuzzleRequest::Id("x".to_string()))
            .unwrap();
        assert_eq!(puzzle.id(), "sample1");
    }

    #[test]
    fn listing_falls_back_to_bundled() {
        let source = FallbackSource::new(unavailable());
        let listing = source.list_puzzles().unwrap();
        assert_eq!(listing.len(), BundledSource::new().puzzles().len());
    }
}

//! Puzzle selection from a command-line choice

use crate::core::Puzzle;
use crate::puzzles::{BundledSource, PuzzleRequest, PuzzleSource, SourceError, random_puzzle};
use crate::rules::IndexSource;
use tracing::warn;

/// Load the puzzle named by `choice`: "daily", "random" or an identifier
///
/// The board comes back shuffled.
///
/// # Errors
/// Propagates the source's error.
pub fn select_puzzle<S: PuzzleSource + ?Sized>(
    source: &S,
    choice: &str,
    indices: &mut impl IndexSource,
) -> Result<Puzzle, SourceError> {
    let mut puzzle = if choice.trim().eq_ignore_ascii_case("random") {
        random_puzzle(source, indices)?
    } else {
        let Ok(request) = choice.parse::<PuzzleRequest>();
        source.load_puzzle(&request)?
    };
    puzzle.shuffle_board(indices);
    Ok(puzzle)
}

/// A puzzle ready to play
#[derive(Debug)]
pub struct Selection {
    pub puzzle: Puzzle,
    /// Why the requested puzzle was replaced by the bundled default
    pub fallback: Option<SourceError>,
}

impl Selection {
    /// Message telling the player their choice could not be loaded
    #[must_use]
    pub fn notice(&self, choice: &str) -> Option<String> {
        self.fallback.as_ref().map(|error| {
            format!(
                "Could not load puzzle '{choice}': {error}. Playing {} instead.",
                self.puzzle.id()
            )
        })
    }
}

/// Like [`select_puzzle`], but falls back to the bundled default puzzle
///
/// # Errors
/// Returns the original error only when no bundled puzzle exists either.
pub fn select_or_default<S: PuzzleSource + ?Sized>(
    source: &S,
    choice: &str,
    indices: &mut impl IndexSource,
) -> Result<Selection, SourceError> {
    match select_puzzle(source, choice, indices) {
        Ok(puzzle) => {
            // A fallback source may already have swapped in another puzzle
            let fallback = match choice.parse::<PuzzleRequest>() {
                Ok(PuzzleRequest::Id(id))
                    if !id.eq_ignore_ascii_case("random") && id != puzzle.id() =>
                {
                    Some(SourceError::PuzzleNotFound(id))
                }
                _ => None,
            };
            Ok(Selection { puzzle, fallback })
        }
        Err(error) => {
            warn!(choice, %error, "Falling back to the bundled default puzzle");
            let Some(mut puzzle) = BundledSource::new().default_puzzle().cloned() else {
                return Err(error);
            };
            puzzle.shuffle_board(indices);
            Ok(Selection {
                puzzle,
                fallback: Some(error),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::{DirectorySource, FallbackSource};
    use crate::rules::ScriptedIndices;

    #[test]
    fn select_daily_random_and_id() {
        let source = BundledSource::new();
        let mut indices = ScriptedIndices::new([2]);

        assert_eq!(
            select_puzzle(&source, "daily", &mut indices).unwrap().id(),
            "sample1"
        );
        assert_eq!(
            select_puzzle(&source, "Random", &mut indices).unwrap().id(),
            "sample3"
        );
        assert_eq!(
            select_puzzle(&source, "sample2", &mut indices).unwrap().id(),
            "sample2"
        );
    }

    #[test]
    fn selected_board_is_shuffled() {
        let source = BundledSource::new();
        let stored = source.load_puzzle(&PuzzleRequest::Daily).unwrap();
        let puzzle = select_puzzle(&source, "daily", &mut ScriptedIndices::new([0])).unwrap();

        assert_ne!(puzzle.words(), stored.words());
        assert_eq!(puzzle.categories(), stored.categories());
    }

    #[test]
    fn select_unknown_id() {
        let source = BundledSource::new();
        let mut indices = ScriptedIndices::new([0]);
        assert!(matches!(
            select_puzzle(&source, "zzz", &mut indices),
            Err(SourceError::PuzzleNotFound(_))
        ));
    }

    #[test]
    fn found_puzzle_has_no_notice() {
        let source = BundledSource::new();
        let mut indices = ScriptedIndices::new([0]);
        let selection = select_or_default(&source, "sample2", &mut indices).unwrap();

        assert_eq!(selection.puzzle.id(), "sample2");
        assert!(selection.fallback.is_none());
        assert_eq!(selection.notice("sample2"), None);
    }

    #[test]
    fn substituted_puzzle_is_reported() {
        let source = FallbackSource::new(DirectorySource::new("/nonexistent/puzzle/archive"));
        let mut indices = ScriptedIndices::new([0]);

        let selection = select_or_default(&source, "nope", &mut indices).unwrap();
        assert_eq!(selection.puzzle.id(), "sample1");
        assert_eq!(
            selection.fallback,
            Some(SourceError::PuzzleNotFound("nope".to_string()))
        );

        let daily = select_or_default(&source, "daily", &mut indices).unwrap();
        assert!(daily.fallback.is_none());
        let random = select_or_default(&source, "random", &mut indices).unwrap();
        assert!(random.fallback.is_none());
    }

    #[test]
    fn missing_puzzle_falls_back_with_reason() {
        let source = BundledSource::new();
        let mut indices = ScriptedIndices::new([0]);
        let selection = select_or_default(&source, "nope", &mut indices).unwrap();

        assert_eq!(selection.puzzle.id(), "sample1");
        assert_eq!(
            selection.fallback,
            Some(SourceError::PuzzleNotFound("nope".to_string()))
        );
        let notice = selection.notice("nope").unwrap();
        assert_eq!(
            notice,
            "Could not load puzzle 'nope': Puzzle 'nope' was not found. Playing sample1 instead."
        );
    }
}

//! Puzzle-solving session
//!
//! Holds the active puzzle, the player's grouping and the hint history. Front
//! ends own one session and pass it to every rules call; nothing is global.

use crate::core::{GroupColor, Grouping, Puzzle};
use crate::rules::{
    Hint, HintError, HintLevel, IndexSource, SubmissionResult, ValidationError, check_submission,
    generate_hint, validate_grouping,
};
use tracing::info;

/// Error type for grouping edits
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupingError {
    #[error("No game is currently loaded.")]
    NoActivePuzzle,

    #[error("'{0}' is not on the board.")]
    UnknownWord(String),
}

/// Error type for submissions through a session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("Game data is not available.")]
    NoActivePuzzle,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// State for one player working on one puzzle at a time
#[derive(Debug, Default)]
pub struct Session {
    puzzle: Option<Puzzle>,
    grouping: Grouping,
    hints: Vec<Hint>,
    submissions: usize,
    solved: bool,
}

impl Session {
    /// A session with no puzzle loaded
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_puzzle(puzzle: Puzzle) -> Self {
        let mut session = Self::new();
        session.load(puzzle);
        session
    }

    /// Start a new puzzle, discarding the previous board and hints
    pub fn load(&mut self, puzzle: Puzzle) {
        info!(puzzle = puzzle.id(), date = %puzzle.date(), "Loaded puzzle");
        self.puzzle = Some(puzzle);
        self.grouping.reset();
        self.hints.clear();
        self.submissions = 0;
        self.solved = false;
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    #[must_use]
    pub const fn grouping(&self) -> &Grouping {
        &self.grouping
    }

    #[must_use]
    pub fn hint_history(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub const fn submissions(&self) -> usize {
        self.submissions
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Color a board word
    ///
    /// Returns the color the word previously had, if any.
    ///
    /// # Errors
    /// Returns `GroupingError` if no puzzle is loaded or the word is not on the board.
    pub fn assign(
        &mut self,
        word: &str,
        color: GroupColor,
    ) -> Result<Option<GroupColor>, GroupingError> {
        let puzzle = self.puzzle.as_ref().ok_or(GroupingError::NoActivePuzzle)?;
        if !puzzle.contains_word(word) {
            return Err(GroupingError::UnknownWord(word.to_string()));
        }
        Ok(self.grouping.assign(word, color))
    }

    /// Match a typed word to its spelling on the board, ignoring ASCII case
    ///
    /// # Errors
    /// Returns `GroupingError` if no puzzle is loaded or no board word matches.
    pub fn resolve_word(&self, typed: &str) -> Result<String, GroupingError> {
        let puzzle = self.puzzle.as_ref().ok_or(GroupingError::NoActivePuzzle)?;
        puzzle
            .find_word(typed)
            .map(str::to_string)
            .ok_or_else(|| GroupingError::UnknownWord(typed.to_string()))
    }

    /// Remove a word's color, returning it
    pub fn clear(&mut self, word: &str) -> Option<GroupColor> {
        self.grouping.clear(word)
    }

    /// Uncolor every word
    pub fn reset_board(&mut self) {
        self.grouping.reset();
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        validate_grouping(&self.grouping)
    }

    /// Check the current board against the active puzzle
    ///
    /// # Errors
    /// Returns `CheckError::NoActivePuzzle` if nothing is loaded, or the
    /// validation error for partial or missing groups.
    pub fn submit(&mut self) -> Result<SubmissionResult, CheckError> {
        let puzzle = self.puzzle.as_ref().ok_or(CheckError::NoActivePuzzle)?;
        let result = check_submission(&self.grouping, puzzle)?;

        self.submissions += 1;
        if result.is_solved() {
            info!(
                puzzle = puzzle.id(),
                submissions = self.submissions,
                hints = self.hints.len(),
                "Puzzle solved"
            );
            self.solved = true;
        }
        Ok(result)
    }

    /// Generate a hint and record it in the history
    ///
    /// # Errors
    /// Returns `HintError::NoActivePuzzle` if nothing is loaded.
    pub fn hint(
        &mut self,
        level: HintLevel,
        source: &mut impl IndexSource,
    ) -> Result<&Hint, HintError> {
        let hint = generate_hint(self.puzzle.as_ref(), &self.grouping, level, source)?;
        self.hints.push(hint);
        Ok(&self.hints[self.hints.len() - 1])
    }
}

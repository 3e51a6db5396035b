//! On-disk puzzle archive
//!
//! Layout:
//!
//! ```text
//! <root>/index.json          [{"id": "...", "date": "YYYY-MM-DD"}, ...]
//! <root>/games/<id>.json     one puzzle per file
//! ```

use super::{PuzzleRequest, PuzzleSource, SourceError};
use crate::core::{Puzzle, PuzzleSummary};
use chrono::{Local, NaiveDate};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Puzzle source reading an archive directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    today: NaiveDate,
}

impl DirectorySource {
    /// Archive rooted at `root`, with today's local date for the daily puzzle
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_today(root, Local::now().date_naive())
    }

    /// Archive with a fixed "today"
    #[must_use]
    pub fn with_today(root: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            root: root.into(),
            today,
        }
    }

    fn index_path(&self) -> PathBuf {
        self.root.join("index.json")
    }

    fn game_path(&self, id: &str) -> PathBuf {
        self.root.join("games").join(format!("{id}.json"))
    }

    fn load_by_id(&self, id: &str) -> Result<Puzzle, SourceError> {
        if !is_safe_id(id) {
            return Err(SourceError::PuzzleNotFound(id.to_string()));
        }

        let path = self.game_path(id);
        let json = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SourceError::PuzzleNotFound(id.to_string()),
            _ => unavailable(&path, &e),
        })?;
        let puzzle = Puzzle::from_json(&json).map_err(|e| unavailable(&path, &e))?;

        debug!(id, path = %path.display(), "Read puzzle from archive");
        Ok(puzzle)
    }

    /// Entry dated today, else the most recent one
    fn daily_entry(&self, listing: &[PuzzleSummary]) -> Option<String> {
        listing
            .iter()
            .find(|entry| entry.date == self.today)
            .or_else(|| listing.iter().max_by_key(|entry| entry.date))
            .map(|entry| entry.id.clone())
    }
}

impl PuzzleSource for DirectorySource {
    fn load_puzzle(&self, request: &PuzzleRequest) -> Result<Puzzle, SourceError> {
        match request {
            PuzzleRequest::Daily => {
                let listing = self.list_puzzles()?;
                let id = self.daily_entry(&listing).ok_or_else(|| {
                    SourceError::SourceUnavailable("archive index is empty".to_string())
                })?;
                self.load_by_id(&id)
            }
            PuzzleRequest::Id(id) => self.load_by_id(id),
        }
    }

    fn list_puzzles(&self) -> Result<Vec<PuzzleSummary>, SourceError> {
        let path = self.index_path();
        let json = fs::read_to_string(&path).map_err(|e| unavailable(&path, &e))?;
        serde_json::from_str(&json).map_err(|e| unavailable(&path, &e))
    }
}

/// Identifiers become file names, so keep them to a plain character set
fn is_safe_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

fn unavailable(path: &Path, error: &dyn std::error::Error) -> SourceError {
    SourceError::SourceUnavailable(format!("{}: {error}", path.display()))
}

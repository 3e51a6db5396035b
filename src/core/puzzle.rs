//! Puzzle definitions
//!
//! A puzzle is four categories of four words each. Construction enforces the
//! shape invariants so the rules engine can rely on them without re-checking.

use super::GroupColor;
use crate::rules::IndexSource;
use crate::rules::random::shuffle;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of categories in every puzzle
pub const CATEGORY_COUNT: usize = 4;

/// Number of words in every category
pub const GROUP_SIZE: usize = 4;

/// Date format used by puzzle files and the archive index
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One of the true answer groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub color: GroupColor,
    pub words: Vec<String>,
}

impl Category {
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Words in lexicographic order, for set comparison
    #[must_use]
    pub fn sorted_words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

/// Error type for malformed puzzle data
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Puzzle must have exactly {CATEGORY_COUNT} categories, got {0}")]
    CategoryCount(usize),

    #[error("Category '{name}' must have exactly {GROUP_SIZE} words, got {count}")]
    CategorySize { name: String, count: usize },

    #[error("Color {0} is used by more than one category")]
    DuplicateColor(GroupColor),

    #[error("Word '{0}' appears more than once")]
    DuplicateWord(String),

    #[error("Board word list does not match the category words")]
    WordListMismatch,

    #[error("Invalid puzzle date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Malformed puzzle JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk layout of a puzzle file
#[derive(Deserialize)]
struct PuzzleFile {
    id: String,
    date: String,
    categories: Vec<Category>,
    #[serde(default)]
    words: Option<Vec<String>>,
}

impl TryFrom<PuzzleFile> for Puzzle {
    type Error = PuzzleError;

    fn try_from(file: PuzzleFile) -> Result<Self, Self::Error> {
        let date = parse_date(&file.date)?;
        Self::new(file.id, date, file.categories, file.words)
    }
}

/// A validated puzzle: 4 categories, 4 words each, 16 unique words, 4 distinct colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleFile")]
pub struct Puzzle {
    id: String,
    date: NaiveDate,
    categories: Vec<Category>,
    words: Vec<String>,
}

impl Puzzle {
    /// Create a new puzzle, checking its shape
    ///
    /// `words` is the board display order. When `None`, it is derived from the
    /// categories in category order.
    ///
    /// # Errors
    /// Returns `PuzzleError` if the category count or sizes are wrong, a color
    /// or word is repeated, or `words` is not exactly the category words.
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        categories: Vec<Category>,
        words: Option<Vec<String>>,
    ) -> Result<Self, PuzzleError> {
        if categories.len() != CATEGORY_COUNT {
            return Err(PuzzleError::CategoryCount(categories.len()));
        }

        let mut colors = HashSet::new();
        let mut all_words = HashSet::new();
        for category in &categories {
            if category.words.len() != GROUP_SIZE {
                return Err(PuzzleError::CategorySize {
                    name: category.name.clone(),
                    count: category.words.len(),
                });
            }
            if !colors.insert(category.color) {
                return Err(PuzzleError::DuplicateColor(category.color));
            }
            for word in &category.words {
                if !all_words.insert(word.as_str()) {
                    return Err(PuzzleError::DuplicateWord(word.clone()));
                }
            }
        }

        let words = match words {
            Some(words) => {
                let board: HashSet<&str> = words.iter().map(String::as_str).collect();
                if words.len() != board.len() || board != all_words {
                    return Err(PuzzleError::WordListMismatch);
                }
                words
            }
            None => categories
                .iter()
                .flat_map(|c| c.words.iter().cloned())
                .collect(),
        };

        Ok(Self {
            id: id.into(),
            date,
            categories,
            words,
        })
    }

    /// Parse a puzzle from its JSON representation
    ///
    /// # Errors
    /// Returns `PuzzleError::Json` for syntax errors and shape violations alike.
    pub fn from_json(json: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All board words in display order
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn category_for_color(&self, color: GroupColor) -> Option<&Category> {
        self.categories.iter().find(|c| c.color == color)
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Shuffle the board display order
    ///
    /// Categories are untouched, so the word set stays the same.
    pub fn shuffle_board(&mut self, indices: &mut impl IndexSource) {
        shuffle(indices, &mut self.words);
    }

    /// The board's spelling of a typed word, ignoring ASCII case
    ///
    /// An exact match wins over a case-insensitive one.
    #[must_use]
    pub fn find_word(&self, typed: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| *w == typed)
            .or_else(|| self.words.iter().find(|w| w.eq_ignore_ascii_case(typed)))
            .map(String::as_str)
    }

    #[must_use]
    pub fn summary(&self) -> PuzzleSummary {
        PuzzleSummary {
            id: self.id.clone(),
            date: self.date,
        }
    }
}

/// Index entry for a puzzle: identifier and date only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleSummary {
    pub id: String,
    pub date: NaiveDate,
}

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
/// Returns `PuzzleError::InvalidDate` if the string is not a valid date.
pub fn parse_date(text: &str) -> Result<NaiveDate, PuzzleError> {
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| PuzzleError::InvalidDate(text.to_string()))
}


#[cfg(test)]
mod tests {
    use super::fixtures::bread_puzzle;
    use super::*;
    use crate::rules::ScriptedIndices;

    const SAMPLE: &str = r#"{
        "id": "sample2",
        "date": "2023-01-02",
        "categories": [
            { "name": "Weather Phenomena", "color": "yellow", "words": ["HURRICANE", "BLIZZARD", "TORNADO", "THUNDERSTORM"] },
            { "name": "Musical Instruments", "color": "green", "words": ["PIANO", "VIOLIN", "TRUMPET", "DRUMS"] },
            { "name": "Mythical Creatures", "color": "blue", "words": ["DRAGON", "PHOENIX", "UNICORN", "GRIFFIN"] },
            { "name": "Board Games", "color": "purple", "words": ["MONOPOLY", "CHESS", "SCRABBLE", "CLUE"] }
        ]
    }"#;

    #[test]
    fn parse_sample_without_word_list() {
        let puzzle = Puzzle::from_json(SAMPLE).unwrap();
        assert_eq!(puzzle.id(), "sample2");
        assert_eq!(puzzle.date(), NaiveDate::from_ymd_opt(2023, 1, 2).unwrap());
        assert_eq!(puzzle.words().len(), 16);
        assert_eq!(puzzle.words()[0], "HURRICANE");
        assert!(puzzle.contains_word("CLUE"));
        assert!(!puzzle.contains_word("clue"));
    }

    #[test]
    fn find_word_returns_board_spelling() {
        let puzzle = super::fixtures::gadget_puzzle();
        assert_eq!(puzzle.find_word("iPhone"), Some("iPhone"));
        assert_eq!(puzzle.find_word("IPHONE"), Some("iPhone"));
        assert_eq!(puzzle.find_word("nile"), Some("Nile"));
        assert_eq!(puzzle.find_word("Pluto"), None);
        assert!(!puzzle.contains_word("IPHONE"));
    }

    #[test]
    fn shuffled_board_keeps_its_words() {
        let mut puzzle = bread_puzzle();
        let original = puzzle.words().to_vec();
        puzzle.shuffle_board(&mut ScriptedIndices::new([0]));

        assert_ne!(puzzle.words(), original.as_slice());
        assert_eq!(puzzle.words()[15], "SOURDOUGH");
        let mut shuffled = puzzle.words().to_vec();
        let mut expected = original;
        shuffled.sort();
        expected.sort();
        assert_eq!(shuffled, expected);
        assert_eq!(puzzle.categories(), bread_puzzle().categories());
    }

    #[test]
    fn category_lookup_by_color() {
        let puzzle = bread_puzzle();
        let blue = puzzle.category_for_color(GroupColor::Blue).unwrap();
        assert_eq!(blue.name, "Celestial Bodies");
        assert_eq!(blue.sorted_words(), vec!["ASTEROID", "COMET", "MOON", "PLANET"]);
    }

    #[test]
    fn reject_wrong_category_count() {
        let mut categories = bread_puzzle().categories().to_vec();
        categories.pop();
        let result = Puzzle::new("x", bread_puzzle().date(), categories, None);
        assert!(matches!(result, Err(PuzzleError::CategoryCount(3))));
    }

    #[test]
    fn reject_short_category() {
        let mut categories = bread_puzzle().categories().to_vec();
        categories[2].words.pop();
        let result = Puzzle::new("x", bread_puzzle().date(), categories, None);
        assert!(matches!(
            result,
            Err(PuzzleError::CategorySize { count: 3, .. })
        ));
    }

    #[test]
    fn reject_duplicate_color() {
        let mut categories = bread_puzzle().categories().to_vec();
        categories[3].color = GroupColor::Yellow;
        let result = Puzzle::new("x", bread_puzzle().date(), categories, None);
        assert!(matches!(
            result,
            Err(PuzzleError::DuplicateColor(GroupColor::Yellow))
        ));
    }

    #[test]
    fn reject_duplicate_word() {
        let mut categories = bread_puzzle().categories().to_vec();
        categories[1].words[0] = "MOON".to_string();
        let result = Puzzle::new("x", bread_puzzle().date(), categories, None);
        assert!(matches!(result, Err(PuzzleError::DuplicateWord(w)) if w == "MOON"));
    }

    #[test]
    fn reject_mismatched_board_words() {
        let puzzle = bread_puzzle();
        let mut words = puzzle.words().to_vec();
        words[0] = "RYE".to_string();
        let result = Puzzle::new("x", puzzle.date(), puzzle.categories().to_vec(), Some(words));
        assert!(matches!(result, Err(PuzzleError::WordListMismatch)));
    }

    #[test]
    fn reject_bad_date() {
        let json = SAMPLE.replace("2023-01-02", "01/02/2023");
        assert!(matches!(Puzzle::from_json(&json), Err(PuzzleError::Json(_))));
        assert!(matches!(
            parse_date("2023-13-01"),
            Err(PuzzleError::InvalidDate(_))
        ));
    }

    #[test]
    fn serialized_puzzle_parses_back() {
        let puzzle = bread_puzzle();
        let json = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(Puzzle::from_json(&json).unwrap(), puzzle);
    }
}

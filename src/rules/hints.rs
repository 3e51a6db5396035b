//! Hint generation
//!
//! Canned hints at three levels of specificity, derived from the puzzle's
//! categories and how the player's current groups differ from them. Picks
//! among equally valid candidates come from an [`IndexSource`], so the same
//! board can yield different hints on each request.

use super::random::{IndexSource, pick};
use crate::core::{Category, GroupColor, Grouping, Puzzle};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Above this many uncolored words, hints stay broad
pub const MOSTLY_UNASSIGNED: usize = 8;

/// How much a hint reveals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintLevel {
    /// General guidance about possible connections
    Beginner,
    /// Specific clues about one category
    Intermediate,
    /// Minimal nudges to preserve the challenge
    Expert,
}

impl HintLevel {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Expert => "expert",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Beginner => "General guidance about possible connections",
            Self::Intermediate => "Specific clues about one category",
            Self::Expert => "Minimal nudges to preserve the challenge",
        }
    }
}

impl fmt::Display for HintLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown hint level
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown hint level '{0}' (expected beginner, intermediate or expert)")]
pub struct UnknownHintLevel(pub String);

impl FromStr for HintLevel {
    type Err = UnknownHintLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" | "1" => Ok(Self::Beginner),
            "intermediate" | "2" => Ok(Self::Intermediate),
            "expert" | "3" => Ok(Self::Expert),
            _ => Err(UnknownHintLevel(s.to_string())),
        }
    }
}

/// A generated hint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub level: HintLevel,
    pub text: String,
}

/// Error type for hint requests
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HintError {
    #[error("No game is currently loaded. Please load a game first.")]
    NoActivePuzzle,
}

/// A color group holding words that do not belong to the category of that color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisplacedGroup {
    pub color: GroupColor,
    pub category_name: String,
    /// Words of this color that belong to the category
    pub placed_words: Vec<String>,
    /// Words of this color that do not belong to the category
    pub incorrect_words: Vec<String>,
    /// Category words not yet given this color
    pub missing_words: Vec<String>,
}

/// Summary of where the board differs from the solution
///
/// Each color is compared against the category declared with that color, so
/// this is stricter than submission checking: a correct set of words under
/// the "wrong" color still counts as misplaced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardDiagnosis {
    pub misplaced_groups: Vec<MisplacedGroup>,
    pub unassigned_words: Vec<String>,
}

impl BoardDiagnosis {
    /// Compare each non-empty color group with its declared category
    #[must_use]
    pub fn new(puzzle: &Puzzle, grouping: &Grouping) -> Self {
        let misplaced_groups = grouping
            .iter()
            .filter_map(|(color, words)| {
                let category = puzzle.category_for_color(color)?;
                let (placed_words, incorrect_words): (Vec<String>, Vec<String>) =
                    words.iter().cloned().partition(|w| category.contains(w));

                if incorrect_words.is_empty() {
                    return None;
                }

                let missing_words = category
                    .words
                    .iter()
                    .filter(|w| !words.contains(w.as_str()))
                    .cloned()
                    .collect();

                Some(MisplacedGroup {
                    color,
                    category_name: category.name.clone(),
                    placed_words,
                    incorrect_words,
                    missing_words,
                })
            })
            .collect();

        let unassigned_words = grouping
            .unassigned(puzzle)
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            misplaced_groups,
            unassigned_words,
        }
    }

    fn mostly_unassigned(&self) -> bool {
        self.unassigned_words.len() > MOSTLY_UNASSIGNED
    }
}

/// Generate a hint for the current board
///
/// # Errors
/// Returns `HintError::NoActivePuzzle` if `puzzle` is `None`.
///
/// # Examples
/// ```
/// use connections_plus::core::Grouping;
/// use connections_plus::puzzles::{BundledSource, PuzzleRequest, PuzzleSource};
/// use connections_plus::rules::{HintError, HintLevel, ScriptedIndices, generate_hint};
///
/// let puzzle = BundledSource::new().load_puzzle(&PuzzleRequest::Daily).unwrap();
/// let mut indices = ScriptedIndices::new([0]);
///
/// let hint = generate_hint(Some(&puzzle), &Grouping::new(), HintLevel::Beginner, &mut indices)
///     .unwrap();
/// assert!(hint.text.contains("types of bread"));
///
/// let missing = generate_hint(None, &Grouping::new(), HintLevel::Expert, &mut indices);
/// assert_eq!(missing, Err(HintError::NoActivePuzzle));
/// ```
pub fn generate_hint(
    puzzle: Option<&Puzzle>,
    grouping: &Grouping,
    level: HintLevel,
    source: &mut impl IndexSource,
) -> Result<Hint, HintError> {
    let puzzle = puzzle.ok_or(HintError::NoActivePuzzle)?;
    let diagnosis = BoardDiagnosis::new(puzzle, grouping);
    let categories = puzzle.categories();

    let text = match level {
        HintLevel::Beginner => beginner_hint(categories, &diagnosis, source),
        HintLevel::Intermediate => intermediate_hint(categories, &diagnosis, source),
        HintLevel::Expert => expert_hint(categories, &diagnosis, source),
    };

    debug!(
        puzzle = puzzle.id(),
        %level,
        misplaced = diagnosis.misplaced_groups.len(),
        unassigned = diagnosis.unassigned_words.len(),
        "Generated hint"
    );

    Ok(Hint { level, text })
}

fn beginner_hint(
    categories: &[Category],
    diagnosis: &BoardDiagnosis,
    source: &mut impl IndexSource,
) -> String {
    if diagnosis.mostly_unassigned()
        && let Some(category) = pick(source, categories)
    {
        return format!(
            "Look for words related to {}. There are 4 words in this category.",
            category.name.to_lowercase()
        );
    }

    if let Some(group) = pick(source, &diagnosis.misplaced_groups) {
        return format!(
            "The {} group should contain words related to {}. Not all words in this group are correct.",
            group.color,
            group.category_name.to_lowercase()
        );
    }

    let themes: Vec<String> = categories.iter().map(|c| c.name.to_lowercase()).collect();
    format!(
        "Try to identify common themes among the words. Look for {}.",
        themes.join(", ")
    )
}

fn intermediate_hint(
    categories: &[Category],
    diagnosis: &BoardDiagnosis,
    source: &mut impl IndexSource,
) -> String {
    if let Some(group) = pick(source, &diagnosis.misplaced_groups) {
        if let Some(anchor) = pick(source, &group.placed_words) {
            return format!(
                "The {} group should be \"{}\". \"{anchor}\" is correctly placed in this group, but some other words don't belong.",
                group.color, group.category_name
            );
        }
        // Nothing placed correctly yet: anchor on a word still missing from the group
        if let Some(anchor) = pick(source, &group.missing_words) {
            return format!(
                "The {} group should be \"{}\". None of its words are correct yet; \"{anchor}\" belongs there.",
                group.color, group.category_name
            );
        }
    }

    if diagnosis.mostly_unassigned()
        && let Some(category) = pick(source, categories)
        && let Some(first) = pick(source, &category.words)
    {
        let others: Vec<&String> = category.words.iter().filter(|w| *w != first).collect();
        if let Some(second) = pick(source, &others) {
            return format!(
                "\"{first}\" and \"{second}\" belong in the same group. They are related to {}.",
                category.name.to_lowercase()
            );
        }
    }

    match pick(source, categories) {
        Some(category) => format!(
            "One category is \"{}\". Look for 4 words that fit this theme.",
            category.name
        ),
        None => STRATEGY_NUDGE.to_string(),
    }
}

const STRATEGY_NUDGE: &str =
    "Look for patterns and connections. Sometimes the most obvious grouping isn't the correct one.";

fn expert_hint(
    categories: &[Category],
    diagnosis: &BoardDiagnosis,
    source: &mut impl IndexSource,
) -> String {
    if let Some(group) = pick(source, &diagnosis.misplaced_groups)
        && let Some(word) = pick(source, &group.incorrect_words)
    {
        return format!(
            "\"{word}\" doesn't seem to fit with the other words in the {} group.",
            group.color
        );
    }

    if diagnosis.mostly_unassigned()
        && let Some(category) = pick(source, categories)
        && let Some(word) = pick(source, &category.words)
    {
        return format!("Consider what category \"{word}\" might belong to.");
    }

    STRATEGY_NUDGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::bread_puzzle;
    use crate::rules::{RandomIndices, ScriptedIndices};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hint(grouping: &Grouping, level: HintLevel, script: &[usize]) -> String {
        let puzzle = bread_puzzle();
        let mut indices = ScriptedIndices::new(script.iter().copied());
        generate_hint(Some(&puzzle), grouping, level, &mut indices)
            .unwrap()
            .text
    }

    /// Yellow holds three breads and a book part; green is half done
    fn mistaken_board() -> Grouping {
        Grouping::new()
            .with_group(
                GroupColor::Yellow,
                ["SOURDOUGH", "BAGUETTE", "CIABATTA", "INDEX"],
            )
            .with_group(GroupColor::Green, ["CHAPTER", "PREFACE", "APPENDIX", "FOCACCIA"])
    }

    /// Eight words placed correctly, nothing misplaced
    fn tidy_board() -> Grouping {
        Grouping::new()
            .with_group(
                GroupColor::Yellow,
                ["SOURDOUGH", "BAGUETTE", "CIABATTA", "FOCACCIA"],
            )
            .with_group(GroupColor::Green, ["CHAPTER", "PREFACE", "APPENDIX", "INDEX"])
    }

    fn quoted(text: &str) -> Vec<&str> {
        text.split('"').skip(1).step_by(2).collect()
    }

    #[test]
    fn no_puzzle_is_an_error_at_every_level() {
        let mut indices = RandomIndices::thread();
        for level in HintLevel::ALL {
            assert_eq!(
                generate_hint(None, &Grouping::new(), level, &mut indices),
                Err(HintError::NoActivePuzzle)
            );
        }
    }

    #[test]
    fn diagnosis_of_mistaken_board() {
        let diagnosis = BoardDiagnosis::new(&bread_puzzle(), &mistaken_board());
        assert_eq!(diagnosis.unassigned_words.len(), 8);
        assert_eq!(diagnosis.misplaced_groups.len(), 2);

        let yellow = &diagnosis.misplaced_groups[0];
        assert_eq!(yellow.color, GroupColor::Yellow);
        assert_eq!(yellow.category_name, "Types of Bread");
        assert_eq!(yellow.incorrect_words, vec!["INDEX"]);
        assert_eq!(yellow.missing_words, vec!["FOCACCIA"]);
        assert_eq!(
            yellow.placed_words,
            vec!["BAGUETTE", "CIABATTA", "SOURDOUGH"]
        );
    }

    #[test]
    fn diagnosis_ignores_correct_groups() {
        let diagnosis = BoardDiagnosis::new(&bread_puzzle(), &tidy_board());
        assert!(diagnosis.misplaced_groups.is_empty());
    }

    #[test]
    fn beginner_on_empty_board_names_a_category() {
        let text = hint(&Grouping::new(), HintLevel::Beginner, &[2]);
        assert_eq!(
            text,
            "Look for words related to celestial bodies. There are 4 words in this category."
        );
    }

    #[test]
    fn beginner_points_at_misplaced_group() {
        let text = hint(&mistaken_board(), HintLevel::Beginner, &[1]);
        assert_eq!(
            text,
            "The green group should contain words related to parts of a book. Not all words in this group are correct."
        );
    }

    #[test]
    fn beginner_lists_themes_when_nothing_is_wrong() {
        let text = hint(&tidy_board(), HintLevel::Beginner, &[0]);
        assert_eq!(
            text,
            "Try to identify common themes among the words. Look for types of bread, parts of a book, celestial bodies, card games."
        );
    }

    #[test]
    fn intermediate_reveals_a_correctly_placed_word() {
        let text = hint(&mistaken_board(), HintLevel::Intermediate, &[0, 2]);
        assert_eq!(
            text,
            "The yellow group should be \"Types of Bread\". \"SOURDOUGH\" is correctly placed in this group, but some other words don't belong."
        );
    }

    #[test]
    fn intermediate_without_correct_words_reveals_missing_word() {
        let grouping = Grouping::new().with_group(GroupColor::Purple, ["MOON"]);
        let text = hint(&grouping, HintLevel::Intermediate, &[0, 1]);
        assert_eq!(
            text,
            "The purple group should be \"Card Games\". None of its words are correct yet; \"BRIDGE\" belongs there."
        );
    }

    #[test]
    fn intermediate_on_empty_board_pairs_two_distinct_words() {
        // Category 3, then index 0 of four, then index 0 of the remaining three
        let text = hint(&Grouping::new(), HintLevel::Intermediate, &[3, 0, 0]);
        assert_eq!(
            text,
            "\"POKER\" and \"BRIDGE\" belong in the same group. They are related to card games."
        );

        // Same index twice must still give two different words
        for script in [[0, 1, 1], [1, 3, 2], [2, 2, 2]] {
            let text = hint(&Grouping::new(), HintLevel::Intermediate, &script);
            let words = quoted(&text);
            assert_eq!(words.len(), 2);
            assert_ne!(words[0], words[1]);
        }
    }

    #[test]
    fn intermediate_names_a_category_otherwise() {
        let text = hint(&tidy_board(), HintLevel::Intermediate, &[1]);
        assert_eq!(
            text,
            "One category is \"Parts of a Book\". Look for 4 words that fit this theme."
        );
    }

    #[test]
    fn expert_reveals_only_the_misplaced_word() {
        let text = hint(&mistaken_board(), HintLevel::Expert, &[1, 0]);
        assert_eq!(
            text,
            "\"FOCACCIA\" doesn't seem to fit with the other words in the green group."
        );
    }

    #[test]
    fn expert_on_empty_board_names_one_word() {
        let text = hint(&Grouping::new(), HintLevel::Expert, &[1, 2]);
        assert_eq!(text, "Consider what category \"PREFACE\" might belong to.");
    }

    #[test]
    fn expert_falls_back_to_strategy_nudge() {
        let text = hint(&tidy_board(), HintLevel::Expert, &[0]);
        assert_eq!(text, STRATEGY_NUDGE);
    }

    #[test]
    fn fixed_script_is_reproducible() {
        for level in HintLevel::ALL {
            for board in [Grouping::new(), mistaken_board(), tidy_board()] {
                let a = hint(&board, level, &[3, 1, 4, 1, 5]);
                let b = hint(&board, level, &[3, 1, 4, 1, 5]);
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn hints_only_mention_puzzle_content() {
        let puzzle = bread_puzzle();
        let mut indices = RandomIndices::new(StdRng::seed_from_u64(7));

        for _ in 0..50 {
            for level in HintLevel::ALL {
                for board in [Grouping::new(), mistaken_board(), tidy_board()] {
                    let hint = generate_hint(Some(&puzzle), &board, level, &mut indices).unwrap();
                    for mention in quoted(&hint.text) {
                        assert!(
                            puzzle.contains_word(mention)
                                || puzzle.categories().iter().any(|c| c.name == mention),
                            "'{mention}' is not part of the puzzle: {}",
                            hint.text
                        );
                    }
                }
            }
        }
    }

    /// Ignores the requested bound entirely
    struct OutOfRange;

    impl IndexSource for OutOfRange {
        fn next_index(&mut self, len: usize) -> usize {
            len + 5
        }
    }

    #[test]
    fn out_of_range_indices_never_panic() {
        let puzzle = bread_puzzle();
        for level in HintLevel::ALL {
            for board in [Grouping::new(), mistaken_board(), tidy_board()] {
                let hint = generate_hint(Some(&puzzle), &board, level, &mut OutOfRange).unwrap();
                assert!(!hint.text.is_empty());
            }
        }
        let text = generate_hint(
            Some(&puzzle),
            &Grouping::new(),
            HintLevel::Intermediate,
            &mut OutOfRange,
        )
        .unwrap()
        .text;
        assert_eq!(text, STRATEGY_NUDGE);
    }

    #[test]
    fn level_parsing() {
        assert_eq!("Expert".parse::<HintLevel>(), Ok(HintLevel::Expert));
        assert_eq!("2".parse::<HintLevel>(), Ok(HintLevel::Intermediate));
        assert!("wizard".parse::<HintLevel>().is_err());
    }
}

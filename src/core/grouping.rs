//! Player grouping state
//!
//! Tracks which words the player has colored with which group color. The
//! grouping knows nothing about the puzzle; unassigned words are derived on
//! demand from the puzzle's board.

use super::{GROUP_SIZE, GroupColor, Puzzle};
use std::collections::BTreeSet;

/// The player's current color-to-words assignment
///
/// A word is in at most one color's set: assigning a word moves it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    groups: [BTreeSet<String>; 4],
}

impl Grouping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Grouping::assign`] for a whole group
    ///
    /// # Examples
    /// ```
    /// use connections_plus::core::{GroupColor, Grouping};
    ///
    /// let grouping = Grouping::new().with_group(GroupColor::Blue, ["MOON", "COMET"]);
    /// assert_eq!(grouping.count(GroupColor::Blue), 2);
    /// assert_eq!(grouping.color_of("MOON"), Some(GroupColor::Blue));
    /// ```
    #[must_use]
    pub fn with_group<I, S>(mut self, color: GroupColor, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.assign(word, color);
        }
        self
    }

    /// Color a word, moving it out of any other color
    ///
    /// Returns the color the word previously had, if any.
    pub fn assign(&mut self, word: impl Into<String>, color: GroupColor) -> Option<GroupColor> {
        let word = word.into();
        let previous = self.clear(&word);
        self.groups[color.index()].insert(word);
        previous
    }

    /// Remove a word's color
    ///
    /// Returns the color the word had, if any.
    pub fn clear(&mut self, word: &str) -> Option<GroupColor> {
        GroupColor::ALL
            .into_iter()
            .find(|color| self.groups[color.index()].remove(word))
    }

    /// Uncolor every word of one color
    pub fn clear_color(&mut self, color: GroupColor) {
        self.groups[color.index()].clear();
    }

    /// Uncolor everything
    pub fn reset(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    #[must_use]
    pub fn words(&self, color: GroupColor) -> &BTreeSet<String> {
        &self.groups[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn count(&self, color: GroupColor) -> usize {
        self.groups[color.index()].len()
    }

    #[must_use]
    pub fn color_of(&self, word: &str) -> Option<GroupColor> {
        GroupColor::ALL
            .into_iter()
            .find(|color| self.groups[color.index()].contains(word))
    }

    /// Number of words that have any color
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.groups.iter().map(BTreeSet::len).sum()
    }

    /// Colors holding exactly a full group of words
    pub fn complete_colors(&self) -> impl Iterator<Item = GroupColor> + '_ {
        GroupColor::ALL
            .into_iter()
            .filter(|&color| self.count(color) == GROUP_SIZE)
    }

    /// Non-empty color groups in color order
    pub fn iter(&self) -> impl Iterator<Item = (GroupColor, &BTreeSet<String>)> {
        GroupColor::ALL
            .into_iter()
            .map(|color| (color, &self.groups[color.index()]))
            .filter(|(_, words)| !words.is_empty())
    }

    /// Board words without a color, in board order
    #[must_use]
    pub fn unassigned<'p>(&self, puzzle: &'p Puzzle) -> Vec<&'p str> {
        puzzle
            .words()
            .iter()
            .map(String::as_str)
            .filter(|word| self.color_of(word).is_none())
            .collect()
    }
}

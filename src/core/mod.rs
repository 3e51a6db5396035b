//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with no I/O.
//! Puzzles are validated at construction, groupings are plain state.

mod color;
mod grouping;
mod puzzle;

pub use color::{GroupColor, UnknownColor};
pub use grouping::Grouping;
pub use puzzle::{
    CATEGORY_COUNT, Category, DATE_FORMAT, GROUP_SIZE, Puzzle, PuzzleError, PuzzleSummary,
    parse_date,
};

#[cfg(test)]
pub(crate) use puzzle::fixtures;

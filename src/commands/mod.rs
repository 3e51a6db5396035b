//! Command implementations

pub mod browse;
pub mod check;
pub mod select;
pub mod simple;

pub use browse::{browse_puzzles, filter_listing, matches_search};
pub use check::{CommandError, apply_groups, run_check, run_hint, split_words};
pub use select::{Selection, select_or_default, select_puzzle};
pub use simple::run_simple;

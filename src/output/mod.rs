//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_error, print_hint, print_puzzle_list, print_submission_result,
};

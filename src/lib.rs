//! Connections Plus
//!
//! Rules engine for a word-grouping puzzle: sort sixteen words into four
//! hidden categories of four, marked yellow, green, blue and purple.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use connections_plus::core::GroupColor;
//! use connections_plus::puzzles::{BundledSource, PuzzleRequest, PuzzleSource};
//! use connections_plus::rules::{HintLevel, RandomIndices};
//! use connections_plus::session::Session;
//!
//! let source = BundledSource::new();
//! let puzzle = source.load_puzzle(&PuzzleRequest::Daily).unwrap();
//! let mut session = Session::with_puzzle(puzzle);
//!
//! for word in ["SOURDOUGH", "BAGUETTE", "CIABATTA", "FOCACCIA"] {
//!     session.assign(word, GroupColor::Yellow).unwrap();
//! }
//! let result = session.submit().unwrap();
//! println!("{} group(s) correct", result.correct_groups.len());
//!
//! let hint = session.hint(HintLevel::Beginner, &mut RandomIndices::thread()).unwrap();
//! println!("{}", hint.text);
//! ```

// Core domain types
pub mod core;

// Submission checking and hints
pub mod rules;

// Game state for one player
pub mod session;

// Puzzle sources
pub mod puzzles;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;

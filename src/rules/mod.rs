//! Game rules engine
//!
//! Grouping validation, submission checking and hint generation. Everything
//! here is pure and synchronous: no I/O, no global state.

pub mod checker;
pub mod hints;
pub mod random;
pub mod validator;

pub use checker::{
    CorrectGroup, IncorrectGroup, SubmissionOutcome, SubmissionResult, ValidationError,
    check_submission,
};
pub use hints::{BoardDiagnosis, Hint, HintError, HintLevel, MisplacedGroup, generate_hint};
pub use random::{IndexSource, RandomIndices, ScriptedIndices, shuffle};
pub use validator::validate_grouping;

//! Models module for the attendance backend
//!
//! Contains all data models and their validation logic.

pub mod roster;
pub mod selection;
pub mod student;
pub mod submission;

// Re-export commonly used types
pub use roster::{Roster, RosterError, BUILTIN_NAMES, FALLBACK_NAMES};
pub use selection::{SelectionMode, SelectionState};
pub use student::{Student, StudentError};
pub use submission::{Submission, SubmissionError, TIMESTAMP_FORMAT, TIMESTAMP_PATTERN};

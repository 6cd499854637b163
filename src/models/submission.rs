//! Submission Model
//!
//! The immutable record of a single check-in. A submission is only ever
//! constructed after validation has passed, so `success` is true from
//! construction on. The formatted timestamp is a compatibility contract
//! with the persistence collaborator: fixed-width `YYYY-MM-DD HH:MM:SS`,
//! 24-hour, zero-padded, no locale variation.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Expected shape of the formatted submission timestamp
pub const TIMESTAMP_PATTERN: &str = r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}$";

/// chrono format string producing [`TIMESTAMP_PATTERN`]
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn timestamp_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"))
}

/// Record of a single attendance check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// Generated submission identifier
    pub id: Uuid,

    /// Roster ID of the student, when the roster entry carries one
    pub student_id: Option<i32>,

    /// Canonical display name resolved during validation
    pub student_name: String,

    /// Instant of submission
    pub submitted_at: DateTime<Utc>,

    /// Display timestamp, `YYYY-MM-DD HH:MM:SS` in the configured timezone
    pub timestamp: String,

    /// Set by validation logic; always true for a constructed record
    pub success: bool,
}

impl Submission {
    /// Validate the record invariants
    pub fn validate(&self) -> Result<(), SubmissionError> {
        if self.student_name.trim().is_empty() {
            return Err(SubmissionError::EmptyStudentName);
        }
        if !timestamp_regex().is_match(&self.timestamp) {
            return Err(SubmissionError::MalformedTimestamp(self.timestamp.clone()));
        }
        Ok(())
    }
}

/// Submission validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission has an empty student name")]
    EmptyStudentName,

    #[error("Submission timestamp {0:?} does not match YYYY-MM-DD HH:MM:SS")]
    MalformedTimestamp(String),
}

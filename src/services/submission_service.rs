//! Submission Factory and Sink
//!
//! Builds the immutable submission record once validation has passed,
//! and hands it to the persistence collaborator. The factory performs no
//! I/O; the sink boundary is fire-and-forget from the workflow's point
//! of view, so record construction is where this core's responsibility
//! ends.

use crate::models::student::Student;
use crate::models::submission::{Submission, TIMESTAMP_FORMAT};
use crate::services::time_provider::{SystemTimeProvider, TimeProvider};
use chrono::Utc;
use chrono_tz::Tz;
use std::sync::{Arc, Mutex};
use tracing::info;
use uuid::Uuid;

/// Builds submission records from a validated name and an injected clock
#[derive(Clone)]
pub struct SubmissionFactory {
    clock: Arc<dyn TimeProvider>,
    timezone: Tz,
}

impl SubmissionFactory {
    /// Create a factory with an injected clock
    pub fn new(clock: Arc<dyn TimeProvider>, timezone: Tz) -> Self {
        Self { clock, timezone }
    }

    /// Create a factory backed by the system clock
    pub fn system(timezone: Tz) -> Self {
        Self::new(Arc::new(SystemTimeProvider::new()), timezone)
    }

    /// Build a submission for a validated name
    ///
    /// Only called after validation succeeds, so the record is marked
    /// successful at construction.
    pub fn build(&self, student: Option<&Student>, name: &str) -> Submission {
        // One clock read; both timestamp fields come from it
        let local = self.clock.now_in_timezone(self.timezone);
        let submitted_at = local.with_timezone(&Utc);

        Submission {
            id: Uuid::new_v4(),
            student_id: student.and_then(|s| s.id),
            student_name: name.to_string(),
            submitted_at,
            timestamp: local.format(TIMESTAMP_FORMAT).to_string(),
            success: true,
        }
    }
}

impl std::fmt::Debug for SubmissionFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionFactory")
            .field("timezone", &self.timezone)
            .finish()
    }
}

/// Collaborator boundary for persisting completed submissions
///
/// Accepting a record is fire-and-forget; the workflow does not wait on
/// confirmation.
pub trait SubmissionSink: Send + Sync {
    /// Accept a completed submission record
    fn accept(&self, submission: Submission);
}

/// In-memory sink: logs each record and retains it for the session
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Submission>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Records accepted so far, in arrival order
    pub fn records(&self) -> Vec<Submission> {
        self.records.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl SubmissionSink for MemorySink {
    fn accept(&self, submission: Submission) {
        info!(
            submission_id = %submission.id,
            student = %submission.student_name,
            timestamp = %submission.timestamp,
            "Attendance submission recorded"
        );
        if let Ok(mut records) = self.records.lock() {
            records.push(submission);
        }
    }
}

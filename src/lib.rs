//! Attendance tracking backend
//!
//! Core of the attendance check-in workflow: a student picks their name
//! from the session roster (dropdown or radio list, mutually exclusive)
//! and records a timestamped submission. The roster document is loaded
//! once at startup, submissions are built only after validation passes,
//! and a thin REST surface exposes the workflow to clients.

pub mod api;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::{Config, ConfigError, WorkflowProfile};
pub use error::AppError;
pub use models::{Roster, SelectionMode, SelectionState, Student, Submission};
pub use services::{
    AttendanceWorkflow, MemorySink, NameValidator, RosterService, RosterSource,
    SelectionController, SubmissionFactory, SubmissionSink, ValidationError, ViewState,
    WorkflowError,
};

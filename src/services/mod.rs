//! Services module for the attendance backend
//!
//! Contains all business logic and service implementations.

pub mod roster_service;
pub mod selection_service;
pub mod submission_service;
pub mod time_provider;
pub mod validator;
pub mod workflow_service;

// Re-export commonly used services
pub use roster_service::{RosterLoadError, RosterLoadOutcome, RosterService, RosterSource};
pub use selection_service::SelectionController;
pub use submission_service::{MemorySink, SubmissionFactory, SubmissionSink};
pub use time_provider::{MockTimeProvider, SystemTimeProvider, TimeProvider};
pub use validator::{NameValidator, ValidationError};
pub use workflow_service::{AttendanceWorkflow, ViewState, WorkflowError};

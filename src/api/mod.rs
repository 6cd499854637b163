//! API module for the attendance backend
//!
//! Contains all REST API endpoints and routing.

pub mod attendance;

// Re-export commonly used API components
pub use attendance::{create_attendance_routes, RosterResponse, SubmissionRequest};

//! Attendance API Endpoints
//!
//! Thin REST surface over the check-in workflow: the roster for the
//! selection lists, the current view state, submission, and reset.
//! Persistence and styling live elsewhere; this surface ends at the
//! workflow boundary.

use crate::error::AppError;
use crate::models::submission::Submission;
use crate::services::workflow_service::{AttendanceWorkflow, ViewState};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Create attendance API routes
pub fn create_attendance_routes() -> Router<Arc<AttendanceWorkflow>> {
    Router::new()
        .route("/roster", get(get_roster))
        .route("/state", get(get_state))
        .route("/submissions", post(submit_attendance))
        .route("/reset", post(reset_workflow))
        .route("/health", get(health_check))
}

/// Roster payload: ordered display names plus the load advisory, if any
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterResponse {
    pub names: Vec<String>,
    pub advisory: Option<String>,
}

/// Submission request: the form inputs as the client last held them
///
/// Dropdown and radio are applied through the selection controller, so
/// whichever arrives non-empty last holds the effective choice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionRequest {
    #[serde(default)]
    pub typed_name: Option<String>,

    #[serde(default)]
    pub dropdown: Option<String>,

    #[serde(default)]
    pub radio: Option<String>,
}

/// Get the roster display names
pub async fn get_roster(
    State(workflow): State<Arc<AttendanceWorkflow>>,
) -> Result<Json<RosterResponse>, AppError> {
    let roster = workflow.roster().await;
    Ok(Json(RosterResponse {
        names: roster.display_names(),
        advisory: workflow.advisory().await,
    }))
}

/// Get the current view state
pub async fn get_state(
    State(workflow): State<Arc<AttendanceWorkflow>>,
) -> Result<Json<ViewState>, AppError> {
    Ok(Json(workflow.view().await))
}

/// Record a check-in submission
pub async fn submit_attendance(
    State(workflow): State<Arc<AttendanceWorkflow>>,
    Json(request): Json<SubmissionRequest>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    if let Some(typed_name) = &request.typed_name {
        workflow.set_typed_name(typed_name).await?;
    }
    if let Some(dropdown) = &request.dropdown {
        workflow.set_dropdown(dropdown).await?;
    }
    if let Some(radio) = &request.radio {
        workflow.set_radio(radio).await?;
    }

    let submission = workflow.submit().await?;
    Ok((StatusCode::CREATED, Json(submission)))
}

/// Reset the workflow to the empty form
pub async fn reset_workflow(
    State(workflow): State<Arc<AttendanceWorkflow>>,
) -> Result<Json<ViewState>, AppError> {
    workflow.reset().await;
    Ok(Json(workflow.view().await))
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkflowProfile;
    use crate::models::roster::Roster;
    use crate::services::roster_service::RosterLoadOutcome;
    use crate::services::submission_service::{MemorySink, SubmissionFactory};
    use crate::services::time_provider::MockTimeProvider;
    use axum_test::TestServer;
    use chrono::{TimeZone, Utc};

    async fn test_server(profile: WorkflowProfile) -> TestServer {
        let start = Utc.with_ymd_and_hms(2025, 1, 7, 10, 30, 0).unwrap();
        let factory =
            SubmissionFactory::new(Arc::new(MockTimeProvider::new(start)), chrono_tz::UTC);
        let workflow = Arc::new(AttendanceWorkflow::new(
            profile,
            factory,
            Arc::new(MemorySink::new()),
        ));
        workflow
            .install_roster(RosterLoadOutcome {
                roster: Roster::builtin(),
                error: None,
            })
            .await;

        let app = create_attendance_routes().with_state(workflow);
        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;
        let response = server.get("/health").await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.text(), "OK");
    }

    #[tokio::test]
    async fn test_roster_endpoint() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;
        let response = server.get("/roster").await;
        assert_eq!(response.status_code(), 200);

        let roster: RosterResponse = response.json();
        assert_eq!(
            roster.names,
            vec!["Adam Voss", "Cory Mccombs", "Richard Sanchez", "Jacqueline Vo"]
        );
        assert_eq!(roster.advisory, None);
    }

    #[tokio::test]
    async fn test_submit_with_dropdown_selection() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;

        let response = server
            .post("/submissions")
            .json(&serde_json::json!({ "dropdown": "Adam Voss" }))
            .await;
        assert_eq!(response.status_code(), 201);

        let submission: serde_json::Value = response.json();
        assert_eq!(submission["student_name"], "Adam Voss");
        assert_eq!(submission["timestamp"], "2025-01-07 10:30:00");
        assert_eq!(submission["success"], true);

        // The workflow is now confirmed
        let state: serde_json::Value = server.get("/state").await.json();
        assert_eq!(state["view"], "confirmed");
        assert_eq!(state["student_name"], "Adam Voss");
    }

    #[tokio::test]
    async fn test_submit_without_selection() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;

        let response = server
            .post("/submissions")
            .json(&serde_json::json!({}))
            .await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "NoSelectionMade");
        assert_eq!(body["message"], "Please select your name.");

        // Still on the form, with the message recorded
        let state: serde_json::Value = server.get("/state").await.json();
        assert_eq!(state["view"], "form");
        assert_eq!(state["message"], "Please select your name.");
    }

    #[tokio::test]
    async fn test_typed_name_profile_no_selection_message() {
        let server = test_server(WorkflowProfile::TypedName).await;

        let response = server
            .post("/submissions")
            .json(&serde_json::json!({ "typed_name": "Adam Voss" }))
            .await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "NoSelectionMade");
        assert_eq!(body["message"], "Please select your name from the roster.");
    }

    #[tokio::test]
    async fn test_typed_name_profile_mismatch() {
        let server = test_server(WorkflowProfile::TypedName).await;

        let response = server
            .post("/submissions")
            .json(&serde_json::json!({
                "typed_name": "Adam Voss",
                "radio": "Cory Mccombs"
            }))
            .await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "TypedSelectedMismatch");
    }

    #[tokio::test]
    async fn test_typed_name_profile_unknown_name() {
        let server = test_server(WorkflowProfile::TypedName).await;

        let response = server
            .post("/submissions")
            .json(&serde_json::json!({
                "typed_name": "Jon Snow",
                "radio": "Adam Voss"
            }))
            .await;
        assert_eq!(response.status_code(), 400);

        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "NameNotInRoster");
    }

    #[tokio::test]
    async fn test_duplicate_submission_conflicts() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;

        let first = server
            .post("/submissions")
            .json(&serde_json::json!({ "radio": "Jacqueline Vo" }))
            .await;
        assert_eq!(first.status_code(), 201);

        let second = server
            .post("/submissions")
            .json(&serde_json::json!({ "radio": "Jacqueline Vo" }))
            .await;
        assert_eq!(second.status_code(), 409);

        let body: serde_json::Value = second.json();
        assert_eq!(body["error"], "AlreadyConfirmed");
    }

    #[tokio::test]
    async fn test_reset_returns_empty_form() {
        let server = test_server(WorkflowProfile::SelectionOnly).await;

        let _ = server
            .post("/submissions")
            .json(&serde_json::json!({ "dropdown": "Adam Voss" }))
            .await;

        let response = server.post("/reset").await;
        assert_eq!(response.status_code(), 200);

        let state: serde_json::Value = response.json();
        assert_eq!(state["view"], "form");
        assert_eq!(state["typed_name"], "");
        assert_eq!(state["message"], serde_json::Value::Null);
        assert_eq!(state["selection"]["mode"], "none");

        // Submitting again is possible after reset
        let again = server
            .post("/submissions")
            .json(&serde_json::json!({ "dropdown": "Adam Voss" }))
            .await;
        assert_eq!(again.status_code(), 201);
    }
}

//! Error handling for the attendance backend
//!
//! HTTP mapping for the errors the check-in endpoints can actually
//! produce. Every handler failure is a `WorkflowError` (a validation
//! rejection or a duplicate submission); loader and config failures
//! never reach a response body, so they are not represented here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::workflow_service::WorkflowError;

/// Errors surfaced by the check-in API
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Workflow(#[from] WorkflowError),
}

impl AppError {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Workflow(WorkflowError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Workflow(WorkflowError::AlreadyConfirmed) => StatusCode::CONFLICT,
        }
    }

    /// Get error code for API responses
    ///
    /// Validation failures surface their specific kind so clients can
    /// distinguish them without parsing message text.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Workflow(WorkflowError::Validation(e)) => e.kind(),
            AppError::Workflow(WorkflowError::AlreadyConfirmed) => "AlreadyConfirmed",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        // All of these are client-side rejections
        tracing::warn!(%error_code, %message, "Request rejected");

        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();

        let body = Json(json!({
            "error": error_code,
            "message": message,
            "timestamp": timestamp
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validator::ValidationError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::Workflow(WorkflowError::Validation(ValidationError::no_selection()))
                .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Workflow(WorkflowError::AlreadyConfirmed).status_code(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_validation_kinds_surface_in_error_code() {
        assert_eq!(
            AppError::Workflow(WorkflowError::Validation(ValidationError::NameNotInRoster))
                .error_code(),
            "NameNotInRoster"
        );
        assert_eq!(
            AppError::Workflow(WorkflowError::Validation(ValidationError::no_selection()))
                .error_code(),
            "NoSelectionMade"
        );
        assert_eq!(
            AppError::Workflow(WorkflowError::Validation(
                ValidationError::TypedSelectedMismatch
            ))
            .error_code(),
            "TypedSelectedMismatch"
        );
        assert_eq!(
            AppError::Workflow(WorkflowError::AlreadyConfirmed).error_code(),
            "AlreadyConfirmed"
        );
    }

    #[test]
    fn test_error_response_format() {
        let error = AppError::Workflow(WorkflowError::Validation(ValidationError::no_selection()));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

//! Attendance Workflow Service
//!
//! Orchestrates the check-in workflow: holds the session roster, the
//! form inputs, and the two-state view machine (Form and Confirmed).
//! The view payloads are disjoint variants, so reset structurally clears
//! every form field, and a Confirmed view cannot carry stale selection
//! state.
//!
//! The roster fetch is the only suspending operation. It runs as a
//! spawned task that is aborted when the workflow is torn down, and the
//! task only holds a weak handle to the shared state, so a late result
//! can never be applied to a disposed workflow.

use crate::config::WorkflowProfile;
use crate::models::roster::Roster;
use crate::models::selection::SelectionState;
use crate::models::submission::Submission;
use crate::services::roster_service::{RosterLoadOutcome, RosterService, RosterSource};
use crate::services::selection_service::SelectionController;
use crate::services::submission_service::{SubmissionFactory, SubmissionSink};
use crate::services::validator::{NameValidator, ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex as StdMutex, Weak};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::debug;

/// What the user currently sees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewState {
    /// The check-in form with its transient inputs
    Form {
        selection: SelectionState,
        typed_name: String,
        message: Option<String>,
    },

    /// The confirmation view after a successful submission
    Confirmed {
        student_name: String,
        timestamp: String,
    },
}

impl ViewState {
    /// The empty initial form
    pub fn form() -> Self {
        ViewState::Form {
            selection: SelectionState::None,
            typed_name: String::new(),
            message: None,
        }
    }

    /// Whether this is the form view
    pub fn is_form(&self) -> bool {
        matches!(self, ViewState::Form { .. })
    }
}

/// Workflow-level errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Attendance has already been recorded; reset to submit again")]
    AlreadyConfirmed,
}

#[derive(Debug)]
struct WorkflowState {
    roster: Roster,
    advisory: Option<String>,
    view: ViewState,
}

/// The attendance check-in workflow for one session
pub struct AttendanceWorkflow {
    profile: WorkflowProfile,
    factory: SubmissionFactory,
    sink: Arc<dyn SubmissionSink>,
    state: Arc<RwLock<WorkflowState>>,
    roster_fetch: StdMutex<Option<JoinHandle<()>>>,
}

impl AttendanceWorkflow {
    /// Create a workflow with an empty roster
    pub fn new(
        profile: WorkflowProfile,
        factory: SubmissionFactory,
        sink: Arc<dyn SubmissionSink>,
    ) -> Self {
        Self {
            profile,
            factory,
            sink,
            state: Arc::new(RwLock::new(WorkflowState {
                roster: Roster::default(),
                advisory: None,
                view: ViewState::form(),
            })),
            roster_fetch: StdMutex::new(None),
        }
    }

    /// The configured deployment profile
    pub fn profile(&self) -> WorkflowProfile {
        self.profile
    }

    /// Install a roster load outcome (startup or completed fetch)
    pub async fn install_roster(&self, outcome: RosterLoadOutcome) {
        let mut state = self.state.write().await;
        state.roster = outcome.roster;
        state.advisory = outcome.error.map(|e| e.to_string());
    }

    /// Kick off the once-per-session roster fetch
    ///
    /// The form stays interactive over an empty roster until the fetch
    /// resolves. A stalled fetch leaves the roster empty indefinitely,
    /// which is a degraded state rather than an error.
    pub fn spawn_roster_load(&self, service: RosterService, source: RosterSource) {
        let state: Weak<RwLock<WorkflowState>> = Arc::downgrade(&self.state);

        let handle = tokio::spawn(async move {
            let outcome = service.load(&source).await;

            // A torn-down workflow must not receive a late roster
            let Some(state) = state.upgrade() else {
                debug!("Roster fetch finished after workflow teardown; discarding");
                return;
            };
            let mut state = state.write().await;
            state.roster = outcome.roster;
            state.advisory = outcome.error.map(|e| e.to_string());
        });

        if let Ok(mut fetch) = self.roster_fetch.lock() {
            if let Some(previous) = fetch.replace(handle) {
                previous.abort();
            }
        }
    }

    /// The loaded roster (empty until the fetch resolves)
    pub async fn roster(&self) -> Roster {
        self.state.read().await.roster.clone()
    }

    /// Advisory message from a failed roster load, if any
    pub async fn advisory(&self) -> Option<String> {
        self.state.read().await.advisory.clone()
    }

    /// Current view state
    pub async fn view(&self) -> ViewState {
        self.state.read().await.view.clone()
    }

    /// Set the dropdown selection (clears any radio choice)
    pub async fn set_dropdown(&self, name: &str) -> Result<(), WorkflowError> {
        self.update_selection(|controller| controller.set_dropdown(name))
            .await
    }

    /// Set the radio selection (clears any dropdown choice)
    pub async fn set_radio(&self, name: &str) -> Result<(), WorkflowError> {
        self.update_selection(|controller| controller.set_radio(name))
            .await
    }

    async fn update_selection(
        &self,
        apply: impl FnOnce(&mut SelectionController),
    ) -> Result<(), WorkflowError> {
        let mut state = self.state.write().await;
        match &mut state.view {
            ViewState::Form { selection, .. } => {
                let mut controller = SelectionController::from_state(selection.clone());
                apply(&mut controller);
                *selection = controller.into_state();
                Ok(())
            }
            ViewState::Confirmed { .. } => Err(WorkflowError::AlreadyConfirmed),
        }
    }

    /// Set the typed name (typed-name profile)
    pub async fn set_typed_name(&self, name: &str) -> Result<(), WorkflowError> {
        let mut state = self.state.write().await;
        match &mut state.view {
            ViewState::Form { typed_name, .. } => {
                *typed_name = name.to_string();
                Ok(())
            }
            ViewState::Confirmed { .. } => Err(WorkflowError::AlreadyConfirmed),
        }
    }

    /// Validate the current inputs and record the check-in
    ///
    /// On success the view transitions to Confirmed and the record is
    /// handed to the sink. On failure the view stays Form with a
    /// kind-specific message and no record is constructed.
    pub async fn submit(&self) -> Result<Submission, WorkflowError> {
        let mut state = self.state.write().await;

        let (selection, typed_name) = match &state.view {
            ViewState::Form {
                selection,
                typed_name,
                ..
            } => (selection.clone(), typed_name.clone()),
            ViewState::Confirmed { .. } => return Err(WorkflowError::AlreadyConfirmed),
        };

        let selected_name = selection.value();
        let validated = match self.profile {
            WorkflowProfile::TypedName => {
                NameValidator::validate(&typed_name, selected_name, &state.roster)
            }
            WorkflowProfile::SelectionOnly => {
                NameValidator::validate_selection(selected_name, &state.roster)
            }
        };

        match validated {
            Ok(canonical_name) => {
                let student = state.roster.find_by_name(&canonical_name).cloned();
                let submission = self.factory.build(student.as_ref(), &canonical_name);

                // Fire-and-forget to the persistence collaborator
                self.sink.accept(submission.clone());

                state.view = ViewState::Confirmed {
                    student_name: submission.student_name.clone(),
                    timestamp: submission.timestamp.clone(),
                };
                Ok(submission)
            }
            Err(error) => {
                if let ViewState::Form { message, .. } = &mut state.view {
                    *message = Some(error.to_string());
                }
                Err(WorkflowError::Validation(error))
            }
        }
    }

    /// Return to the empty form, clearing selection, typed name,
    /// message, and any confirmed submission data
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.view = ViewState::form();
    }
}

impl Drop for AttendanceWorkflow {
    fn drop(&mut self) {
        // Cancel an outstanding roster fetch on teardown
        if let Ok(mut fetch) = self.roster_fetch.lock() {
            if let Some(handle) = fetch.take() {
                handle.abort();
            }
        }
    }
}

impl std::fmt::Debug for AttendanceWorkflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AttendanceWorkflow")
            .field("profile", &self.profile)
            .finish()
    }
}

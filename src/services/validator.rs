//! Name Validator
//!
//! Validation rules for check-in submissions. The typed-name profile
//! checks a freely typed name against the roster and the current
//! selection; the selection-only profile checks just the selection.
//! Rules are evaluated in a fixed order and the first failure wins, so
//! an unknown name is reported before a finer-grained mismatch.

use crate::models::roster::Roster;

/// User-input validation failures
///
/// Messages are kind-specific so the UI can show exactly what to fix;
/// none of these escalate past the workflow boundary. The no-selection
/// prompt differs between the two deployment profiles, so that variant
/// carries its prompt while the kind stays stable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name not found in roster. Please check spelling.")]
    NameNotInRoster,

    #[error("{prompt}")]
    NoSelectionMade { prompt: &'static str },

    #[error("Typed name and selected name must match.")]
    TypedSelectedMismatch,
}

impl ValidationError {
    /// No-selection failure for the selection-only profile
    pub fn no_selection() -> Self {
        ValidationError::NoSelectionMade {
            prompt: "Please select your name.",
        }
    }

    /// No-selection failure for the typed-name profile
    pub fn no_selection_from_roster() -> Self {
        ValidationError::NoSelectionMade {
            prompt: "Please select your name from the roster.",
        }
    }

    /// Stable kind identifier for API responses and tests
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::NameNotInRoster => "NameNotInRoster",
            ValidationError::NoSelectionMade { .. } => "NoSelectionMade",
            ValidationError::TypedSelectedMismatch => "TypedSelectedMismatch",
        }
    }
}

/// Validator for the attendance check-in rules
#[derive(Debug, Clone, Copy, Default)]
pub struct NameValidator;

impl NameValidator {
    /// Typed-name profile: typed name must be in the roster, a selection
    /// must exist, and the two must agree (case-insensitive, trimmed).
    ///
    /// Success carries the canonical roster spelling of the name.
    pub fn validate(
        typed_name: &str,
        selected_name: &str,
        roster: &Roster,
    ) -> Result<String, ValidationError> {
        let student = roster
            .find_by_name(typed_name)
            .ok_or(ValidationError::NameNotInRoster)?;

        if selected_name.trim().is_empty() {
            return Err(ValidationError::no_selection_from_roster());
        }

        if typed_name.trim().to_lowercase() != selected_name.trim().to_lowercase() {
            return Err(ValidationError::TypedSelectedMismatch);
        }

        Ok(student.display_name())
    }

    /// Selection-only profile: a selection must exist and name a roster
    /// entry. Success carries the canonical roster spelling.
    pub fn validate_selection(
        selected_name: &str,
        roster: &Roster,
    ) -> Result<String, ValidationError> {
        if selected_name.trim().is_empty() {
            return Err(ValidationError::no_selection());
        }

        roster
            .find_by_name(selected_name)
            .map(|student| student.display_name())
            .ok_or(ValidationError::NameNotInRoster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::builtin()
    }

    #[test]
    fn test_unknown_typed_name_fails_first() {
        // Even with no selection, the unknown name is reported first
        let result = NameValidator::validate("Jon Snow", "", &roster());
        assert_eq!(result, Err(ValidationError::NameNotInRoster));

        let result = NameValidator::validate("Jon Snow", "Adam Voss", &roster());
        assert_eq!(result, Err(ValidationError::NameNotInRoster));
    }

    #[test]
    fn test_missing_selection() {
        let result = NameValidator::validate("Adam Voss", "   ", &roster());
        assert_eq!(result, Err(ValidationError::no_selection_from_roster()));
    }

    #[test]
    fn test_typed_selected_mismatch() {
        let result = NameValidator::validate("Adam Voss", "Cory Mccombs", &roster());
        assert_eq!(result, Err(ValidationError::TypedSelectedMismatch));
    }

    #[test]
    fn test_success_carries_canonical_name() {
        let result = NameValidator::validate("  ADAM voss ", "adam VOSS", &roster());
        assert_eq!(result, Ok("Adam Voss".to_string()));
    }

    #[test]
    fn test_selection_only_requires_selection() {
        let result = NameValidator::validate_selection("", &roster());
        assert_eq!(result, Err(ValidationError::no_selection()));
    }

    #[test]
    fn test_no_selection_prompt_differs_by_profile() {
        // The selection-only form asks only for a pick; the typed-name
        // form points at the roster list next to the text field
        let selection_only = NameValidator::validate_selection("  ", &roster()).unwrap_err();
        assert_eq!(selection_only.to_string(), "Please select your name.");

        let typed = NameValidator::validate("Adam Voss", "", &roster()).unwrap_err();
        assert_eq!(
            typed.to_string(),
            "Please select your name from the roster."
        );

        // Same kind either way
        assert_eq!(selection_only.kind(), "NoSelectionMade");
        assert_eq!(typed.kind(), "NoSelectionMade");
    }

    #[test]
    fn test_selection_only_checks_roster() {
        let result = NameValidator::validate_selection("Jon Snow", &roster());
        assert_eq!(result, Err(ValidationError::NameNotInRoster));

        let result = NameValidator::validate_selection(" jacqueline vo ", &roster());
        assert_eq!(result, Ok("Jacqueline Vo".to_string()));
    }

    #[test]
    fn test_messages_are_kind_specific() {
        assert_eq!(
            ValidationError::NameNotInRoster.to_string(),
            "Name not found in roster. Please check spelling."
        );
        assert_eq!(
            ValidationError::TypedSelectedMismatch.to_string(),
            "Typed name and selected name must match."
        );

        assert_eq!(ValidationError::NameNotInRoster.kind(), "NameNotInRoster");
        assert_eq!(ValidationError::no_selection().kind(), "NoSelectionMade");
        assert_eq!(
            ValidationError::TypedSelectedMismatch.kind(),
            "TypedSelectedMismatch"
        );
    }
}

//! Selection Controller
//!
//! Pure state holder for the mutually-exclusive dropdown/radio choice.
//! Setting one method to a non-empty value clears the other; clearing a
//! method leaves the other untouched. No side effects beyond internal
//! state, so this is unit tested exhaustively.

use crate::models::selection::SelectionState;

/// Tracks which input method holds the current choice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    /// Create a controller with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a controller from a previously captured state
    pub fn from_state(state: SelectionState) -> Self {
        Self { state }
    }

    /// Set the dropdown value; a non-empty value displaces a radio choice
    pub fn set_dropdown(&mut self, name: &str) {
        if name.trim().is_empty() {
            // Clearing the dropdown leaves a radio choice untouched
            if matches!(self.state, SelectionState::Dropdown(_)) {
                self.state = SelectionState::None;
            }
        } else {
            self.state = SelectionState::Dropdown(name.to_string());
        }
    }

    /// Set the radio value; a non-empty value displaces a dropdown choice
    pub fn set_radio(&mut self, name: &str) {
        if name.trim().is_empty() {
            if matches!(self.state, SelectionState::Radio(_)) {
                self.state = SelectionState::None;
            }
        } else {
            self.state = SelectionState::Radio(name.to_string());
        }
    }

    /// The current selection state
    pub fn current(&self) -> &SelectionState {
        &self.state
    }

    /// Clear the selection entirely
    pub fn reset(&mut self) {
        self.state = SelectionState::None;
    }

    /// Consume the controller, yielding its state
    pub fn into_state(self) -> SelectionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::selection::SelectionMode;

    #[test]
    fn test_starts_empty() {
        let controller = SelectionController::new();
        assert_eq!(controller.current(), &SelectionState::None);
        assert_eq!(controller.current().value(), "");
    }

    #[test]
    fn test_dropdown_displaces_radio() {
        let mut controller = SelectionController::new();
        controller.set_radio("Jacqueline Vo");
        controller.set_dropdown("Adam Voss");

        assert_eq!(
            controller.current(),
            &SelectionState::Dropdown("Adam Voss".to_string())
        );
    }

    #[test]
    fn test_radio_displaces_dropdown() {
        let mut controller = SelectionController::new();
        controller.set_dropdown("Adam Voss");
        controller.set_radio("Jacqueline Vo");

        assert_eq!(
            controller.current(),
            &SelectionState::Radio("Jacqueline Vo".to_string())
        );
    }

    #[test]
    fn test_clearing_dropdown_keeps_radio() {
        let mut controller = SelectionController::new();
        controller.set_radio("Jacqueline Vo");
        controller.set_dropdown("");

        assert_eq!(
            controller.current(),
            &SelectionState::Radio("Jacqueline Vo".to_string())
        );
    }

    #[test]
    fn test_clearing_radio_keeps_dropdown() {
        let mut controller = SelectionController::new();
        controller.set_dropdown("Adam Voss");
        controller.set_radio("");

        assert_eq!(
            controller.current(),
            &SelectionState::Dropdown("Adam Voss".to_string())
        );
    }

    #[test]
    fn test_clearing_active_method_empties_selection() {
        let mut controller = SelectionController::new();
        controller.set_dropdown("Adam Voss");
        controller.set_dropdown("");
        assert_eq!(controller.current(), &SelectionState::None);

        controller.set_radio("Jacqueline Vo");
        controller.set_radio("  ");
        assert_eq!(controller.current(), &SelectionState::None);
    }

    #[test]
    fn test_at_most_one_method_holds_a_value() {
        // Mutual exclusivity holds after every call in any sequence
        let calls: &[(&str, &str)] = &[
            ("dropdown", "Adam Voss"),
            ("radio", "Jacqueline Vo"),
            ("dropdown", ""),
            ("radio", "Cory Mccombs"),
            ("dropdown", "Richard Sanchez"),
            ("radio", ""),
            ("dropdown", ""),
        ];

        let mut controller = SelectionController::new();
        for (method, value) in calls {
            match *method {
                "dropdown" => controller.set_dropdown(value),
                _ => controller.set_radio(value),
            }
            // The tagged representation can hold at most one value, and
            // a non-None state always carries a non-empty name
            match controller.current() {
                SelectionState::None => assert_eq!(controller.current().value(), ""),
                state => assert!(!state.value().trim().is_empty()),
            }
        }
    }

    #[test]
    fn test_reset_is_idempotent_and_total() {
        let mut controller = SelectionController::new();
        controller.set_dropdown("Adam Voss");
        controller.set_radio("Jacqueline Vo");

        controller.reset();
        assert_eq!(controller.current(), &SelectionState::None);

        controller.reset();
        assert_eq!(controller.current(), &SelectionState::None);
        assert_eq!(controller.current().mode(), SelectionMode::None);
    }

    #[test]
    fn test_state_round_trip() {
        let mut controller = SelectionController::new();
        controller.set_radio("Adam Voss");

        let state = controller.clone().into_state();
        let resumed = SelectionController::from_state(state);
        assert_eq!(resumed, controller);
    }
}

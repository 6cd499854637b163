//! Selection State Model
//!
//! The two input methods (dropdown and radio list) are mutually
//! exclusive, so the current choice is one tagged value rather than two
//! independently-settable fields. An invalid "both set" state is not
//! representable.

use serde::{Deserialize, Serialize};

/// Which input method currently holds the choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    None,
    Dropdown,
    Radio,
}

/// The current selection, tagged by input method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", content = "value", rename_all = "lowercase")]
pub enum SelectionState {
    /// Neither input method holds a value
    #[default]
    None,

    /// A name chosen from the dropdown list
    Dropdown(String),

    /// A name chosen from the radio-button list
    Radio(String),
}

impl SelectionState {
    /// The input method holding the current choice
    pub fn mode(&self) -> SelectionMode {
        match self {
            SelectionState::None => SelectionMode::None,
            SelectionState::Dropdown(_) => SelectionMode::Dropdown,
            SelectionState::Radio(_) => SelectionMode::Radio,
        }
    }

    /// The single effective name, or empty if nothing is selected
    pub fn value(&self) -> &str {
        match self {
            SelectionState::None => "",
            SelectionState::Dropdown(name) | SelectionState::Radio(name) => name,
        }
    }

    /// Whether no input method holds a value
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::None)
    }
}

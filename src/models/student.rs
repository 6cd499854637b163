//! Student Model
//!
//! Represents one roster entry. The roster document is the temporary
//! data source until a relational store exists, so the field set mirrors
//! the document schema: ID, FirstName, LastName, ClassID, ClassName.
//! Name-only roster documents populate just the two name fields.

use serde::{Deserialize, Serialize};

/// A student eligible to check in for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Roster-unique identifier; absent for name-only roster entries
    pub id: Option<i32>,

    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Class the student belongs to
    pub class_id: Option<i32>,

    /// Display name of the class
    pub class_name: Option<String>,
}

impl Student {
    /// Create a fully-populated student record
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        class_id: i32,
        class_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Some(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            class_id: Some(class_id),
            class_name: Some(class_name.into()),
        }
    }

    /// Create a student from a bare display name ("First Last")
    ///
    /// The first whitespace-separated token becomes the first name and
    /// the remainder the last name. Single-token names keep an empty
    /// last name.
    pub fn from_display_name(name: &str) -> Self {
        let trimmed = name.trim();
        let (first, last) = match trimmed.split_once(char::is_whitespace) {
            Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
            None => (trimmed.to_string(), String::new()),
        };

        Self {
            id: None,
            first_name: first,
            last_name: last,
            class_id: None,
            class_name: None,
        }
    }

    /// Full display name as shown in selection lists
    pub fn display_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();

        if last.is_empty() {
            first.to_string()
        } else if first.is_empty() {
            last.to_string()
        } else {
            format!("{} {}", first, last)
        }
    }

    /// Case-insensitive, whitespace-trimming match against a display name
    pub fn matches_name(&self, name: &str) -> bool {
        self.display_name().to_lowercase() == name.trim().to_lowercase()
    }

    /// Validate the student record
    pub fn validate(&self) -> Result<(), StudentError> {
        if self.display_name().is_empty() {
            return Err(StudentError::EmptyName);
        }
        Ok(())
    }
}

/// Student validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentError {
    #[error("Student name is empty")]
    EmptyName,
}

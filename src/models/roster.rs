//! Roster Model
//!
//! Ordered, read-only list of students for a session. Loaded once at
//! startup; insertion order is display order. Also carries the two
//! compiled-in name lists: the fallback used when a roster document
//! cannot be loaded and the builtin roster for no-network deployments.

use crate::models::student::{Student, StudentError};
use serde::{Deserialize, Serialize};

/// Short list substituted when the roster document cannot be loaded
pub const FALLBACK_NAMES: &[&str] = &["Adam Voss", "Jacqueline Vo"];

/// Compiled-in roster for deployments without a roster document
pub const BUILTIN_NAMES: &[&str] = &[
    "Adam Voss",
    "Cory Mccombs",
    "Richard Sanchez",
    "Jacqueline Vo",
];

/// Ordered collection of students eligible to check in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Build a roster, enforcing per-roster ID uniqueness and non-empty names
    pub fn new(students: Vec<Student>) -> Result<Self, RosterError> {
        let mut seen_ids = Vec::new();
        for student in &students {
            student.validate()?;
            if let Some(id) = student.id {
                if seen_ids.contains(&id) {
                    return Err(RosterError::DuplicateStudentId(id));
                }
                seen_ids.push(id);
            }
        }
        Ok(Self { students })
    }

    /// Build a roster from bare display names, skipping blank entries
    pub fn from_display_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let students = names
            .into_iter()
            .filter(|name| !name.as_ref().trim().is_empty())
            .map(|name| Student::from_display_name(name.as_ref()))
            .collect();
        Self { students }
    }

    /// The fallback roster substituted on load failure
    pub fn fallback() -> Self {
        Self::from_display_names(FALLBACK_NAMES.iter().copied())
    }

    /// The compiled-in roster for no-network deployments
    pub fn builtin() -> Self {
        Self::from_display_names(BUILTIN_NAMES.iter().copied())
    }

    /// Students in display order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Display names in roster order
    pub fn display_names(&self) -> Vec<String> {
        self.students.iter().map(Student::display_name).collect()
    }

    /// Find a student by display name, case-insensitively and ignoring
    /// surrounding whitespace
    pub fn find_by_name(&self, name: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.matches_name(name))
    }

    /// Whether a display name appears in the roster
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

/// Roster construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    #[error("Duplicate student ID in roster: {0}")]
    DuplicateStudentId(i32),

    #[error("Invalid roster entry: {0}")]
    InvalidStudent(#[from] StudentError),
}

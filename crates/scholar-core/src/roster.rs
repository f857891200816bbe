//! # Roster Management
//!
//! The in-memory student collection for one grade-analyzer run.
//!
//! Names are normalized (trimmed, title-cased) inside the roster at every
//! entry point, so stored and looked-up names are always compared in the
//! same form. Invariant: no two students share a normalized name.
//!
//! Storage preserves insertion order; the report engine re-sorts a copy.

use crate::types::{Grade, ScholarError};
use serde::{Deserialize, Serialize};

// =============================================================================
// NAME NORMALIZATION
// =============================================================================

/// Normalize a student name: trim, then title-case.
///
/// An alphabetic character is uppercased when it follows a non-alphabetic
/// character (or starts the name) and lowercased otherwise, so
/// `"  o'brien  "` becomes `"O'Brien"` and `"ALICE"` becomes `"Alice"`.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut boundary = true;
    for ch in raw.trim().chars() {
        if ch.is_alphabetic() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(ch);
            boundary = true;
        }
    }
    out
}

// =============================================================================
// STUDENT
// =============================================================================

/// A student and their recorded grades, in entry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: String,
    grades: Vec<Grade>,
}

impl Student {
    /// Create a student with no grades. The name must already be
    /// normalized; [`Roster::add`] is the normal entry point.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            grades: Vec::new(),
        }
    }

    /// Get the normalized name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the recorded grades in entry order.
    #[must_use]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    /// Append a grade.
    pub fn record(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    /// Check whether at least one grade has been recorded.
    #[must_use]
    pub fn has_grades(&self) -> bool {
        !self.grades.is_empty()
    }

    /// Arithmetic mean of the recorded grades, `None` when there are none.
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        if self.grades.is_empty() {
            return None;
        }
        let sum: f64 = self.grades.iter().map(|g| f64::from(g.value())).sum();
        Some(sum / self.grades.len() as f64)
    }
}

// =============================================================================
// ROSTER
// =============================================================================

/// The ordered student collection for one run.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<Student>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a student, returning the normalized name on success.
    ///
    /// Returns `ScholarError::EmptyName` when the name is empty after
    /// normalization and `ScholarError::DuplicateStudent` when a student
    /// with the same normalized name already exists. The roster is
    /// unchanged on error.
    pub fn add(&mut self, raw_name: &str) -> Result<String, ScholarError> {
        let name = normalize_name(raw_name);
        if name.is_empty() {
            return Err(ScholarError::EmptyName);
        }
        if self.students.iter().any(|s| s.name() == name) {
            return Err(ScholarError::DuplicateStudent(name));
        }
        self.students.push(Student::new(name.clone()));
        Ok(name)
    }

    /// Find the first student matching a name. The lookup normalizes the
    /// name the same way [`Roster::add`] does.
    #[must_use]
    pub fn find(&self, raw_name: &str) -> Option<&Student> {
        let name = normalize_name(raw_name);
        self.students.iter().find(|s| s.name() == name)
    }

    /// Mutable variant of [`Roster::find`], used to record grades.
    pub fn find_mut(&mut self, raw_name: &str) -> Option<&mut Student> {
        let name = normalize_name(raw_name);
        self.students.iter_mut().find(|s| s.name() == name)
    }

    /// All students in insertion order.
    #[must_use]
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students on the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Check whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

// =============================================================================
// TESTS
// =============================================================================

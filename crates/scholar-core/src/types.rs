//! # Core Type Definitions
//!
//! This module contains the shared types for the Scholar domain:
//! - Grade representation (`Grade`)
//! - Error types (`ScholarError`)
//!
//! ## Validation Guarantees
//!
//! A `Grade` can only be constructed through its fallible constructors,
//! so every stored grade is within the accepted range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// GRADE BOUNDS
// =============================================================================

/// Lowest accepted grade.
pub const GRADE_MIN: i64 = 0;

/// Highest accepted grade.
pub const GRADE_MAX: i64 = 100;

// =============================================================================
// GRADE
// =============================================================================

/// A single recorded grade in the range `[GRADE_MIN, GRADE_MAX]`.
///
/// The inner value is private; construction goes through [`Grade::new`] or
/// [`Grade::parse`], which enforce the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Grade(u8);

impl Grade {
    /// Create a grade from a raw integer.
    ///
    /// Returns `ScholarError::GradeOutOfRange` for values outside
    /// `[GRADE_MIN, GRADE_MAX]`.
    pub fn new(value: i64) -> Result<Self, ScholarError> {
        if (GRADE_MIN..=GRADE_MAX).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ScholarError::GradeOutOfRange(value))
        }
    }

    /// Parse a grade from console input.
    ///
    /// The input is trimmed before parsing. Non-numeric input yields
    /// `ScholarError::InvalidGrade`; numeric input outside the accepted
    /// range yields `ScholarError::GradeOutOfRange`.
    pub fn parse(input: &str) -> Result<Self, ScholarError> {
        let trimmed = input.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| ScholarError::InvalidGrade(trimmed.to_string()))?;
        Self::new(value)
    }

    /// Get the raw grade value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the Scholar tools.
///
/// - No silent failures
/// - Use `Result<T, ScholarError>` for fallible operations
/// - Validation errors are recoverable at the interaction level;
///   only I/O failures terminate a session
#[derive(Debug, Error)]
pub enum ScholarError {
    /// Console input could not be parsed as a number.
    #[error("invalid grade '{0}': not a number")]
    InvalidGrade(String),

    /// A numeric grade fell outside the accepted range.
    #[error("grade {0} is outside 0-100")]
    GradeOutOfRange(i64),

    /// A student name was empty after normalization.
    #[error("student name cannot be empty")]
    EmptyName,

    /// A student with the same normalized name is already on the roster.
    #[error("student '{0}' already exists")]
    DuplicateStudent(String),

    /// The console closed before a required answer was read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// An I/O error occurred on the console streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// TESTS
// =============================================================================

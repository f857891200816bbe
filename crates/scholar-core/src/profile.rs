//! # Life-Stage Profiles
//!
//! Classification of a person into a life stage from their age, and the
//! profile summary the Profile Builder prints at the end of an interview.
//!
//! ## Stage Definitions
//!
//! | Stage | Age range |
//! |-------|-----------|
//! | Child | 0..=12 |
//! | Teenager | 13..=19 |
//! | Adult | everything else |
//!
//! Ages outside `[0, 19]` - including negative ages produced by a birth
//! year after the reference year - classify as `Adult`. Classification is
//! total; there is no error path.

use serde::{Deserialize, Serialize};

// =============================================================================
// AGE THRESHOLDS
// =============================================================================

/// Highest age classified as `Child`.
pub const CHILD_MAX_AGE: i64 = 12;

/// Highest age classified as `Teenager`.
pub const TEENAGER_MAX_AGE: i64 = 19;

/// Reference year used to derive an age when none is given on the
/// command line.
pub const DEFAULT_REFERENCE_YEAR: i64 = 2025;

/// Derive an age from a birth year relative to a reference year.
#[must_use]
pub const fn age_in(reference_year: i64, birth_year: i64) -> i64 {
    reference_year.saturating_sub(birth_year)
}

// =============================================================================
// LIFE STAGE
// =============================================================================

/// Life stage derived from an age via fixed inclusive ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LifeStage {
    /// Ages 0 through [`CHILD_MAX_AGE`].
    Child,
    /// Ages [`CHILD_MAX_AGE`] + 1 through [`TEENAGER_MAX_AGE`].
    Teenager,
    /// Every other age, negative ages included.
    Adult,
}

impl LifeStage {
    /// Classify an age into a life stage.
    #[must_use]
    pub fn from_age(age: i64) -> Self {
        if (0..=CHILD_MAX_AGE).contains(&age) {
            LifeStage::Child
        } else if ((CHILD_MAX_AGE + 1)..=TEENAGER_MAX_AGE).contains(&age) {
            LifeStage::Teenager
        } else {
            LifeStage::Adult
        }
    }

    /// Get the stage label.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            LifeStage::Child => "Child",
            LifeStage::Teenager => "Teenager",
            LifeStage::Adult => "Adult",
        }
    }
}

impl std::fmt::Display for LifeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// USER PROFILE
// =============================================================================

/// A profile built from one interview run.
///
/// Created once per run and never mutated afterwards; the stage is derived
/// from the age at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Full name, kept verbatim as entered.
    pub name: String,
    /// Age derived from the birth year and the reference year.
    pub age: i64,
    /// Life stage derived from the age.
    pub stage: LifeStage,
    /// Hobbies in entry order, kept verbatim (no deduplication, no
    /// trimming).
    pub hobbies: Vec<String>,
}

impl UserProfile {
    /// Build a profile, deriving the life stage from the age.
    #[must_use]
    pub fn new(name: impl Into<String>, age: i64, hobbies: Vec<String>) -> Self {
        Self {
            name: name.into(),
            age,
            stage: LifeStage::from_age(age),
            hobbies,
        }
    }

    /// Render the summary block, bounded by `---` lines.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            "---".to_string(),
            "Profile Summary:".to_string(),
            format!("Name: {}", self.name),
            format!("Age: {}", self.age),
            format!("Life Stage: {}", self.stage),
        ];

        if self.hobbies.is_empty() {
            lines.push("You didn't mention any hobbies.".to_string());
        } else {
            lines.push(format!("Favorite Hobbies ({}):", self.hobbies.len()));
            for hobby in &self.hobbies {
                lines.push(format!("- {}", hobby));
            }
        }

        lines.push("---".to_string());
        lines
    }
}

// =============================================================================
// TESTS
// =============================================================================

//! Student record types.
//!
//! Records are created once via the create endpoint and read-only afterward.
//! IDs are system-assigned by the store; clients never supply them.

use serde::{Deserialize, Serialize};

use crate::constants::PASS_THRESHOLD;

/// Scores for the three graded subjects.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    /// Math score.
    pub math: f64,
    /// Language score.
    pub language: f64,
    /// Science score.
    pub science: f64,
}

impl Scores {
    /// Arithmetic mean of the three scores.
    #[must_use]
    pub fn average(&self) -> f64 {
        (self.math + self.language + self.science) / 3.0
    }

    /// Whether the average meets the pass threshold (inclusive).
    #[must_use]
    pub fn passed(&self) -> bool {
        self.average() >= PASS_THRESHOLD
    }
}

/// A stored student record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// System-assigned identity (`stu_<uuidv7>`).
    pub id: String,
    /// Student name.
    pub name: String,
    /// School grade.
    pub grade: i64,
    /// Academic period (e.g. `"2026-I"`).
    pub period: String,
    /// Subject scores.
    pub scores: Scores,
}

/// Payload for creating a record — everything but the assigned id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewStudentRecord {
    /// Student name.
    pub name: String,
    /// School grade.
    pub grade: i64,
    /// Academic period.
    pub period: String,
    /// Subject scores.
    pub scores: Scores,
}

impl NewStudentRecord {
    /// Attach a system-assigned id, producing the stored form.
    #[must_use]
    pub fn with_id(self, id: impl Into<String>) -> StudentRecord {
        StudentRecord {
            id: id.into(),
            name: self.name,
            grade: self.grade,
            period: self.period,
            scores: self.scores,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

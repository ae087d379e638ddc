//! Consistency report models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a full consistency pass over a snapshot.
///
/// Errors are invariant violations; warnings are suspicious-but-valid
/// conditions and never affect `is_consistent`. The report is plain data -
/// rendering it for humans is the diagnostic view's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyReport {
    pub is_consistent: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    /// The snapshot instant the findings derive from.
    pub checked_at: DateTime<Utc>,
}

impl ConsistencyReport {
    /// Builds a report from collected findings.
    pub fn from_findings(
        errors: Vec<String>,
        warnings: Vec<String>,
        checked_at: DateTime<Utc>,
    ) -> Self {
        Self {
            is_consistent: errors.is_empty(),
            errors,
            warnings,
            checked_at,
        }
    }

    /// Total number of findings of either severity.
    pub fn total_findings(&self) -> usize {
        self.errors.len() + self.warnings.len()
    }
}

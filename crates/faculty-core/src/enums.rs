//! Status enum for faculty tasks.
//!
//! Variants serialize as `SCREAMING_SNAKE_CASE`, which is also the text stored
//! in the `tasks.status` column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow status of a task.
///
/// ```text
/// PENDING → IN_PROGRESS → SUBMITTED → COMPLETED
///                                   → IN_PROGRESS (rejected on review)
/// OVERDUE is set by escalation sweeps on unfinished tasks.
/// ```
///
/// `COMPLETED` is the only terminal status. Analytics treat everything else
/// as unfinished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Submitted,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [Self; 5] = [
        Self::Pending,
        Self::InProgress,
        Self::Submitted,
        Self::Completed,
        Self::Overdue,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InProgress => "IN_PROGRESS",
            Self::Submitted => "SUBMITTED",
            Self::Completed => "COMPLETED",
            Self::Overdue => "OVERDUE",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown task status '{s}'"))
    }
}

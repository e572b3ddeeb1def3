use chrono::{DateTime, TimeDelta, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// A unit of work assigned to exactly one faculty member.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: i64,
    pub status: TaskStatus,
    pub priority: i32,
    #[serde(default)]
    pub links: Vec<String>,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Past its due time and not completed, as of `now`.
    #[must_use]
    pub fn is_overdue_at(&self, now: DateTime<Utc>) -> bool {
        !self.status.is_terminal() && self.due_at < now
    }
}

/// `(created_at, updated_at)` of a completed task.
///
/// `updated_at` of a completed task is the proxy for its completion instant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompletionTime {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CompletionTime {
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.updated_at - self.created_at
    }
}

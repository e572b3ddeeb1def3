//! Task creation request.
//!
//! Only `links` carries constraints. Title, description, due time, assignee,
//! and priority are accepted as given; whether the assignee exists is the
//! storage layer's concern (foreign key).

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::violation::ValidationReport;

/// Priority applied when the request omits one.
pub const DEFAULT_PRIORITY: i32 = 3;

/// Maximum number of entries in `links`.
pub const MAX_LINKS: usize = 50;

/// Maximum length of a single link, in UTF-16 code units.
pub const MAX_LINK_LENGTH: usize = 2048;

/// Every link must match this in full.
pub const LINK_PATTERN: &str = r"^(https?://).*$";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("LINK_PATTERN is a valid regex"));

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreateInput {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// e.g. `"2025-09-05T18:00:00Z"`
    pub due_at: DateTime<Utc>,
    pub assigned_to_user_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// `null` and a missing field both mean no links.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[schemars(with = "Option<Vec<String>>")]
    pub links: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl TaskCreateInput {
    pub fn new(title: impl Into<String>, due_at: DateTime<Utc>, assigned_to_user_id: i64) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_at,
            assigned_to_user_id,
            priority: None,
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn with_links<I, S>(mut self, links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.links = links.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }

    /// Check every constraint and collect the failures.
    ///
    /// The list-size rule is reported on `links`; per-entry rules on
    /// `links[i]`. All rules are evaluated, so an oversized list still gets
    /// its entries checked.
    #[must_use]
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::new();

        if self.links.len() > MAX_LINKS {
            report.push("links", "Up to 50 links allowed");
        }

        for (i, link) in self.links.iter().enumerate() {
            if link.encode_utf16().count() > MAX_LINK_LENGTH {
                report.push(format!("links[{i}]"), "Each link must be ≤ 2048 characters");
            }
            if !LINK_RE.is_match(link) {
                report.push(
                    format!("links[{i}]"),
                    "Links must start with http:// or https://",
                );
            }
        }

        report
    }
}

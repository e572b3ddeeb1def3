use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Performance summary for one faculty member.
    Summary(SummaryArgs),
    /// Per-faculty performance rows and totals, optionally for one department.
    Performance(PerformanceArgs),
    /// Monthly assigned/completed/overdue counts across all users.
    Trends(TrendsArgs),
    /// Tasks past their due date that are not completed.
    Overdue(OverdueArgs),
    /// Check a task-creation JSON file without storing it.
    Validate(ValidateArgs),
}

/// Window bounds shared by `summary` and `trends`. Both are RFC 3339
/// instants; `--to` is exclusive.
#[derive(Clone, Debug, Default, Args)]
pub struct WindowArgs {
    /// Window start (inclusive), e.g. 2025-01-01T00:00:00Z
    #[arg(long)]
    pub from: Option<DateTime<Utc>>,
    /// Window end (exclusive)
    #[arg(long)]
    pub to: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Args)]
pub struct SummaryArgs {
    /// User id to summarise
    #[arg(long)]
    pub user: i64,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Clone, Debug, Args)]
pub struct PerformanceArgs {
    /// Only faculty in this department (case-insensitive)
    #[arg(long)]
    pub department: Option<String>,
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TrendsArgs {
    #[command(flatten)]
    pub window: WindowArgs,
}

#[derive(Clone, Debug, Args)]
pub struct OverdueArgs {
    /// Due-date cutoff (exclusive); defaults to now
    #[arg(long)]
    pub cutoff: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Args)]
pub struct ValidateArgs {
    /// Path to a JSON task-creation payload
    pub path: PathBuf,
}

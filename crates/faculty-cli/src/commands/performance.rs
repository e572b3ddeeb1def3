use chrono::{DateTime, Utc};
use faculty_db::analytics::{AnalyticsService, PerformanceSummary};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PerformanceArgs;
use crate::commands::shared::window::resolve_window;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faculty performance`.
pub async fn handle(
    args: &PerformanceArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summary = run(args, ctx, Utc::now()).await?;
    output(&summary, flags.format)
}

async fn run(
    args: &PerformanceArgs,
    ctx: &AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<PerformanceSummary> {
    let window = resolve_window(&args.window, ctx.config.analytics.default_window_days, now)?;
    let summary = AnalyticsService::new(&ctx.db)
        .faculty_performance(window, args.department.as_deref(), now)
        .await?;
    Ok(summary)
}

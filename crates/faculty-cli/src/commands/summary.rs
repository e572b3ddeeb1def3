use chrono::{DateTime, Utc};
use faculty_db::analytics::{AnalyticsService, UserTaskSummary};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SummaryArgs;
use crate::commands::shared::window::resolve_window;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faculty summary`.
pub async fn handle(
    args: &SummaryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let summary = run(args, ctx, chrono::Utc::now()).await?;
    output(&summary, flags.format)
}

async fn run(
    args: &SummaryArgs,
    ctx: &AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<UserTaskSummary> {
    let window = resolve_window(&args.window, ctx.config.analytics.default_window_days, now)?;
    let summary = AnalyticsService::new(&ctx.db)
        .user_summary(args.user, window, now)
        .await?;
    Ok(summary)
}

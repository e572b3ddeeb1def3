use chrono::{DateTime, Utc};
use faculty_db::analytics::{AnalyticsService, TaskTrend};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::TrendsArgs;
use crate::commands::shared::window::resolve_window;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faculty trends`.
pub async fn handle(
    args: &TrendsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let trends = run(args, ctx, Utc::now()).await?;
    output(&trends, flags.format)
}

async fn run(
    args: &TrendsArgs,
    ctx: &AppContext,
    now: DateTime<Utc>,
) -> anyhow::Result<Vec<TaskTrend>> {
    let window = resolve_window(&args.window, ctx.config.analytics.default_window_days, now)?;
    Ok(AnalyticsService::new(&ctx.db).task_trends(window, now).await?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::cli::root_commands::WindowArgs;

    #[tokio::test]
    async fn empty_store_has_no_trends() {
        let ctx = AppContext::in_memory().await;
        let args = TrendsArgs {
            window: WindowArgs::default(),
        };
        let trends = run(&args, &ctx, Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap())
            .await
            .unwrap();
        assert!(trends.is_empty());
    }
}

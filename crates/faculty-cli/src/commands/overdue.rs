use chrono::{DateTime, Utc};
use faculty_core::entities::Task;
use faculty_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::OverdueArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `faculty overdue`.
pub async fn handle(
    args: &OverdueArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let cutoff = args.cutoff.unwrap_or_else(Utc::now);
    let tasks = run(cutoff, ctx).await?;
    tracing::debug!(%cutoff, count = tasks.len(), "overdue tasks");
    output(&tasks, flags.format)
}

async fn run(cutoff: DateTime<Utc>, ctx: &AppContext) -> anyhow::Result<Vec<Task>> {
    Ok(ctx
        .db
        .find_by_due_at_before_and_status_not(cutoff, TaskStatus::Completed)
        .await?)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use faculty_core::dto::TaskCreateInput;

    use super::*;

    #[tokio::test]
    async fn lists_open_tasks_due_before_cutoff() {
        let ctx = AppContext::in_memory().await;
        let user = ctx
            .db
            .create_user("Dr. Okafor", "okafor@example.edu", None)
            .await
            .unwrap();
        let created = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let due_soon = Utc.with_ymd_and_hms(2025, 1, 5, 0, 0, 0).unwrap();
        let due_late = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();

        let late = ctx
            .db
            .create_task_at(&TaskCreateInput::new("Submit syllabus", due_soon, user.id), created)
            .await
            .unwrap();
        let done = ctx
            .db
            .create_task_at(&TaskCreateInput::new("Book lab", due_soon, user.id), created)
            .await
            .unwrap();
        ctx.db
            .update_task_status_at(done.id, TaskStatus::Completed, due_late)
            .await
            .unwrap();
        ctx.db
            .create_task_at(&TaskCreateInput::new("Final exam", due_late, user.id), created)
            .await
            .unwrap();

        let cutoff = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let tasks = run(cutoff, &ctx).await.unwrap();
        let ids: Vec<i64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![late.id]);
    }
}

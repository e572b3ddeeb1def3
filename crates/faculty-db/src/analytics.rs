//! Per-user performance summaries and monthly trends built on the task
//! analytics queries.
//!
//! `AnalyticsService` borrows the process-wide [`FacultyDb`]; it holds no
//! state of its own.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use faculty_core::enums::TaskStatus;
use faculty_core::window::TimeWindow;

use crate::FacultyDb;
use crate::error::DatabaseError;

/// How one faculty member did over a window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTaskSummary {
    pub user_id: i64,
    pub tasks_assigned: u64,
    pub tasks_completed: u64,
    pub tasks_in_progress: u64,
    pub tasks_overdue: u64,
    /// Mean `updated_at - created_at` of completed tasks, in hours.
    /// `None` when nothing was completed.
    pub average_completion_hours: Option<f64>,
    /// `tasks_completed / tasks_assigned`, 0.0 when nothing was assigned.
    pub completion_rate: f64,
}

/// Task counts for one calendar month (`YYYY-MM`) of creation dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskTrend {
    pub month: String,
    pub assigned: u64,
    pub completed: u64,
    pub overdue: u64,
}

/// One faculty member's row in [`PerformanceSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacultyPerformance {
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    #[serde(flatten)]
    pub summary: UserTaskSummary,
}

/// Department-wide view: every matching faculty member plus totals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceSummary {
    pub total_faculty: u64,
    pub total_tasks_assigned: u64,
    pub total_tasks_completed: u64,
    pub faculty_performances: Vec<FacultyPerformance>,
}

pub struct AnalyticsService<'a> {
    db: &'a FacultyDb,
}

impl<'a> AnalyticsService<'a> {
    #[must_use]
    pub const fn new(db: &'a FacultyDb) -> Self {
        Self { db }
    }

    /// Summarise `user_id`'s tasks created in `window`, judging overdue as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any underlying query fails.
    #[allow(clippy::cast_precision_loss)]
    pub async fn user_summary(
        &self,
        user_id: i64,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Result<UserTaskSummary, DatabaseError> {
        let (start, end) = (window.start(), window.end());

        let tasks_assigned = self
            .db
            .count_tasks_assigned_to_user_in_period(user_id, start, end)
            .await?;
        let tasks_completed = self
            .db
            .count_tasks_by_user_and_status_in_period(user_id, TaskStatus::Completed, start, end)
            .await?;
        let tasks_in_progress = self
            .db
            .count_tasks_by_user_and_status_in_period(user_id, TaskStatus::InProgress, start, end)
            .await?;
        let tasks_overdue = self
            .db
            .count_overdue_tasks_by_user_in_period(user_id, TaskStatus::Completed, now, start, end)
            .await?;

        let completions = self
            .db
            .find_completion_times_by_user_in_period(user_id, start, end)
            .await?;
        let average_completion_hours = if completions.is_empty() {
            None
        } else {
            let total_secs: i64 = completions.iter().map(|c| c.duration().num_seconds()).sum();
            Some(total_secs as f64 / completions.len() as f64 / 3600.0)
        };

        let completion_rate = if tasks_assigned == 0 {
            0.0
        } else {
            tasks_completed as f64 / tasks_assigned as f64
        };

        tracing::debug!(user_id, tasks_assigned, tasks_completed, "built user summary");

        Ok(UserTaskSummary {
            user_id,
            tasks_assigned,
            tasks_completed,
            tasks_in_progress,
            tasks_overdue,
            average_completion_hours,
            completion_rate,
        })
    }

    /// Summarise every user, or only those in `department` (case-insensitive),
    /// over `window`. Users with no tasks still get a zero row.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if any underlying query fails.
    pub async fn faculty_performance(
        &self,
        window: TimeWindow,
        department: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<PerformanceSummary, DatabaseError> {
        let users = self.db.list_users().await?;

        let mut faculty_performances = Vec::new();
        for user in users {
            if let Some(wanted) = department {
                let matches = user
                    .department
                    .as_deref()
                    .is_some_and(|d| d.eq_ignore_ascii_case(wanted));
                if !matches {
                    continue;
                }
            }
            let summary = self.user_summary(user.id, window, now).await?;
            faculty_performances.push(FacultyPerformance {
                name: user.name,
                email: user.email,
                department: user.department,
                summary,
            });
        }

        let total_tasks_assigned = faculty_performances
            .iter()
            .map(|p| p.summary.tasks_assigned)
            .sum();
        let total_tasks_completed = faculty_performances
            .iter()
            .map(|p| p.summary.tasks_completed)
            .sum();

        Ok(PerformanceSummary {
            total_faculty: faculty_performances.len() as u64,
            total_tasks_assigned,
            total_tasks_completed,
            faculty_performances,
        })
    }

    /// Group every task created in `window` by creation month.
    ///
    /// Months with no tasks are omitted; the result is in month order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn task_trends(
        &self,
        window: TimeWindow,
        now: DateTime<Utc>,
    ) -> Result<Vec<TaskTrend>, DatabaseError> {
        let tasks = self
            .db
            .find_by_created_at_between(window.start(), window.end())
            .await?;

        let mut months: BTreeMap<String, TaskTrend> = BTreeMap::new();
        // BETWEEN is closed; drop rows created exactly at the window end.
        for task in tasks.iter().filter(|t| window.contains(t.created_at)) {
            let month = task.created_at.format("%Y-%m").to_string();
            let trend = months.entry(month.clone()).or_insert_with(|| TaskTrend {
                month,
                assigned: 0,
                completed: 0,
                overdue: 0,
            });
            trend.assigned += 1;
            if task.status == TaskStatus::Completed {
                trend.completed += 1;
            }
            if task.is_overdue_at(now) {
                trend.overdue += 1;
            }
        }

        Ok(months.into_values().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::helpers::{day, seed_task, seed_user, test_db};

    #[tokio::test]
    async fn summary_for_user_without_tasks() {
        let db = test_db().await;
        let analytics = AnalyticsService::new(&db);
        let window = TimeWindow::new(day(2025, 1, 1), day(2025, 2, 1)).unwrap();

        let summary = analytics.user_summary(7, window, day(2025, 2, 1)).await.unwrap();
        assert_eq!(
            summary,
            UserTaskSummary {
                user_id: 7,
                tasks_assigned: 0,
                tasks_completed: 0,
                tasks_in_progress: 0,
                tasks_overdue: 0,
                average_completion_hours: None,
                completion_rate: 0.0,
            }
        );
    }

    #[tokio::test]
    async fn summary_counts_and_averages() {
        let db = test_db().await;
        seed_user(&db, 7).await;
        // completed after 1h by seed_task
        seed_task(&db, 7, day(2025, 1, 2), day(2025, 1, 5), TaskStatus::Completed).await;
        let slow = seed_task(&db, 7, day(2025, 1, 3), day(2025, 1, 5), TaskStatus::Pending).await;
        db.update_task_status_at(slow.id, TaskStatus::Completed, day(2025, 1, 4))
            .await
            .unwrap();
        seed_task(&db, 7, day(2025, 1, 6), day(2025, 1, 8), TaskStatus::InProgress).await;
        seed_task(&db, 7, day(2025, 1, 7), day(2025, 3, 1), TaskStatus::Pending).await;

        let analytics = AnalyticsService::new(&db);
        let window = TimeWindow::new(day(2025, 1, 1), day(2025, 2, 1)).unwrap();
        let summary = analytics.user_summary(7, window, day(2025, 2, 1)).await.unwrap();

        assert_eq!(summary.tasks_assigned, 4);
        assert_eq!(summary.tasks_completed, 2);
        assert_eq!(summary.tasks_in_progress, 1);
        assert_eq!(summary.tasks_overdue, 1);
        // (1h + 24h) / 2
        assert_eq!(summary.average_completion_hours, Some(12.5));
        assert!((summary.completion_rate - 0.5).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn performance_filters_by_department_and_totals() {
        let db = test_db().await;
        let rao = db
            .create_user("Dr. Rao", "rao@example.edu", Some("CSE"))
            .await
            .unwrap();
        let iyer = db
            .create_user("Dr. Iyer", "iyer@example.edu", Some("cse"))
            .await
            .unwrap();
        let okafor = db
            .create_user("Dr. Okafor", "okafor@example.edu", Some("Physics"))
            .await
            .unwrap();
        db.create_user("Dr. Lund", "lund@example.edu", None).await.unwrap();

        seed_task(&db, rao.id, day(2025, 1, 2), day(2025, 1, 9), TaskStatus::Completed).await;
        seed_task(&db, rao.id, day(2025, 1, 3), day(2025, 3, 1), TaskStatus::Pending).await;
        seed_task(&db, iyer.id, day(2025, 1, 4), day(2025, 3, 1), TaskStatus::Completed).await;
        seed_task(&db, okafor.id, day(2025, 1, 5), day(2025, 3, 1), TaskStatus::Completed).await;

        let analytics = AnalyticsService::new(&db);
        let window = TimeWindow::new(day(2025, 1, 1), day(2025, 2, 1)).unwrap();

        let cse = analytics
            .faculty_performance(window, Some("CSE"), day(2025, 2, 1))
            .await
            .unwrap();
        assert_eq!(cse.total_faculty, 2);
        assert_eq!(cse.total_tasks_assigned, 3);
        assert_eq!(cse.total_tasks_completed, 2);
        let emails: Vec<_> = cse
            .faculty_performances
            .iter()
            .map(|p| p.email.as_str())
            .collect();
        assert_eq!(emails, ["rao@example.edu", "iyer@example.edu"]);

        let everyone = analytics
            .faculty_performance(window, None, day(2025, 2, 1))
            .await
            .unwrap();
        assert_eq!(everyone.total_faculty, 4);
        assert_eq!(everyone.total_tasks_assigned, 4);
        assert_eq!(everyone.total_tasks_completed, 3);
        let lund = &everyone.faculty_performances[3];
        assert_eq!(lund.department, None);
        assert_eq!(lund.summary.tasks_assigned, 0);
    }

    #[tokio::test]
    async fn performance_rows_flatten_summary_fields() {
        let db = test_db().await;
        db.create_user("Dr. Rao", "rao@example.edu", Some("CSE"))
            .await
            .unwrap();
        let window = TimeWindow::new(day(2025, 1, 1), day(2025, 2, 1)).unwrap();
        let summary = AnalyticsService::new(&db)
            .faculty_performance(window, Some("Physics"), day(2025, 2, 1))
            .await
            .unwrap();
        assert_eq!(summary.total_faculty, 0);

        let json = serde_json::to_value(
            AnalyticsService::new(&db)
                .faculty_performance(window, None, day(2025, 2, 1))
                .await
                .unwrap(),
        )
        .unwrap();
        let row = &json["faculty_performances"][0];
        assert_eq!(row["name"], "Dr. Rao");
        assert_eq!(row["tasks_assigned"], 0);
    }

    #[tokio::test]
    async fn trends_group_by_month_and_honour_window_end() {
        let db = test_db().await;
        seed_user(&db, 7).await;
        seed_task(&db, 7, day(2025, 1, 5), day(2025, 1, 6), TaskStatus::Completed).await;
        seed_task(&db, 7, day(2025, 1, 20), day(2025, 1, 25), TaskStatus::Pending).await;
        seed_task(&db, 7, day(2025, 2, 3), day(2025, 4, 1), TaskStatus::Pending).await;
        // exactly at the exclusive end
        seed_task(&db, 7, day(2025, 3, 1), day(2025, 3, 2), TaskStatus::Pending).await;

        let analytics = AnalyticsService::new(&db);
        let window = TimeWindow::new(day(2025, 1, 1), day(2025, 3, 1)).unwrap();
        let trends = analytics.task_trends(window, day(2025, 3, 1)).await.unwrap();

        assert_eq!(
            trends,
            vec![
                TaskTrend {
                    month: "2025-01".into(),
                    assigned: 2,
                    completed: 1,
                    overdue: 1,
                },
                TaskTrend {
                    month: "2025-02".into(),
                    assigned: 1,
                    completed: 0,
                    overdue: 0,
                },
            ]
        );
    }
}

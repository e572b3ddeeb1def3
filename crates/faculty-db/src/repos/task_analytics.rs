//! Aggregate queries behind the analytics view.
//!
//! Every windowed query is anchored on `created_at` and treats the window as
//! half-open: `created_at >= start_inclusive AND created_at < end_exclusive`.
//! The deprecated helpers at the bottom keep their original framing,
//! including one closed-interval `BETWEEN`; do not mix them with the primary
//! methods against the same window boundaries.
//!
//! Unknown users are not an error: counts come back 0 and sequences empty.

use chrono::{DateTime, Utc};

use faculty_core::entities::CompletionTime;
use faculty_core::enums::TaskStatus;

use crate::FacultyDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, parse_datetime, read_count};

impl FacultyDb {
    /// Tasks assigned to `user_id` created in `[start_inclusive, end_exclusive)`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_tasks_assigned_to_user_in_period(
        &self,
        user_id: i64,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM tasks
                 WHERE assigned_to = ?1
                   AND created_at >= ?2
                   AND created_at < ?3",
                libsql::params![
                    user_id,
                    format_datetime(start_inclusive),
                    format_datetime(end_exclusive)
                ],
            )
            .await?;
        read_count(rows).await
    }

    /// Like [`FacultyDb::count_tasks_assigned_to_user_in_period`], restricted
    /// to tasks whose status is exactly `status`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_tasks_by_user_and_status_in_period(
        &self,
        user_id: i64,
        status: TaskStatus,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM tasks
                 WHERE assigned_to = ?1
                   AND status = ?2
                   AND created_at >= ?3
                   AND created_at < ?4",
                libsql::params![
                    user_id,
                    status.as_str(),
                    format_datetime(start_inclusive),
                    format_datetime(end_exclusive)
                ],
            )
            .await?;
        read_count(rows).await
    }

    /// Tasks created in the window that are overdue as of `current_time`:
    /// status is not `completed_status` and `due_at < current_time`.
    ///
    /// The window only selects which tasks are considered. `current_time` may
    /// lie anywhere, inside or outside it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn count_overdue_tasks_by_user_in_period(
        &self,
        user_id: i64,
        completed_status: TaskStatus,
        current_time: DateTime<Utc>,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM tasks
                 WHERE assigned_to = ?1
                   AND status <> ?2
                   AND due_at < ?3
                   AND created_at >= ?4
                   AND created_at < ?5",
                libsql::params![
                    user_id,
                    completed_status.as_str(),
                    format_datetime(current_time),
                    format_datetime(start_inclusive),
                    format_datetime(end_exclusive)
                ],
            )
            .await?;
        read_count(rows).await
    }

    /// `(created_at, updated_at)` of every `COMPLETED` task assigned to
    /// `user_id` and created in the window.
    ///
    /// The order of the returned pairs is unspecified.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a timestamp cannot be parsed.
    pub async fn find_completion_times_by_user_in_period(
        &self,
        user_id: i64,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<Vec<CompletionTime>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                "SELECT created_at, updated_at FROM tasks
                 WHERE assigned_to = ?1
                   AND status = ?2
                   AND created_at >= ?3
                   AND created_at < ?4",
                libsql::params![
                    user_id,
                    TaskStatus::Completed.as_str(),
                    format_datetime(start_inclusive),
                    format_datetime(end_exclusive)
                ],
            )
            .await?;

        let mut pairs = Vec::new();
        while let Some(row) = rows.next().await? {
            pairs.push(CompletionTime {
                created_at: parse_datetime(&row.get::<String>(0)?)?,
                updated_at: parse_datetime(&row.get::<String>(1)?)?,
            });
        }
        Ok(pairs)
    }

    // ---------- Older helpers (kept for compatibility) ----------

    /// All tasks ever assigned to `user_id`, with no window.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    #[deprecated(note = "use count_tasks_assigned_to_user_in_period")]
    pub async fn count_by_assigned_user_id(&self, user_id: i64) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query("SELECT COUNT(*) FROM tasks WHERE assigned_to = ?1", [user_id])
            .await?;
        read_count(rows).await
    }

    /// Tasks assigned to `user_id` created in the **closed** interval
    /// `[start, end]`. A task created exactly at `end` is counted here but not
    /// by [`FacultyDb::count_tasks_assigned_to_user_in_period`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    #[deprecated(note = "closed interval; use count_tasks_assigned_to_user_in_period")]
    pub async fn count_by_user_in_period(
        &self,
        user_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM tasks WHERE assigned_to = ?1 AND created_at BETWEEN ?2 AND ?3",
                libsql::params![user_id, format_datetime(start), format_datetime(end)],
            )
            .await?;
        read_count(rows).await
    }

    /// Tasks assigned to `user_id` with `status`, with no window.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    #[deprecated(note = "use count_tasks_by_user_and_status_in_period")]
    pub async fn count_by_user_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<u64, DatabaseError> {
        let rows = self
            .conn()
            .query(
                "SELECT COUNT(*) FROM tasks WHERE assigned_to = ?1 AND status = ?2",
                libsql::params![user_id, status.as_str()],
            )
            .await?;
        read_count(rows).await
    }

    /// Half-open duplicate of
    /// [`FacultyDb::count_tasks_by_user_and_status_in_period`].
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    #[deprecated(note = "use count_tasks_by_user_and_status_in_period")]
    pub async fn count_by_user_status_and_period(
        &self,
        user_id: i64,
        status: TaskStatus,
        start_inclusive: DateTime<Utc>,
        end_exclusive: DateTime<Utc>,
    ) -> Result<u64, DatabaseError> {
        self.count_tasks_by_user_and_status_in_period(
            user_id,
            status,
            start_inclusive,
            end_exclusive,
        )
        .await
    }
}

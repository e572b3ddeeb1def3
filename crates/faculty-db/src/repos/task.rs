//! Task repository: creation, status updates, and the plain finders.
//!
//! The aggregate analytics queries live in `task_analytics`.

use chrono::{DateTime, Utc};

use faculty_core::dto::TaskCreateInput;
use faculty_core::entities::Task;
use faculty_core::enums::TaskStatus;

use crate::FacultyDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime, parse_enum, parse_links};

pub(crate) const SELECT_COLS: &str = "id, title, description, assigned_to, status, priority, links, due_at, created_at, updated_at";

pub(crate) fn row_to_task(row: &libsql::Row) -> Result<Task, DatabaseError> {
    let priority = row.get::<i64>(5)?;
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: get_opt_string(row, 2)?,
        assigned_to: row.get(3)?,
        status: parse_enum(&row.get::<String>(4)?)?,
        priority: i32::try_from(priority)
            .map_err(|e| DatabaseError::Query(format!("Invalid priority {priority}: {e}")))?,
        links: parse_links(&row.get::<String>(6)?)?,
        due_at: parse_datetime(&row.get::<String>(7)?)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
        updated_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

async fn collect_tasks(mut rows: libsql::Rows) -> Result<Vec<Task>, DatabaseError> {
    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(row_to_task(&row)?);
    }
    Ok(tasks)
}

impl FacultyDb {
    /// Validate `input` and insert it as a `PENDING` task created now.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` with every violated constraint if
    /// the input is invalid, or `DatabaseError::LibSql` if the assignee does
    /// not exist.
    pub async fn create_task(&self, input: &TaskCreateInput) -> Result<Task, DatabaseError> {
        self.create_task_at(input, Utc::now()).await
    }

    /// Same as [`FacultyDb::create_task`] with an explicit creation instant,
    /// for imports and tests. `updated_at` starts equal to `created_at`.
    ///
    /// # Errors
    ///
    /// See [`FacultyDb::create_task`].
    pub async fn create_task_at(
        &self,
        input: &TaskCreateInput,
        created_at: DateTime<Utc>,
    ) -> Result<Task, DatabaseError> {
        let report = input.validate();
        if !report.is_valid() {
            tracing::warn!(%report, "rejected task creation input");
            return Err(DatabaseError::Validation(report));
        }

        let links =
            serde_json::to_string(&input.links).map_err(|e| DatabaseError::Other(e.into()))?;
        let created_at = format_datetime(created_at);

        let mut rows = self
            .conn()
            .query(
                &format!(
                    "INSERT INTO tasks (title, description, assigned_to, status, priority, links, due_at, created_at, updated_at)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![
                    input.title.as_str(),
                    input.description.as_deref(),
                    input.assigned_to_user_id,
                    TaskStatus::Pending.as_str(),
                    i64::from(input.effective_priority()),
                    links,
                    format_datetime(input.due_at),
                    created_at.as_str(),
                    created_at.as_str()
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let task = row_to_task(&row)?;

        tracing::debug!(task_id = task.id, assigned_to = task.assigned_to, "created task");
        Ok(task)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no task has this id.
    pub async fn get_task(&self, id: i64) -> Result<Task, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM tasks WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_task(&row)
    }

    /// Set `status` and stamp `updated_at` with the current time.
    ///
    /// # Errors
    ///
    /// See [`FacultyDb::update_task_status_at`].
    pub async fn update_task_status(
        &self,
        id: i64,
        status: TaskStatus,
    ) -> Result<Task, DatabaseError> {
        self.update_task_status_at(id, status, Utc::now()).await
    }

    /// Set `status` and stamp `updated_at` with `at`.
    ///
    /// For a move to `COMPLETED`, `at` becomes the completion instant the
    /// analytics read back.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the task does not exist, or
    /// `DatabaseError::InvalidState` if `at` precedes the task's `created_at`.
    pub async fn update_task_status_at(
        &self,
        id: i64,
        status: TaskStatus,
        at: DateTime<Utc>,
    ) -> Result<Task, DatabaseError> {
        let current = self.get_task(id).await?;
        if at < current.created_at {
            return Err(DatabaseError::InvalidState(format!(
                "Cannot stamp task {id} updated at {at}: created at {}",
                current.created_at
            )));
        }

        let mut rows = self
            .conn()
            .query(
                &format!(
                    "UPDATE tasks SET status = ?1, updated_at = ?2 WHERE id = ?3 RETURNING {SELECT_COLS}"
                ),
                libsql::params![status.as_str(), format_datetime(at), id],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let updated = row_to_task(&row)?;

        tracing::debug!(task_id = id, from = %current.status, to = %status, "task status updated");
        Ok(updated)
    }

    /// All tasks assigned to `user_id`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_assigned_to(&self, user_id: i64) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE assigned_to = ?1 ORDER BY created_at, id"
                ),
                [user_id],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Tasks assigned to `user_id` with exactly `status`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_assigned_to_and_status(
        &self,
        user_id: i64,
        status: TaskStatus,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE assigned_to = ?1 AND status = ?2 ORDER BY created_at, id"
                ),
                libsql::params![user_id, status.as_str()],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Tasks due strictly before `cutoff` whose status is not `excluded_status`.
    /// Feeds reminder and escalation sweeps.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_due_at_before_and_status_not(
        &self,
        cutoff: DateTime<Utc>,
        excluded_status: TaskStatus,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE due_at < ?1 AND status <> ?2 ORDER BY due_at, id"
                ),
                libsql::params![format_datetime(cutoff), excluded_status.as_str()],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_status(&self, status: TaskStatus) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM tasks WHERE status = ?1 ORDER BY created_at, id"),
                [status.as_str()],
            )
            .await?;
        collect_tasks(rows).await
    }

    /// Tasks created within `[start, end]`, **inclusive on both ends**
    /// (SQL `BETWEEN`).
    ///
    /// Callers working with a half-open window must drop rows created exactly
    /// at `end` themselves.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_by_created_at_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Task>, DatabaseError> {
        let rows = self
            .conn()
            .query(
                &format!(
                    "SELECT {SELECT_COLS} FROM tasks WHERE created_at BETWEEN ?1 AND ?2 ORDER BY created_at, id"
                ),
                libsql::params![format_datetime(start), format_datetime(end)],
            )
            .await?;
        collect_tasks(rows).await
    }
}

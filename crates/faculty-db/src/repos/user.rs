//! User repository.
//!
//! Users are referenced by tasks; this repo only creates and fetches them.

use chrono::Utc;

use faculty_core::entities::User;

use crate::FacultyDb;
use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, parse_datetime};

const SELECT_COLS: &str = "id, name, email, department, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        department: get_opt_string(row, 3)?,
        created_at: parse_datetime(&row.get::<String>(4)?)?,
    })
}

impl FacultyDb {
    /// Insert a user and return it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::LibSql` on constraint failures (duplicate email).
    pub async fn create_user(
        &self,
        name: &str,
        email: &str,
        department: Option<&str>,
    ) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn()
            .query(
                &format!(
                    "INSERT INTO users (name, email, department, created_at)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {SELECT_COLS}"
                ),
                libsql::params![name, email, department, format_datetime(Utc::now())],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let user = row_to_user(&row)?;
        tracing::debug!(user_id = user.id, "created user");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this id.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// All users, ordered by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let mut rows = self
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM users ORDER BY id"), ())
            .await?;

        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }
}

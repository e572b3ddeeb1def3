//! # faculty-db
//!
//! libSQL database operations for the faculty task store.
//!
//! Holds the `users` and `tasks` tables and answers the analytics questions
//! asked about them: per-user counts over a creation-time window, status
//! counts, overdue counts, and completion-time pairs. Every query is a single
//! parameterised SQL statement issued from a named method on [`FacultyDb`].
//!
//! Construct one `FacultyDb` at process start and pass it by reference.

pub mod analytics;
pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
mod test_support;

use error::DatabaseError;
use faculty_config::DatabaseConfig;
use libsql::Builder;

/// Central database handle for all task-store operations.
///
/// Wraps a libSQL database and connection. Repository methods are added in
/// `repos/*` via `impl FacultyDb` blocks.
pub struct FacultyDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl FacultyDb {
    /// Open a local-only database at the given path. Use `":memory:"` for tests.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::from_database(db).await
    }

    /// Open a remote libSQL database over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection cannot be established or
    /// migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::from_database(db).await
    }

    /// Open whichever database the configuration points at: remote when
    /// `url` and `auth_token` are both set, otherwise the local `path`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if opening or migrating fails.
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::debug!(url = %config.url, "opening remote database");
            Self::open_remote(&config.url, &config.auth_token).await
        } else {
            tracing::debug!(path = %config.path, "opening local database");
            Self::open_local(&config.path).await
        }
    }

    async fn from_database(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let faculty_db = Self { db, conn };
        faculty_db.run_migrations().await?;
        Ok(faculty_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }
}

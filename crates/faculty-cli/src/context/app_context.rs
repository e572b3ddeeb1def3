use anyhow::Context;
use faculty_config::FacultyConfig;
use faculty_db::FacultyDb;

/// Shared resources opened once at startup and lent to every command.
pub struct AppContext {
    pub db: FacultyDb,
    pub config: FacultyConfig,
}

impl AppContext {
    pub async fn init(config: FacultyConfig) -> anyhow::Result<Self> {
        let db = FacultyDb::open(&config.database).await.with_context(|| {
            if config.database.is_remote() {
                format!("failed to open database at {}", config.database.url)
            } else {
                format!("failed to open database file {}", config.database.path)
            }
        })?;
        Ok(Self { db, config })
    }

    #[cfg(test)]
    pub async fn in_memory() -> Self {
        Self {
            db: FacultyDb::open_local(":memory:").await.expect("in-memory db"),
            config: FacultyConfig::default(),
        }
    }
}

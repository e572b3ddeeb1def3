//! Database location: a local libSQL file, or a remote libSQL server.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "faculty.db".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file, used unless both `url` and `auth_token` are set.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://faculty.example.turso.io`).
    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// True when a remote server should be used instead of `path`.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_local_file() {
        let config = DatabaseConfig::default();
        assert_eq!(config.path, "faculty.db");
        assert!(!config.is_remote());
    }

    #[test]
    fn remote_needs_url_and_token() {
        let mut config = DatabaseConfig {
            url: "libsql://faculty.example.turso.io".into(),
            ..Default::default()
        };
        assert!(!config.is_remote());

        config.auth_token = "token123".into();
        assert!(config.is_remote());
    }
}

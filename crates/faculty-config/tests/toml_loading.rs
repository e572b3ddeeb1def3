//! Integration tests for TOML configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use faculty_config::FacultyConfig;
use pretty_assertions::assert_eq;

#[test]
fn loads_all_sections_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/faculty/tasks.db"
url = "libsql://faculty.example.turso.io"
auth_token = "toml-token"

[analytics]
default_window_days = 90

[logging]
filter = "faculty_db=debug"
"#,
        )?;

        let config: FacultyConfig = Figment::from(Serialized::defaults(FacultyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/faculty/tasks.db");
        assert_eq!(config.database.url, "libsql://faculty.example.turso.io");
        assert_eq!(config.database.auth_token, "toml-token");
        assert!(config.database.is_remote());
        assert_eq!(config.analytics.default_window_days, 90);
        assert_eq!(config.logging.filter, "faculty_db=debug");
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[analytics]
default_window_days = 7
"#,
        )?;

        let config: FacultyConfig = Figment::from(Serialized::defaults(FacultyConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.analytics.default_window_days, 7);
        assert_eq!(config.database.path, "faculty.db");
        assert_eq!(config.logging.filter, "warn");
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("FACULTY_DATABASE__PATH", "from-env.db");

        let config: FacultyConfig = Figment::from(Serialized::defaults(FacultyConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("FACULTY_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faculty")?;
        jail.create_file(
            ".faculty/config.toml",
            r#"
[database]
path = "project.db"
"#,
        )?;

        let config = FacultyConfig::load().expect("config loads");
        assert_eq!(config.database.path, "project.db");
        Ok(())
    });
}

#[test]
fn load_rejects_zero_window_from_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faculty")?;
        jail.create_file(
            ".faculty/config.toml",
            r#"
[analytics]
default_window_days = 0
"#,
        )?;

        let err = FacultyConfig::load().unwrap_err();
        assert!(err.to_string().contains("default_window_days"));
        Ok(())
    });
}

#[test]
fn malformed_toml_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_dir(".faculty")?;
        jail.create_file(".faculty/config.toml", "[database\npath = ")?;

        let err = FacultyConfig::load().unwrap_err();
        assert!(matches!(err, faculty_config::ConfigError::Figment(_)));
        Ok(())
    });
}

use faculty_config::FacultyConfig;

use crate::cli::GlobalFlags;

/// Load layered config (with `.env`) and apply command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<FacultyConfig> {
    let config = FacultyConfig::load_with_dotenv()?;
    Ok(apply_overrides(config, flags))
}

/// `--database` always means a local file, so it also switches off any
/// configured remote.
fn apply_overrides(mut config: FacultyConfig, flags: &GlobalFlags) -> FacultyConfig {
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
        config.database.url.clear();
        config.database.auth_token.clear();
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn flags(database: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            database: database.map(String::from),
        }
    }

    #[test]
    fn database_flag_forces_local_path() {
        let mut config = FacultyConfig::default();
        config.database.url = "libsql://faculty.example.turso.io".into();
        config.database.auth_token = "token".into();

        let config = apply_overrides(config, &flags(Some("/tmp/override.db")));
        assert_eq!(config.database.path, "/tmp/override.db");
        assert!(!config.database.is_remote());
    }

    #[test]
    fn no_flag_keeps_config() {
        let config = apply_overrides(FacultyConfig::default(), &flags(None));
        assert_eq!(config.database.path, "faculty.db");
    }
}

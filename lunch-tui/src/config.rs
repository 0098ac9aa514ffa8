use std::path::PathBuf;

/// Runtime configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | LUNCH_DB_PATH | tui.db | Database file |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_DIR | unset | Also write daily log files here (directory must exist) |
///
/// A `.env` file in the working directory is loaded first.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            db_path: std::env::var("LUNCH_DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("tui.db")),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
        }
    }

    /// Use a different database file, keeping the rest
    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Self {
        self.db_path = db_path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_db_path() {
        let config = Config::from_env().with_db_path("/tmp/lunch.db");
        assert_eq!(config.db_path, PathBuf::from("/tmp/lunch.db"));
        assert!(!config.log_level.is_empty());
    }
}

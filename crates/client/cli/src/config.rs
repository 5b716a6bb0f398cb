//! CLI configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Default data directory, relative to the working directory.
pub const DEFAULT_DATA_DIR: &str = "demos/data";

#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub log_to_file: bool,
    pub log_dir: Option<PathBuf>,
    pub session_id: Option<String>,
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ENCOUNTER_DATA_DIR` - Data directory when `--data` is not given
    /// - `ENCOUNTER_LOG_FILE` - Also write logs to a file (default: false)
    /// - `ENCOUNTER_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `ENCOUNTER_SESSION_ID` - Log session name (default: auto-generated)
    pub fn from_env() -> Self {
        let mut config = Self {
            data_dir: env::var("ENCOUNTER_DATA_DIR").ok().map(PathBuf::from),
            log_dir: env::var("ENCOUNTER_LOG_DIR").ok().map(PathBuf::from),
            session_id: env::var("ENCOUNTER_SESSION_ID").ok(),
            ..Self::default()
        };

        if let Some(enable) = read_env::<bool>("ENCOUNTER_LOG_FILE") {
            config.log_to_file = enable;
        } else if env::var("ENCOUNTER_LOG_FILE").is_ok() {
            // A bare variable counts as "true".
            config.log_to_file = true;
        }

        config
    }

    /// Picks the data directory: explicit argument, then environment, then default.
    pub fn resolve_data_dir(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Log directory following platform conventions unless overridden.
    pub fn resolve_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(|| {
            directories::ProjectDirs::from("", "", "encounter-cli")
                .map(|dirs| dirs.cache_dir().join("logs"))
                .unwrap_or_else(|| PathBuf::from("/tmp/encounter-cli/logs"))
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

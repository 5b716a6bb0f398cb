//! Configuration loaders.

use std::path::Path;

use game_core::GameConfig;
use game_plugins::PluginConfig;
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// Loader for host configuration and plugin parameters from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load host configuration from a TOML file.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// Load plugin parameters from a TOML file.
    pub fn load_plugins(path: &Path) -> LoadResult<PluginConfig> {
        let content = read_file(path)?;
        let config: PluginConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse plugin TOML: {}", e))?;

        Ok(config)
    }

    /// Like [`Self::load`], falling back to defaults when the file is absent.
    pub fn load_or_default(path: &Path) -> LoadResult<GameConfig> {
        if !path.exists() {
            debug!(target: "content::config", path = %path.display(), "no host config, using defaults");
            return Ok(GameConfig::default());
        }
        Self::load(path)
    }

    /// Like [`Self::load_plugins`], falling back to defaults when the file is absent.
    pub fn load_plugins_or_default(path: &Path) -> LoadResult<PluginConfig> {
        if !path.exists() {
            debug!(target: "content::config", path = %path.display(), "no plugin config, using defaults");
            return Ok(PluginConfig::default());
        }
        Self::load_plugins(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plugin_parameters_accept_numbers_and_strings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[action_cancel]\nmax_ignore_id = \"5\"").unwrap();
        let config = ConfigLoader::load_plugins(file.path()).unwrap();
        assert_eq!(config.action_cancel.max_ignore_id, 5);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[action_cancel]\nmax_ignore_id = 0").unwrap();
        let config = ConfigLoader::load_plugins(file.path()).unwrap();
        assert_eq!(config.action_cancel.max_ignore_id, 1);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let plugins = ConfigLoader::load_plugins_or_default(&dir.path().join("plugins.toml")).unwrap();
        assert_eq!(plugins.action_cancel.max_ignore_id, 2);

        let config = ConfigLoader::load_or_default(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn host_config_overrides_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_level = 50\n[exp_curve]\nbase = 10").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.max_level, 50);
        assert_eq!(config.exp_curve.base, 10);
        assert_eq!(config.base_encounter_progress, 1.0);
    }
}

//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use game_core::{GameConfig, MapData, PartyState, SkillData, SystemData};
use game_plugins::PluginConfig;

use crate::loaders::{ConfigLoader, LoadResult, MapLoader, PartyLoader, SkillLoader, SystemLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml    (optional)
/// ├── plugins.toml   (optional)
/// ├── system.ron
/// ├── skills.ron
/// ├── party.ron
/// └── maps.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Load host configuration from `config.toml`, or defaults.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load_or_default(&self.data_dir.join("config.toml"))
    }

    /// Load plugin parameters from `plugins.toml`, or defaults.
    pub fn load_plugin_config(&self) -> LoadResult<PluginConfig> {
        ConfigLoader::load_plugins_or_default(&self.data_dir.join("plugins.toml"))
    }

    /// Load the system database from `system.ron`.
    pub fn load_system(&self) -> LoadResult<SystemData> {
        SystemLoader::load(&self.data_dir.join("system.ron"))
    }

    /// Load the skill database from `skills.ron`.
    pub fn load_skills(&self) -> LoadResult<Vec<SkillData>> {
        SkillLoader::load(&self.data_dir.join("skills.ron"))
    }

    /// Load the map catalog from `maps.ron`.
    pub fn load_maps(&self) -> LoadResult<Vec<MapData>> {
        MapLoader::load(&self.data_dir.join("maps.ron"))
    }

    /// Load the starting party from `party.ron`, placing experience on the configured curve.
    pub fn load_party(&self, config: &GameConfig) -> LoadResult<PartyState> {
        let catalog = PartyLoader::load(&self.data_dir.join("party.ron"))?;
        Ok(catalog.into_party(&config.exp_curve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActorId, SkillId, StateId};

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[test]
    fn loads_a_complete_data_directory() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "system.ron", r#"(switches: ["", "A", "B", "C"])"#);
        write(
            dir.path(),
            "skills.ron",
            r#"(skills: [(id: 1, name: "Attack"), (id: 10, name: "Rage", note: "<requiredStates:4>")])"#,
        );
        write(
            dir.path(),
            "party.ron",
            r#"(members: [(id: 1, name: "Reid", level: 9, states: [4]), (id: 2, name: "Gale", level: 12)])"#,
        );
        write(
            dir.path(),
            "maps.ron",
            r#"(maps: [(id: 1, name: "Forest", note: "<Encounter Rates L10=0.0 L8=0.6 S3=0.3>")])"#,
        );

        let factory = ContentFactory::new(dir.path());
        let config = factory.load_config().unwrap();
        let party = factory.load_party(&config).unwrap();

        assert_eq!(factory.load_system().unwrap().switches.len(), 4);
        assert_eq!(factory.load_skills().unwrap()[1].id, SkillId(10));
        assert_eq!(factory.load_maps().unwrap().len(), 1);
        assert_eq!(party.min_level(), Some(9));
        assert!(party.member(ActorId(1)).unwrap().is_state_affected(StateId(4)));
        assert_eq!(factory.load_plugin_config().unwrap(), PluginConfig::default());
    }
}

//! System database loader.

use std::path::Path;

use game_core::SystemData;

use crate::loaders::{LoadResult, read_file};

/// Loader for the system database (`system.ron`).
pub struct SystemLoader;

impl SystemLoader {
    /// Load the system database.
    ///
    /// The switch list is stored with its placeholder slot 0, matching the
    /// in-game table; a missing placeholder is inserted.
    pub fn load(path: &Path) -> LoadResult<SystemData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SystemData> {
        let mut system: SystemData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse system RON: {}", e))?;

        if system.switches.first().is_none_or(|first| !first.is_empty()) {
            system.switches.insert(0, String::new());
        }

        Ok(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::SystemOracle;

    #[test]
    fn switch_table_keeps_slot_zero() {
        let system = SystemLoader::parse(r#"(switches: ["", "Bridge Open", "Night"])"#).unwrap();
        assert_eq!(system.switch_table_len(), 3);
        assert_eq!(system.switch_name(2), Some("Night"));

        let system = SystemLoader::parse(r#"(switches: ["Bridge Open", "Night"])"#).unwrap();
        assert_eq!(system.switch_table_len(), 3);
        assert_eq!(system.switch_name(1), Some("Bridge Open"));
    }
}

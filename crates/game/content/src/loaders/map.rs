//! Map catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::MapData;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Map catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapCatalog {
    pub maps: Vec<MapData>,
}

/// Loader for the map catalog.
pub struct MapLoader;

impl MapLoader {
    /// Load every map from a RON catalog.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or parsed, or if a map id is not
    /// positive or appears twice.
    pub fn load(path: &Path) -> LoadResult<Vec<MapData>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<MapData>> {
        let catalog: MapCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for map in &catalog.maps {
            if !map.id.is_valid() {
                anyhow::bail!("map ids must be positive, found {}", map.id);
            }
            if !seen.insert(map.id) {
                anyhow::bail!("duplicate {} in map catalog", map.id);
            }
        }

        Ok(catalog.maps)
    }
}

//! Map catalog served through [`game_core::MapOracle`].
use std::collections::HashMap;

use game_core::{MapData, MapId, MapOracle};

/// MapOracle implementation over the loaded map catalog.
///
/// Notes are immutable once loaded; the encounter plugin relies on that when
/// it caches parsed rules per map.
pub struct MapOracleImpl {
    maps: HashMap<MapId, MapData>,
}

impl MapOracleImpl {
    pub fn new(maps: impl IntoIterator<Item = MapData>) -> Self {
        Self {
            maps: maps.into_iter().map(|map| (map.id, map)).collect(),
        }
    }

    pub fn get(&self, map: MapId) -> Option<&MapData> {
        self.maps.get(&map)
    }

    pub fn len(&self) -> usize {
        self.maps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }
}

impl MapOracle for MapOracleImpl {
    fn note(&self, map: MapId) -> Option<&str> {
        self.maps.get(&map).map(|data| data.note.as_str())
    }

    fn map_ids(&self) -> Vec<MapId> {
        let mut ids: Vec<_> = self.maps.keys().copied().collect();
        ids.sort();
        ids
    }
}

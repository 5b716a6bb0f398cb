use crate::state::MapId;

/// Static map data. Only the free-text note matters to the plugins; maps are
/// immutable once game data is loaded.
pub trait MapOracle: Send + Sync {
    /// Returns the note text of `map`, or `None` when no such map was loaded.
    fn note(&self, map: MapId) -> Option<&str>;

    /// Ids of every loaded map.
    fn map_ids(&self) -> Vec<MapId> {
        Vec::new()
    }
}

/// Serialized descriptor of a single map.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapData {
    pub id: MapId,
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub note: String,
}

impl MapData {
    pub fn new(id: MapId, name: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            note: note.into(),
        }
    }
}

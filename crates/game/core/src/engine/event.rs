use crate::state::{ActorId, MapId, SwitchId};

/// Categories of static game data whose load completion is signalled once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum DataCategory {
    System,
    Maps,
    Skills,
}

/// A mutation the host has just applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HostEvent {
    /// A data category finished loading.
    DataLoaded { category: DataCategory },

    /// The player entered (or reloaded) a map.
    MapSetup { map: MapId },

    /// A switch was written, whether or not the value changed.
    SwitchChanged { switch: SwitchId, value: bool },

    /// An actor's experience was changed; levels are reported before and after.
    ExpChanged {
        actor: ActorId,
        level_before: u32,
        level_after: u32,
    },
}

impl HostEvent {
    /// Short label for logging.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DataLoaded { .. } => "data_loaded",
            Self::MapSetup { .. } => "map_setup",
            Self::SwitchChanged { .. } => "switch_changed",
            Self::ExpChanged { .. } => "exp_changed",
        }
    }

    /// True for an experience change that moved the level.
    pub const fn is_level_change(&self) -> bool {
        matches!(
            self,
            Self::ExpChanged {
                level_before,
                level_after,
                ..
            } if *level_before != *level_after
        )
    }
}

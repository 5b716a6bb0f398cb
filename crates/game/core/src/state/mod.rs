//! Dynamic host state the plugins read from.
//!
//! [`GameState`] is the single mutable aggregate: current map, switch table and
//! party. All writes go through [`crate::engine::GameEngine`], which reports each
//! mutation as a [`crate::engine::HostEvent`] so extensions can react to it.
mod ids;
mod map;
mod party;
mod switches;

pub use ids::{ActorId, MapId, SkillId, StateId, SwitchId};
pub use map::MapState;
pub use party::{ActorState, PartyState};
pub use switches::Switches;

/// Mutable world state owned by the host.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub map: MapState,
    pub switches: Switches,
    pub party: PartyState,

    /// Host-level encounter gate (system setting, vehicles, debug-through).
    pub encounter_enabled: bool,
}

impl GameState {
    /// Creates a state with a switch table of `switch_table_len` slots (slot 0 unused).
    pub fn new(switch_table_len: usize, party: PartyState) -> Self {
        Self {
            map: MapState::default(),
            switches: Switches::new(switch_table_len),
            party,
            encounter_enabled: true,
        }
    }

    /// Id of the map the player currently stands on.
    pub fn map_id(&self) -> MapId {
        self.map.map_id
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(0, PartyState::default())
    }
}

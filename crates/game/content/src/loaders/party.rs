//! Starting party loader.

use std::path::Path;

use game_core::{ActorId, ActorState, ExpCurve, PartyState, StateId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Starting stats of one party member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActorSpec {
    pub id: ActorId,
    pub name: String,
    pub level: u32,
    #[serde(default)]
    pub states: Vec<StateId>,
}

/// Party file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyCatalog {
    pub members: Vec<ActorSpec>,
    #[serde(default)]
    pub encounter_half: bool,
}

impl PartyCatalog {
    /// Builds the party with each member's experience placed on `curve`.
    pub fn into_party(self, curve: &ExpCurve) -> PartyState {
        let members = self
            .members
            .into_iter()
            .map(|spec| {
                spec.states.into_iter().fold(
                    ActorState::at_level(spec.id, spec.name, spec.level, curve),
                    ActorState::with_state,
                )
            })
            .collect();

        PartyState {
            members,
            encounter_half: self.encounter_half,
        }
    }
}

/// Loader for the starting party (`party.ron`).
pub struct PartyLoader;

impl PartyLoader {
    pub fn load(path: &Path) -> LoadResult<PartyCatalog> {
        let content = read_file(path)?;
        let catalog: PartyCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse party RON: {}", e))?;

        Ok(catalog)
    }
}

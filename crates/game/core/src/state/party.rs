use std::collections::BTreeSet;

use crate::config::ExpCurve;

use super::{ActorId, StateId};

/// A party member as seen by the plugins: level, experience and status effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: ActorId,
    pub name: String,
    pub level: u32,
    pub exp: u64,
    pub states: BTreeSet<StateId>,
}

impl ActorState {
    /// Creates an actor standing exactly at `level` on the given curve.
    pub fn at_level(id: ActorId, name: impl Into<String>, level: u32, curve: &ExpCurve) -> Self {
        let level = level.max(1);
        Self {
            id,
            name: name.into(),
            level,
            exp: curve.exp_for_level(level),
            states: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn with_state(mut self, state: StateId) -> Self {
        self.states.insert(state);
        self
    }

    pub fn is_state_affected(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    pub fn add_state(&mut self, state: StateId) {
        self.states.insert(state);
    }

    pub fn remove_state(&mut self, state: StateId) {
        self.states.remove(&state);
    }
}

/// Active battle/exploration party.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyState {
    pub members: Vec<ActorState>,

    /// "Encounter half" party ability.
    #[cfg_attr(feature = "serde", serde(default))]
    pub encounter_half: bool,
}

impl PartyState {
    pub fn new(members: Vec<ActorState>) -> Self {
        Self {
            members,
            encounter_half: false,
        }
    }

    pub fn members(&self) -> &[ActorState] {
        &self.members
    }

    pub fn member(&self, id: ActorId) -> Option<&ActorState> {
        self.members.iter().find(|actor| actor.id == id)
    }

    pub fn member_mut(&mut self, id: ActorId) -> Option<&mut ActorState> {
        self.members.iter_mut().find(|actor| actor.id == id)
    }

    /// Lowest level among current members, `None` for an empty party.
    pub fn min_level(&self) -> Option<u32> {
        self.members.iter().map(|actor| actor.level).min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_level_tracks_weakest_member() {
        let curve = ExpCurve::default();
        let party = PartyState::new(vec![
            ActorState::at_level(ActorId(1), "Reid", 12, &curve),
            ActorState::at_level(ActorId(2), "Priscilla", 9, &curve),
            ActorState::at_level(ActorId(3), "Gale", 15, &curve),
        ]);

        assert_eq!(party.min_level(), Some(9));
        assert_eq!(PartyState::default().min_level(), None);
    }
}

//! Host mutators and the extension points that observe them.
//!
//! [`GameEngine`] applies the base game mechanic for each entry point (map
//! setup, switch write, experience change) and reports what happened as a
//! [`HostEvent`]. The engine itself never consults extensions; the runtime
//! forwards each event to the registered hooks after the mutation completed,
//! so an extension can only layer side effects on top of the unmodified result.
mod errors;
mod event;
mod hook;

pub use errors::EngineError;
pub use event::{DataCategory, HostEvent};
pub use hook::{
    ActionFilter, CommandWindowPolicy, EncounterModifier, HookContext, HookCriticality, HookError,
    PostMutationHook,
};

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::state::{ActorId, GameState, MapId, StateId, SwitchId};

/// Applies host mutations to a [`GameState`].
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    config: &'a GameConfig,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Loads `map` as the current map.
    pub fn setup_map(&mut self, map: MapId) -> HostEvent {
        self.state.map.map_id = map;
        debug!(target: "game_core::engine", %map, "map setup");
        HostEvent::MapSetup { map }
    }

    /// Writes a switch. Undeclared ids leave the table untouched but the write
    /// is still reported.
    pub fn set_switch(&mut self, switch: SwitchId, value: bool) -> HostEvent {
        if !self.state.switches.set_value(switch, value) {
            debug!(target: "game_core::engine", %switch, "ignoring write to undeclared switch");
        }
        HostEvent::SwitchChanged { switch, value }
    }

    /// Sets an actor's total experience and re-derives its level.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ActorNotFound` if the actor is not in the party.
    pub fn change_exp(&mut self, actor: ActorId, exp: i64, show: bool) -> Result<HostEvent, EngineError> {
        let max_level = self.config.max_level;
        let curve = self.config.exp_curve;
        let member = self
            .state
            .party
            .member_mut(actor)
            .ok_or(EngineError::ActorNotFound(actor))?;

        let level_before = member.level;
        member.exp = exp.max(0) as u64;

        while member.level < max_level && member.exp >= curve.exp_for_level(member.level + 1) {
            member.level += 1;
        }
        while member.level > 1 && member.exp < curve.exp_for_level(member.level) {
            member.level -= 1;
        }

        let level_after = member.level;
        if show && level_after > level_before {
            info!(
                target: "game_core::engine",
                %actor,
                name = %member.name,
                level = level_after,
                "level up"
            );
        }

        Ok(HostEvent::ExpChanged {
            actor,
            level_before,
            level_after,
        })
    }

    /// Adds `amount` to the actor's current experience.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ActorNotFound` if the actor is not in the party.
    pub fn gain_exp(&mut self, actor: ActorId, amount: i64) -> Result<HostEvent, EngineError> {
        let current = self
            .state
            .party
            .member(actor)
            .ok_or(EngineError::ActorNotFound(actor))?
            .exp;
        let total = i64::try_from(current).unwrap_or(i64::MAX).saturating_add(amount);
        self.change_exp(actor, total, true)
    }

    /// Applies a status effect.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ActorNotFound` if the actor is not in the party.
    pub fn add_state(&mut self, actor: ActorId, state: StateId) -> Result<(), EngineError> {
        self.state
            .party
            .member_mut(actor)
            .ok_or(EngineError::ActorNotFound(actor))?
            .add_state(state);
        Ok(())
    }

    /// Removes a status effect.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::ActorNotFound` if the actor is not in the party.
    pub fn remove_state(&mut self, actor: ActorId, state: StateId) -> Result<(), EngineError> {
        self.state
            .party
            .member_mut(actor)
            .ok_or(EngineError::ActorNotFound(actor))?
            .remove_state(state);
        Ok(())
    }

    pub fn view(&self) -> EngineView<'_> {
        EngineView::new(&*self.state, self.config)
    }
}

/// Read-only host queries.
#[derive(Clone, Copy)]
pub struct EngineView<'a> {
    state: &'a GameState,
    config: &'a GameConfig,
}

impl<'a> EngineView<'a> {
    pub fn new(state: &'a GameState, config: &'a GameConfig) -> Self {
        Self { state, config }
    }

    /// Whether the host itself would allow a random encounter right now.
    pub fn base_can_encounter(&self) -> bool {
        self.state.encounter_enabled && !self.state.party.members.is_empty()
    }

    /// Encounter progress per step before extensions apply their multipliers.
    pub fn base_encounter_progress(&self) -> f64 {
        let mut value = self.config.base_encounter_progress;
        if self.state.party.encounter_half {
            value *= GameConfig::ENCOUNTER_HALF_RATE;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExpCurve;
    use crate::state::{ActorState, PartyState};

    fn state_with_actor(level: u32) -> (GameState, GameConfig) {
        let config = GameConfig::default();
        let actor = ActorState::at_level(ActorId(1), "Reid", level, &config.exp_curve);
        (GameState::new(6, PartyState::new(vec![actor])), config)
    }

    #[test]
    fn change_exp_levels_up_and_down() {
        let (mut state, config) = state_with_actor(1);
        let curve = ExpCurve::default();
        let mut engine = GameEngine::new(&mut state, &config);

        let event = engine
            .change_exp(ActorId(1), curve.exp_for_level(5) as i64, false)
            .unwrap();
        assert_eq!(
            event,
            HostEvent::ExpChanged {
                actor: ActorId(1),
                level_before: 1,
                level_after: 5
            }
        );

        let event = engine
            .change_exp(ActorId(1), curve.exp_for_level(3) as i64 - 1, false)
            .unwrap();
        assert_eq!(
            event,
            HostEvent::ExpChanged {
                actor: ActorId(1),
                level_before: 5,
                level_after: 2
            }
        );
    }

    #[test]
    fn change_exp_respects_max_level_and_clamps_negative() {
        let (mut state, _) = state_with_actor(1);
        let config = GameConfig::default().with_max_level(10);
        let mut engine = GameEngine::new(&mut state, &config);

        engine.change_exp(ActorId(1), i64::MAX, false).unwrap();
        assert_eq!(state.party.members[0].level, 10);

        let mut engine = GameEngine::new(&mut state, &config);
        engine.change_exp(ActorId(1), -50, false).unwrap();
        assert_eq!(state.party.members[0].exp, 0);
        assert_eq!(state.party.members[0].level, 1);
    }

    #[test]
    fn unknown_actor_is_rejected() {
        let (mut state, config) = state_with_actor(1);
        let mut engine = GameEngine::new(&mut state, &config);

        assert_eq!(
            engine.gain_exp(ActorId(9), 10),
            Err(EngineError::ActorNotFound(ActorId(9)))
        );
    }

    #[test]
    fn undeclared_switch_write_is_still_reported() {
        let (mut state, config) = state_with_actor(1);
        let mut engine = GameEngine::new(&mut state, &config);

        let event = engine.set_switch(SwitchId(40), true);
        assert_eq!(
            event,
            HostEvent::SwitchChanged {
                switch: SwitchId(40),
                value: true
            }
        );
        assert!(state.switches.active().next().is_none());
    }

    #[test]
    fn encounter_half_halves_base_progress() {
        let (mut state, config) = state_with_actor(1);
        state.party.encounter_half = true;
        let engine = GameEngine::new(&mut state, &config);

        assert_eq!(engine.view().base_encounter_progress(), 0.5);
        assert!(engine.view().base_can_encounter());
    }
}

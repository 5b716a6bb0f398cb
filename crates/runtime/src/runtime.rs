//! Runtime orchestrator and builder.
//!
//! [`Runtime`] owns the host state and its static data, and routes every host
//! entry point through the same sequence: run the base mechanic via
//! [`GameEngine`], then hand the resulting [`HostEvent`] to the
//! [`HookRegistry`]. Read-side extension points (action filters, encounter
//! modifiers, command-window policies) are folded over the host's own answer.

use std::sync::Arc;

use game_core::{
    ActionFilter, ActorId, BattleAction, CommandWindowPolicy, DataCategory, EncounterModifier,
    EngineView, GameConfig, GameEngine, GameState, HostEvent, MapId, PartyState, PostMutationHook, StateId,
    SwitchId, SystemOracle,
};
use game_plugins::{ActionCancel, EncounterRates, EncounterRatesHook, NoBattleCancel, PluginConfig};
use strum::IntoEnumIterator;
use tracing::{debug, info};

use crate::error::{Result, RuntimeError};
use crate::hooks::HookRegistry;
use crate::oracle::OracleManager;

/// Host runtime with its registered extensions.
pub struct Runtime {
    state: GameState,
    config: GameConfig,
    oracles: OracleManager,
    hooks: HookRegistry,
    action_filters: Vec<Arc<dyn ActionFilter>>,
    encounter_modifiers: Vec<Arc<dyn EncounterModifier>>,
    command_policies: Vec<Arc<dyn CommandWindowPolicy>>,
    encounter: Option<EncounterRatesHook>,
}

impl Runtime {
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn oracles(&self) -> &OracleManager {
        &self.oracles
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Handle to the encounter-rate plugin, if it was installed.
    pub fn encounter(&self) -> Option<&EncounterRatesHook> {
        self.encounter.as_ref()
    }

    /// Signals that a data category finished loading.
    pub fn notify_data_loaded(&mut self, category: DataCategory) -> Result<()> {
        self.dispatch(HostEvent::DataLoaded { category })
    }

    /// Signals every data category in load order.
    pub fn load_all_data(&mut self) -> Result<()> {
        for category in DataCategory::iter() {
            self.notify_data_loaded(category)?;
        }
        Ok(())
    }

    /// Enters (or reloads) `map`.
    pub fn setup_map(&mut self, map: MapId) -> Result<()> {
        let event = self.engine().setup_map(map);
        self.dispatch(event)
    }

    /// Writes a switch.
    pub fn set_switch(&mut self, switch: SwitchId, value: bool) -> Result<()> {
        let event = self.engine().set_switch(switch, value);
        self.dispatch(event)
    }

    /// Sets an actor's total experience.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Engine` if the actor is not in the party.
    pub fn change_exp(&mut self, actor: ActorId, exp: i64, show: bool) -> Result<()> {
        let event = self.engine().change_exp(actor, exp, show)?;
        self.dispatch(event)
    }

    /// Adds experience to an actor.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Engine` if the actor is not in the party.
    pub fn gain_exp(&mut self, actor: ActorId, amount: i64) -> Result<()> {
        let event = self.engine().gain_exp(actor, amount)?;
        self.dispatch(event)
    }

    /// Moves `actor` to exactly `level` on the experience curve.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Engine` if the actor is not in the party.
    pub fn set_level(&mut self, actor: ActorId, level: u32) -> Result<()> {
        let exp = self.config.exp_curve.exp_for_level(level.max(1));
        self.change_exp(actor, i64::try_from(exp).unwrap_or(i64::MAX), false)
    }

    /// Applies a status effect to a party member.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Engine` if the actor is not in the party.
    pub fn add_state(&mut self, actor: ActorId, state: StateId) -> Result<()> {
        self.engine().add_state(actor, state)?;
        Ok(())
    }

    /// Removes a status effect from a party member.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::Engine` if the actor is not in the party.
    pub fn remove_state(&mut self, actor: ActorId, state: StateId) -> Result<()> {
        self.engine().remove_state(actor, state)?;
        Ok(())
    }

    /// Passes the action a battler is about to perform through every action filter.
    pub fn current_action(&self, action: &mut dyn BattleAction) {
        for filter in &self.action_filters {
            filter.filter(&mut *action);
        }
    }

    /// Whether the actor command window lets the player cancel.
    pub fn is_cancel_enabled(&self) -> bool {
        self.command_policies
            .iter()
            .fold(true, |enabled, policy| policy.is_cancel_enabled(enabled))
    }

    /// Whether a random encounter may happen at all on the current step.
    pub fn can_encounter(&self) -> bool {
        let base = self.engine_view().base_can_encounter();
        self.encounter_modifiers
            .iter()
            .fold(base, |allowed, modifier| modifier.can_encounter(allowed))
    }

    /// Encounter progress gained per step after every modifier.
    pub fn encounter_progress_value(&self) -> f64 {
        let base = self.engine_view().base_encounter_progress();
        self.encounter_modifiers
            .iter()
            .fold(base, |value, modifier| modifier.encounter_progress_value(value))
    }

    fn engine(&mut self) -> GameEngine<'_> {
        GameEngine::new(&mut self.state, &self.config)
    }

    fn engine_view(&self) -> EngineView<'_> {
        EngineView::new(&self.state, &self.config)
    }

    fn dispatch(&mut self, event: HostEvent) -> Result<()> {
        let env = self.oracles.as_game_env();
        self.hooks.execute_hooks(&event, &self.state, env)
    }
}

/// Builder for [`Runtime`].
#[derive(Default)]
pub struct RuntimeBuilder {
    config: Option<GameConfig>,
    oracles: Option<OracleManager>,
    party: PartyState,
    hooks: Vec<Arc<dyn PostMutationHook>>,
    action_filters: Vec<Arc<dyn ActionFilter>>,
    encounter_modifiers: Vec<Arc<dyn EncounterModifier>>,
    command_policies: Vec<Arc<dyn CommandWindowPolicy>>,
    encounter: Option<EncounterRatesHook>,
}

impl RuntimeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn oracles(mut self, oracles: OracleManager) -> Self {
        self.oracles = Some(oracles);
        self
    }

    pub fn party(mut self, party: PartyState) -> Self {
        self.party = party;
        self
    }

    pub fn hook(mut self, hook: Arc<dyn PostMutationHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn action_filter(mut self, filter: Arc<dyn ActionFilter>) -> Self {
        self.action_filters.push(filter);
        self
    }

    pub fn encounter_modifier(mut self, modifier: Arc<dyn EncounterModifier>) -> Self {
        self.encounter_modifiers.push(modifier);
        self
    }

    pub fn command_policy(mut self, policy: Arc<dyn CommandWindowPolicy>) -> Self {
        self.command_policies.push(policy);
        self
    }

    /// Installs the encounter-rate, action-cancel and battle-menu plugins.
    pub fn with_plugins(self, config: &PluginConfig) -> Self {
        let encounter = EncounterRatesHook::new(EncounterRates::new());
        let action_cancel = Arc::new(ActionCancel::new(config.action_cancel));

        let mut builder = self
            .hook(Arc::new(encounter.clone()))
            .encounter_modifier(Arc::new(encounter.clone()))
            .hook(action_cancel.clone())
            .action_filter(action_cancel)
            .command_policy(Arc::new(NoBattleCancel));
        builder.encounter = Some(encounter);
        builder
    }

    /// Builds the runtime.
    ///
    /// # Errors
    ///
    /// Returns `RuntimeError::MissingOracles` if no oracles were provided.
    pub fn build(self) -> Result<Runtime> {
        let oracles = self.oracles.ok_or(RuntimeError::MissingOracles)?;
        let config = self.config.unwrap_or_default();
        let state = GameState::new(oracles.system().switch_table_len(), self.party);
        let hooks = HookRegistry::new(self.hooks);

        info!(
            target: "runtime",
            hooks = hooks.len(),
            action_filters = self.action_filters.len(),
            encounter_modifiers = self.encounter_modifiers.len(),
            command_policies = self.command_policies.len(),
            "runtime built"
        );
        for (name, priority) in hooks.hooks() {
            debug!(target: "runtime", hook = name, priority, "registered hook");
        }

        Ok(Runtime {
            state,
            config,
            oracles,
            hooks,
            action_filters: self.action_filters,
            encounter_modifiers: self.encounter_modifiers,
            command_policies: self.command_policies,
            encounter: self.encounter,
        })
    }
}

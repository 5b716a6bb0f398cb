//! Map-driven random encounter multiplier.
//!
//! Maps declare adjustments in their note (see [`tag`] for the syntax). The
//! [`EncounterRates`] context parses each map's note on first use, caches the
//! result in a [`RuleCache`], and recomputes the active multiplier whenever the
//! host reports a map setup, a switch write, or an experience change that moved
//! an actor's level.
//!
//! The active rate is derived state: it can always be rebuilt from the current
//! map id, switch values, party levels and the map's rule. Evaluation failures
//! never reach the host; they are logged and the rate falls back to `1.0`.
mod cache;
mod error;
mod hooks;
mod rule;
mod tag;

pub use cache::{MAX_CACHED_RULES, RuleCache};
pub use error::{EncounterError, TokenError};
pub use hooks::EncounterRatesHook;
pub use rule::{LevelModifier, MapEncounterRule};
pub use tag::{ParsedNote, parse_note};

use game_core::{GameError, GameEnv, GameState, HostEvent, MapId, OracleError};
use tracing::{debug, error};

/// Multiplier that leaves the host's encounter behaviour untouched.
pub const NEUTRAL_RATE: f64 = 1.0;

/// Rule cache plus the currently applicable multiplier.
#[derive(Clone, Debug)]
pub struct EncounterRates {
    cache: RuleCache,
    active_rate: f64,
    parses: u64,
}

impl Default for EncounterRates {
    fn default() -> Self {
        Self::new()
    }
}

impl EncounterRates {
    pub fn new() -> Self {
        Self {
            cache: RuleCache::new(),
            active_rate: NEUTRAL_RATE,
            parses: 0,
        }
    }

    /// The multiplier computed by the last refresh.
    pub fn active_rate(&self) -> f64 {
        self.active_rate
    }

    pub fn cache(&self) -> &RuleCache {
        &self.cache
    }

    /// Number of map notes parsed so far (cache misses).
    pub fn parse_count(&self) -> u64 {
        self.parses
    }

    /// `base` gated by the active rate: a zero multiplier disables encounters.
    pub fn can_encounter(&self, base: bool) -> bool {
        self.active_rate > 0.0 && base
    }

    /// `base` scaled by the active rate.
    pub fn encounter_progress_value(&self, base: f64) -> f64 {
        self.active_rate * base
    }

    /// Reacts to a host mutation. Returns true if the active rate was recomputed.
    pub fn handle(&mut self, event: &HostEvent, state: &GameState, env: &GameEnv<'_>) -> bool {
        match event {
            HostEvent::MapSetup { .. } | HostEvent::SwitchChanged { .. } => {
                self.refresh(state, env);
                true
            }
            HostEvent::ExpChanged {
                level_before,
                level_after,
                ..
            } => self.on_exp_changed(*level_before, *level_after, state, env),
            HostEvent::DataLoaded { .. } => false,
        }
    }

    /// Recomputes after an experience change, but only if the level moved.
    pub fn on_exp_changed(
        &mut self,
        level_before: u32,
        level_after: u32,
        state: &GameState,
        env: &GameEnv<'_>,
    ) -> bool {
        if level_before == level_after {
            return false;
        }
        self.refresh(state, env);
        true
    }

    /// Recomputes the active rate for the current map and stores it.
    pub fn refresh(&mut self, state: &GameState, env: &GameEnv<'_>) -> f64 {
        let map = state.map_id();
        self.active_rate = match self.evaluate(map, state, env) {
            Ok(rate) => rate,
            Err(err) => {
                error!(
                    target: "plugins::encounter",
                    %map,
                    code = err.error_code(),
                    error = %err,
                    "encounter rate evaluation failed, resetting to neutral"
                );
                NEUTRAL_RATE
            }
        };

        debug!(target: "plugins::encounter", %map, rate = self.active_rate, "active encounter rate");
        self.active_rate
    }

    /// Computes the multiplier for `map` without storing it.
    ///
    /// # Errors
    ///
    /// Returns `EncounterError::Oracle` if map or system data is unavailable, and
    /// `EncounterError::NonFiniteRate` if the combined modifiers overflow.
    pub fn evaluate(
        &mut self,
        map: MapId,
        state: &GameState,
        env: &GameEnv<'_>,
    ) -> Result<f64, EncounterError> {
        if !map.is_valid() || self.cache.is_no_rule(map) {
            return Ok(NEUTRAL_RATE);
        }

        let Some(rule) = self.rule(map, env)? else {
            return Ok(NEUTRAL_RATE);
        };

        let rate = rule.evaluate(&state.switches, state.party.min_level());
        if rate.is_finite() {
            Ok(rate)
        } else {
            Err(EncounterError::NonFiniteRate { map, rate })
        }
    }

    /// Returns the cached rule for `map`, parsing its note on a miss.
    ///
    /// `Ok(None)` means the map has no usable tag; it is marked so its note is
    /// never scanned again.
    ///
    /// # Errors
    ///
    /// Returns `EncounterError::Oracle` if map or system data is unavailable.
    pub fn rule(
        &mut self,
        map: MapId,
        env: &GameEnv<'_>,
    ) -> Result<Option<&MapEncounterRule>, EncounterError> {
        if self.cache.is_no_rule(map) {
            return Ok(None);
        }
        if self.cache.get(map).is_some() {
            return Ok(self.cache.get(map));
        }

        let note = env.maps()?.note(map).ok_or(OracleError::MapNotFound(map))?;
        let switch_table_len = env.system()?.switch_table_len();

        self.parses += 1;
        match parse_note(note, switch_table_len) {
            ParsedNote::Rule(rule) => {
                debug!(
                    target: "plugins::encounter",
                    %map,
                    switches = rule.switch_modifiers.len(),
                    levels = rule.level_modifiers.len(),
                    "parsed encounter rule"
                );
                Ok(Some(self.cache.insert(map, rule)))
            }
            ParsedNote::Empty { discarded } => {
                debug!(target: "plugins::encounter", %map, discarded, "encounter tag has no valid tokens");
                self.cache.mark_no_rule(map);
                Ok(None)
            }
            ParsedNote::NoTag => {
                self.cache.mark_no_rule(map);
                Ok(None)
            }
        }
    }
}

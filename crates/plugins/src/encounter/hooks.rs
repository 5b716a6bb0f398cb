//! Host extension-point adapter for [`EncounterRates`].
//!
//! The three triggers (map setup, switch write, level change) can come from
//! different call sites within one frame, so the context sits behind a mutex
//! and every recomputation runs under the lock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use game_core::{
    EncounterModifier, HookContext, HookCriticality, HookError, HostEvent, PostMutationHook,
};

use super::EncounterRates;

/// Shared handle registered both as a post-mutation hook and as an encounter modifier.
#[derive(Clone, Debug, Default)]
pub struct EncounterRatesHook {
    inner: Arc<Mutex<EncounterRates>>,
}

impl EncounterRatesHook {
    pub const NAME: &'static str = "encounter_rates";

    pub fn new(rates: EncounterRates) -> Self {
        Self {
            inner: Arc::new(Mutex::new(rates)),
        }
    }

    /// Locks the context. A poisoned lock is recovered: the rate is derived
    /// state and the next refresh rebuilds it.
    pub fn lock(&self) -> MutexGuard<'_, EncounterRates> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn active_rate(&self) -> f64 {
        self.lock().active_rate()
    }
}

impl PostMutationHook for EncounterRatesHook {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn criticality(&self) -> HookCriticality {
        HookCriticality::Optional
    }

    fn should_trigger(&self, event: &HostEvent) -> bool {
        match event {
            HostEvent::MapSetup { .. } | HostEvent::SwitchChanged { .. } => true,
            HostEvent::ExpChanged { .. } => event.is_level_change(),
            HostEvent::DataLoaded { .. } => false,
        }
    }

    fn apply(&self, ctx: &HookContext<'_>) -> Result<(), HookError> {
        self.lock().handle(ctx.event, ctx.state, &ctx.env);
        Ok(())
    }
}

impl EncounterModifier for EncounterRatesHook {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn can_encounter(&self, base: bool) -> bool {
        self.lock().can_encounter(base)
    }

    fn encounter_progress_value(&self, base: f64) -> f64 {
        self.lock().encounter_progress_value(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{ActorId, DataCategory, MapId, SwitchId};

    #[test]
    fn triggers_on_map_switch_and_level_changes_only() {
        let hook = EncounterRatesHook::default();

        assert!(hook.should_trigger(&HostEvent::MapSetup { map: MapId(1) }));
        assert!(hook.should_trigger(&HostEvent::SwitchChanged {
            switch: SwitchId(2),
            value: false
        }));
        assert!(hook.should_trigger(&HostEvent::ExpChanged {
            actor: ActorId(1),
            level_before: 3,
            level_after: 4
        }));
        assert!(!hook.should_trigger(&HostEvent::ExpChanged {
            actor: ActorId(1),
            level_before: 4,
            level_after: 4
        }));
        assert!(!hook.should_trigger(&HostEvent::DataLoaded {
            category: DataCategory::Maps
        }));
    }

    #[test]
    fn neutral_until_refreshed() {
        let hook = EncounterRatesHook::default();

        assert_eq!(hook.active_rate(), 1.0);
        assert!(EncounterModifier::can_encounter(&hook, true));
        assert!(!EncounterModifier::can_encounter(&hook, false));
        assert_eq!(hook.encounter_progress_value(0.5), 0.5);
    }
}

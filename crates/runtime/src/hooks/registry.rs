//! Hook registry for managing and executing post-mutation hooks.

use std::collections::HashMap;
use std::sync::Arc;

use game_core::{GameEnv, GameState, HookContext, HookCriticality, HookError, HostEvent, PostMutationHook};
use tracing::{debug, error, trace};

use crate::error::RuntimeError;

/// Registry that manages and executes post-mutation hooks.
///
/// Hooks are kept sorted by priority (lower values first). A name lookup table
/// allows callers to retrieve a specific hook, e.g. for inspection in tests.
pub struct HookRegistry {
    hooks: Arc<[Arc<dyn PostMutationHook>]>,
    lookup_table: HashMap<&'static str, Arc<dyn PostMutationHook>>,
}

impl HookRegistry {
    /// Creates a registry; hooks are sorted by priority (lower values first).
    pub fn new(mut hooks: Vec<Arc<dyn PostMutationHook>>) -> Self {
        hooks.sort_by_key(|h| h.priority());

        let lookup_table = hooks.iter().map(|h| (h.name(), Arc::clone(h))).collect();

        Self {
            hooks: hooks.into(),
            lookup_table,
        }
    }

    /// Executes every hook that accepts `event`.
    ///
    /// # Error Handling
    ///
    /// Hook execution errors are handled based on criticality level:
    /// - `Critical`: Returns error immediately
    /// - `Important`: Logs error and continues to next hook (default)
    /// - `Optional`: Logs at debug level and continues silently
    pub fn execute_hooks(
        &self,
        event: &HostEvent,
        state: &GameState,
        env: GameEnv<'_>,
    ) -> Result<(), RuntimeError> {
        let ctx = HookContext { event, state, env };

        for hook in self.hooks.iter() {
            if !hook.should_trigger(event) {
                continue;
            }

            trace!(target: "runtime::hooks", hook = hook.name(), event = event.kind(), "running hook");
            if let Err(e) = hook.apply(&ctx) {
                self.handle_hook_error(hook.as_ref(), e)?;
            }
        }

        Ok(())
    }

    /// Finds a hook by name from the lookup table.
    pub fn find(&self, name: &str) -> Option<&Arc<dyn PostMutationHook>> {
        self.lookup_table.get(name)
    }

    /// Returns the number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns true if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Returns an iterator over hook names and priorities (for debugging).
    pub fn hooks(&self) -> impl Iterator<Item = (&'static str, i32)> + '_ {
        self.hooks.iter().map(|h| (h.name(), h.priority()))
    }

    /// Handles hook execution errors based on criticality level.
    ///
    /// Returns Ok(()) for Important/Optional hooks, Err for Critical hooks.
    fn handle_hook_error(
        &self,
        hook: &dyn PostMutationHook,
        error: HookError,
    ) -> Result<(), RuntimeError> {
        match hook.criticality() {
            HookCriticality::Critical => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "critical",
                    error = %error,
                    "Critical hook failed"
                );
                Err(RuntimeError::CriticalHook {
                    hook: hook.name(),
                    source: error,
                })
            }
            HookCriticality::Important => {
                error!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "important",
                    error = %error,
                    "Hook failed, continuing"
                );
                Ok(())
            }
            HookCriticality::Optional => {
                debug!(
                    target: "runtime::hooks",
                    hook = hook.name(),
                    criticality = "optional",
                    error = %error,
                    "Optional hook failed"
                );
                Ok(())
            }
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{MapId, OracleError};
    use std::sync::Mutex;

    struct Recorder {
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl PostMutationHook for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        fn priority(&self) -> i32 {
            self.priority
        }

        fn criticality(&self) -> HookCriticality {
            self.criticality
        }

        fn should_trigger(&self, event: &HostEvent) -> bool {
            matches!(event, HostEvent::MapSetup { .. })
        }

        fn apply(&self, _ctx: &HookContext<'_>) -> Result<(), HookError> {
            self.log.lock().unwrap().push(self.name);
            if self.fail {
                Err(OracleError::MapsNotAvailable.into())
            } else {
                Ok(())
            }
        }
    }

    fn recorder(
        name: &'static str,
        priority: i32,
        criticality: HookCriticality,
        fail: bool,
        log: &Arc<Mutex<Vec<&'static str>>>,
    ) -> Arc<dyn PostMutationHook> {
        Arc::new(Recorder {
            name,
            priority,
            criticality,
            fail,
            log: Arc::clone(log),
        })
    }

    #[test]
    fn runs_in_priority_order_and_tolerates_important_failures() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            recorder("late", 10, HookCriticality::Important, false, &log),
            recorder("early", -10, HookCriticality::Important, true, &log),
            recorder("middle", 0, HookCriticality::Optional, true, &log),
        ]);
        let state = GameState::default();
        let event = HostEvent::MapSetup { map: MapId(1) };

        registry
            .execute_hooks(&event, &state, GameEnv::empty())
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["early", "middle", "late"]);
        assert!(registry.find("middle").is_some());
    }

    #[test]
    fn critical_failure_stops_execution() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![
            recorder("gate", 0, HookCriticality::Critical, true, &log),
            recorder("after", 1, HookCriticality::Important, false, &log),
        ]);
        let state = GameState::default();
        let event = HostEvent::MapSetup { map: MapId(1) };

        let err = registry
            .execute_hooks(&event, &state, GameEnv::empty())
            .unwrap_err();

        assert!(matches!(err, RuntimeError::CriticalHook { hook: "gate", .. }));
        assert_eq!(*log.lock().unwrap(), vec!["gate"]);
    }

    #[test]
    fn non_matching_events_skip_hooks() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let registry = HookRegistry::new(vec![recorder(
            "only_maps",
            0,
            HookCriticality::Important,
            false,
            &log,
        )]);
        let state = GameState::default();
        let event = HostEvent::SwitchChanged {
            switch: game_core::SwitchId(1),
            value: true,
        };

        registry
            .execute_hooks(&event, &state, GameEnv::empty())
            .unwrap();
        assert!(log.lock().unwrap().is_empty());
    }
}

//! Extension points exposed by the host.
//!
//! Instead of replacing host methods, extensions register against these
//! traits. The host always runs its own behaviour first and hands the
//! result to the extension, which may only observe it (hooks) or fold a
//! policy on top of it (filters, modifiers, policies).

use crate::battle::BattleAction;
use crate::env::GameEnv;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;

use super::HostEvent;

/// Defines the criticality level of a hook for error handling.
///
/// - Critical hooks must succeed or the mutation is reported as failed
/// - Important hooks log errors but allow continuation
/// - Optional hooks can fail silently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookCriticality {
    /// Hook failure is propagated to the caller of the host entry point.
    Critical,

    /// Hook failure is logged as an error; remaining hooks still run.
    ///
    /// This is the default level.
    Important,

    /// Hook failure is expected and only logged at debug level.
    Optional,
}

/// Context handed to hooks after a host mutation completed.
pub struct HookContext<'a> {
    /// What the host just did.
    pub event: &'a HostEvent,

    /// Host state after the mutation.
    pub state: &'a GameState,

    /// Static game data.
    pub env: GameEnv<'a>,
}

/// Errors reported by hooks.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HookError {
    #[error(transparent)]
    Oracle(#[from] crate::env::OracleError),

    #[error("hook {hook} failed: {message}")]
    Failed {
        hook: &'static str,
        message: String,
    },
}

impl GameError for HookError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::Failed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::Failed { .. } => "HOOK_FAILED",
        }
    }
}

/// Hook invoked after every host mutation.
///
/// Hooks are executed in priority order (lower priority values execute first).
/// Implementations that keep mutable state must synchronise it internally, as
/// hooks are shared across call sites.
pub trait PostMutationHook: Send + Sync {
    /// Returns a human-readable name for this hook (used in logging and debugging).
    fn name(&self) -> &'static str;

    /// Returns the priority of this hook. Lower values execute first.
    fn priority(&self) -> i32 {
        0
    }

    /// Returns the criticality level of this hook for error handling.
    fn criticality(&self) -> HookCriticality {
        HookCriticality::Important
    }

    /// Determines whether this hook reacts to `event`.
    fn should_trigger(&self, event: &HostEvent) -> bool;

    /// Runs the hook's side effect.
    fn apply(&self, ctx: &HookContext<'_>) -> Result<(), HookError>;
}

/// Inspects (and possibly rewrites) the battle action a battler is about to perform.
pub trait ActionFilter: Send + Sync {
    fn name(&self) -> &'static str;

    fn filter(&self, action: &mut dyn BattleAction);
}

/// Adjusts the host's random-encounter checks.
pub trait EncounterModifier: Send + Sync {
    fn name(&self) -> &'static str;

    /// Folds over the host's answer to "may an encounter happen at all".
    fn can_encounter(&self, base: bool) -> bool {
        base
    }

    /// Folds over the per-step encounter progress.
    fn encounter_progress_value(&self, base: f64) -> f64 {
        base
    }
}

/// Policy for the actor command window shown during battle input.
pub trait CommandWindowPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Folds over the host's answer to "may the player cancel back out".
    fn is_cancel_enabled(&self, base: bool) -> bool;
}

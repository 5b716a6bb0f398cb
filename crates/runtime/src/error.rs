//! Errors surfaced by the runtime API.

use game_core::{EngineError, ErrorSeverity, GameError, HookError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("runtime requires oracles to be configured before building")]
    MissingOracles,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("critical hook {hook} failed")]
    CriticalHook {
        hook: &'static str,
        #[source]
        source: HookError,
    },
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MissingOracles => ErrorSeverity::Fatal,
            Self::Engine(err) => err.severity(),
            Self::CriticalHook { source, .. } => source.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingOracles => "RUNTIME_MISSING_ORACLES",
            Self::Engine(err) => err.error_code(),
            Self::CriticalHook { .. } => "RUNTIME_CRITICAL_HOOK",
        }
    }
}

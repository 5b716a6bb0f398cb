use crate::error::{ErrorSeverity, GameError};
use crate::state::ActorId;

/// Errors raised by host mutators.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("{0} is not a party member")]
    ActorNotFound(ActorId),
}

impl GameError for EngineError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ActorNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ActorNotFound(_) => "ENGINE_ACTOR_NOT_FOUND",
        }
    }
}

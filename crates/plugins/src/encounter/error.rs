//! Encounter-rate error taxonomy.
//!
//! Token-level problems ([`TokenError`]) are recovered inside the parser by
//! discarding the token. [`EncounterError`] covers failures while computing the
//! active rate; [`super::EncounterRates::refresh`] logs them and falls back to
//! the neutral multiplier, so neither type ever reaches the host.

use game_core::{ErrorSeverity, GameError, MapId, OracleError, SwitchId};

/// Reason a tag token was discarded.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token id {0:?} is not a positive integer")]
    InvalidId(String),

    #[error("{switch} is outside the declared switch table (len {table_len})")]
    SwitchOutOfRange { switch: SwitchId, table_len: usize },
}

impl GameError for TokenError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidId(_) => "ENCOUNTER_TOKEN_INVALID_ID",
            Self::SwitchOutOfRange { .. } => "ENCOUNTER_TOKEN_SWITCH_OUT_OF_RANGE",
        }
    }
}

/// Failure while evaluating the encounter multiplier for a map.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EncounterError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error("rule for {map} produced a non-finite rate {rate}")]
    NonFiniteRate { map: MapId, rate: f64 },
}

impl GameError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::NonFiniteRate { .. } => "ENCOUNTER_NON_FINITE_RATE",
        }
    }
}

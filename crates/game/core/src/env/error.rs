//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{MapId, SkillId};

/// Errors that occur when accessing oracle data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MapOracle is not available in the environment.
    #[error("MapOracle not available")]
    MapsNotAvailable,

    /// SystemOracle is not available in the environment.
    #[error("SystemOracle not available")]
    SystemNotAvailable,

    /// SkillOracle is not available in the environment.
    #[error("SkillOracle not available")]
    SkillsNotAvailable,

    /// No data was loaded for the requested map.
    #[error("map data for {0} not found")]
    MapNotFound(MapId),

    /// No data was loaded for the requested skill.
    #[error("skill data for {0} not found")]
    SkillNotFound(SkillId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            MapsNotAvailable | SystemNotAvailable | SkillsNotAvailable => ErrorSeverity::Fatal,
            MapNotFound(_) | SkillNotFound(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapsNotAvailable => "ORACLE_MAPS_NOT_AVAILABLE",
            SystemNotAvailable => "ORACLE_SYSTEM_NOT_AVAILABLE",
            SkillsNotAvailable => "ORACLE_SKILLS_NOT_AVAILABLE",
            MapNotFound(_) => "ORACLE_MAP_NOT_FOUND",
            SkillNotFound(_) => "ORACLE_SKILL_NOT_FOUND",
        }
    }
}

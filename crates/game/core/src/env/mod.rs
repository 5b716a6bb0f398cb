//! Traits describing read-only game data.
//!
//! Oracles expose static map notes, the declared switch table and the skill
//! database. The [`Env`] aggregate bundles them so the engine and the plugins
//! can access everything they need without hard coupling to concrete
//! implementations.
mod error;
mod map;
mod note;
mod skills;
mod system;

pub use error::OracleError;
pub use map::{MapData, MapOracle};
pub use note::{MetaValue, NoteMeta};
pub use skills::{SkillData, SkillOracle};
pub use system::{SystemData, SystemOracle};

/// Aggregates read-only oracles consumed by the plugins.
#[derive(Clone, Copy, Debug)]
pub struct Env<'a, M, S, K>
where
    M: MapOracle + ?Sized,
    S: SystemOracle + ?Sized,
    K: SkillOracle + ?Sized,
{
    maps: Option<&'a M>,
    system: Option<&'a S>,
    skills: Option<&'a K>,
}

pub type GameEnv<'a> = Env<'a, dyn MapOracle + 'a, dyn SystemOracle + 'a, dyn SkillOracle + 'a>;

impl<'a, M, S, K> Env<'a, M, S, K>
where
    M: MapOracle + ?Sized,
    S: SystemOracle + ?Sized,
    K: SkillOracle + ?Sized,
{
    pub fn new(maps: Option<&'a M>, system: Option<&'a S>, skills: Option<&'a K>) -> Self {
        Self {
            maps,
            system,
            skills,
        }
    }

    pub fn with_all(maps: &'a M, system: &'a S, skills: &'a K) -> Self {
        Self::new(Some(maps), Some(system), Some(skills))
    }

    pub fn empty() -> Self {
        Self {
            maps: None,
            system: None,
            skills: None,
        }
    }

    /// Returns the MapOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::MapsNotAvailable` if no map oracle was provided.
    pub fn maps(&self) -> Result<&'a M, OracleError> {
        self.maps.ok_or(OracleError::MapsNotAvailable)
    }

    /// Returns the SystemOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SystemNotAvailable` if no system oracle was provided.
    pub fn system(&self) -> Result<&'a S, OracleError> {
        self.system.ok_or(OracleError::SystemNotAvailable)
    }

    /// Returns the SkillOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SkillsNotAvailable` if no skill oracle was provided.
    pub fn skills(&self) -> Result<&'a K, OracleError> {
        self.skills.ok_or(OracleError::SkillsNotAvailable)
    }
}

impl<'a, M, S, K> Env<'a, M, S, K>
where
    M: MapOracle + 'a,
    S: SystemOracle + 'a,
    K: SkillOracle + 'a,
{
    /// Erases concrete oracle types into a [`GameEnv`].
    pub fn into_game_env(self) -> GameEnv<'a> {
        Env {
            maps: self.maps.map(|m| m as &'a dyn MapOracle),
            system: self.system.map(|s| s as &'a dyn SystemOracle),
            skills: self.skills.map(|k| k as &'a dyn SkillOracle),
        }
    }
}

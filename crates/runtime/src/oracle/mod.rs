//! Runtime wrappers around static game content oracles.
//!
//! These implementations expose `game-core` oracle traits and bundle them into
//! an [`OracleManager`] so the runtime can build [`game_core::Env`] snapshots
//! on demand. The data is immutable at runtime; dynamic state lives in
//! [`game_core::GameState`].
mod map;
mod skills;

use std::sync::Arc;

use game_core::{Env, GameEnv, SystemData};

pub use map::MapOracleImpl;
pub use skills::SkillOracleImpl;

/// Manages all oracle implementations and provides unified access
#[derive(Clone)]
pub struct OracleManager {
    pub(crate) maps: Arc<MapOracleImpl>,
    pub(crate) system: Arc<SystemData>,
    pub(crate) skills: Arc<SkillOracleImpl>,
}

impl OracleManager {
    /// Creates a new oracle manager
    pub fn new(maps: Arc<MapOracleImpl>, system: Arc<SystemData>, skills: Arc<SkillOracleImpl>) -> Self {
        Self {
            maps,
            system,
            skills,
        }
    }

    /// Converts oracle manager into GameEnv for game-core
    pub fn as_game_env(&self) -> GameEnv<'_> {
        Env::with_all(self.maps.as_ref(), self.system.as_ref(), self.skills.as_ref()).into_game_env()
    }

    pub fn maps(&self) -> &MapOracleImpl {
        &self.maps
    }

    pub fn system(&self) -> &SystemData {
        &self.system
    }

    pub fn skills(&self) -> &SkillOracleImpl {
        &self.skills
    }
}

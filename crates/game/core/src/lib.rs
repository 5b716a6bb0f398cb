//! Host engine model extended by the gameplay plugins.
//!
//! `game-core` defines the host side of the contract: the dynamic world state
//! (current map, switch table, party), read-only data oracles, the mutators
//! that change state, and the extension points through which plugins observe
//! those mutations. Plugins never mutate host state directly; every write flows
//! through [`engine::GameEngine`], and supporting crates depend on the types
//! re-exported here.
pub mod battle;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod state;

pub use battle::{ActionItem, BattleAction, Battler, GameAction};
pub use config::{ExpCurve, GameConfig};
pub use engine::{
    ActionFilter, CommandWindowPolicy, DataCategory, EncounterModifier, EngineError, EngineView,
    GameEngine, HookContext, HookCriticality, HookError, HostEvent, PostMutationHook,
};
pub use env::{
    Env, GameEnv, MapData, MapOracle, MetaValue, NoteMeta, OracleError, SkillData, SkillOracle,
    SystemData, SystemOracle,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    ActorId, ActorState, GameState, MapId, MapState, PartyState, SkillId, StateId, SwitchId,
    Switches,
};

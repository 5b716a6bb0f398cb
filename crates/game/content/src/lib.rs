//! Data-driven content loaders.
//!
//! This crate reads static game data and plugin parameters from disk:
//! - Map catalog with free-text notes (RON)
//! - System database with the declared switch table (RON)
//! - Skill database with notes (RON)
//! - Starting party (RON)
//! - Host configuration and plugin parameters (TOML)
//!
//! Content is consumed by runtime oracles and never appears in game state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ActorSpec, ConfigLoader, ContentFactory, MapLoader, PartyCatalog, PartyLoader, SkillLoader,
    SystemLoader,
};

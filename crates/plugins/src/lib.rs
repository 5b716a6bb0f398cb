//! Gameplay plugins layered on top of the host engine.
//!
//! Each plugin registers against an extension point from [`game_core::engine`]
//! instead of replacing host behaviour:
//! - [`encounter`] derives a per-map encounter multiplier from map note tags and
//!   keeps it in sync with map changes, switch writes and level changes
//! - [`action_cancel`] turns state-gated skills into the default attack when the
//!   user no longer has any of the required states
//! - [`menu_cancel`] forbids cancelling out of the actor command window in battle
//!
//! Plugin parameters are grouped in [`PluginConfig`].
pub mod action_cancel;
pub mod config;
pub mod encounter;
pub mod menu_cancel;

pub use action_cancel::{ActionCancel, ActionCancelConfig};
pub use config::{ParamValue, PluginConfig};
pub use encounter::{
    EncounterError, EncounterRates, EncounterRatesHook, LevelModifier, MapEncounterRule,
    ParsedNote, RuleCache, parse_note,
};
pub use menu_cancel::NoBattleCancel;

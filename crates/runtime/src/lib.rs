//! Host runtime that wires game state, static data and plugins together.
//!
//! Consumers build a [`Runtime`] through [`RuntimeBuilder`], then drive it
//! through the host entry points (map setup, switch writes, experience
//! changes, battle action inspection, encounter checks). Every entry point
//! applies the base mechanic first and only then lets the registered
//! extensions react.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`hooks`] provides the post-mutation hook registry
//! - [`oracle`] provides data adapters over loaded content
pub mod error;
pub mod hooks;
pub mod oracle;
pub mod runtime;

pub use error::{Result, RuntimeError};
pub use hooks::HookRegistry;
pub use oracle::{MapOracleImpl, OracleManager, SkillOracleImpl};
pub use runtime::{Runtime, RuntimeBuilder};

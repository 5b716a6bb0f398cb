//! Post-mutation hook system for runtime orchestration.
//!
//! Hooks let plugins react to host mutations without replacing host behaviour.
//!
//! # Architecture
//!
//! - Hooks are registered in the RuntimeBuilder and sorted by priority
//! - After each host mutation, hooks are evaluated in priority order
//! - A hook runs only if `should_trigger()` accepts the event
//! - Failures are handled according to each hook's `HookCriticality`

mod registry;

pub use registry::HookRegistry;

//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into the `game-core` types the runtime
//! oracles are built from.

pub mod config;
pub mod factory;
pub mod map;
pub mod party;
pub mod skills;
pub mod system;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use map::MapLoader;
pub use party::{ActorSpec, PartyCatalog, PartyLoader};
pub use skills::SkillLoader;
pub use system::SystemLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

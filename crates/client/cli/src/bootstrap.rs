//! Builds a runtime from a content directory.
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use game_content::ContentFactory;
use runtime::{MapOracleImpl, OracleManager, Runtime, SkillOracleImpl};
use tracing::info;

/// Loads every data file under `data_dir`, installs the bundled plugins and
/// signals data-load completion.
pub fn load_runtime(data_dir: &Path) -> Result<Runtime> {
    let factory = ContentFactory::new(data_dir);

    let config = factory.load_config()?;
    let plugins = factory.load_plugin_config()?;
    let maps = factory.load_maps()?;
    let system = factory.load_system()?;
    let skills = factory.load_skills()?;
    let party = factory.load_party(&config)?;

    info!(
        target: "encounter_cli",
        data_dir = %data_dir.display(),
        maps = maps.len(),
        skills = skills.len(),
        party = party.members().len(),
        "content loaded"
    );

    let oracles = OracleManager::new(
        Arc::new(MapOracleImpl::new(maps)),
        Arc::new(system),
        Arc::new(SkillOracleImpl::new(skills)),
    );

    let mut runtime = Runtime::builder()
        .config(config)
        .oracles(oracles)
        .party(party)
        .with_plugins(&plugins)
        .build()
        .context("failed to build runtime")?;
    runtime
        .load_all_data()
        .context("failed to signal data load")?;

    Ok(runtime)
}

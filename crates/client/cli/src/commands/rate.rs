//! Replays host events on a map and prints the resulting encounter rate.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{ActorId, MapId, SwitchId};
use serde::Serialize;

use super::OutputFormat;
use crate::bootstrap::load_runtime;
use crate::config::CliConfig;

/// Compute the active encounter rate for a map and game state
#[derive(Parser)]
pub struct Rate {
    /// Data directory (defaults to ENCOUNTER_DATA_DIR, then demos/data)
    #[arg(short, long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Map id to enter
    #[arg(short, long, value_name = "ID")]
    map: i32,

    /// Switch to turn on (repeatable)
    #[arg(short, long = "switch", value_name = "ID")]
    switches: Vec<u32>,

    /// Level to set on every party member
    #[arg(short, long, value_name = "LEVEL")]
    level: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct RateReport {
    map: MapId,
    min_level: Option<u32>,
    active_rate: f64,
    can_encounter: bool,
    encounter_progress: f64,
}

impl Rate {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let mut runtime = load_runtime(&config.resolve_data_dir(self.data))?;
        let map = MapId(self.map);
        runtime
            .oracles()
            .maps()
            .get(map)
            .with_context(|| format!("{map} is not in the map catalog"))?;

        runtime.setup_map(map)?;
        for switch in self.switches {
            runtime.set_switch(SwitchId(switch), true)?;
        }
        if let Some(level) = self.level {
            let members: Vec<ActorId> = runtime
                .state()
                .party
                .members()
                .iter()
                .map(|actor| actor.id)
                .collect();
            for actor in members {
                runtime.set_level(actor, level)?;
            }
        }

        let report = RateReport {
            map,
            min_level: runtime.state().party.min_level(),
            active_rate: runtime
                .encounter()
                .map_or(1.0, |encounter| encounter.active_rate()),
            can_encounter: runtime.can_encounter(),
            encounter_progress: runtime.encounter_progress_value(),
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => {
                println!("{}", report.map);
                match report.min_level {
                    Some(level) => println!("  party min level: {level}"),
                    None => println!("  party min level: (empty party)"),
                }
                println!("  active rate:     x{}", report.active_rate);
                println!("  can encounter:   {}", report.can_encounter);
                println!("  progress/step:   {}", report.encounter_progress);
            }
        }
        Ok(())
    }
}

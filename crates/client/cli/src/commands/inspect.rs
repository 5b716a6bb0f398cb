//! Prints the encounter rule declared by one map's note, or the map catalog.
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{MapId, MapOracle, SystemOracle};
use game_plugins::{MapEncounterRule, ParsedNote, parse_note};
use runtime::MapOracleImpl;
use serde::Serialize;

use super::OutputFormat;
use crate::bootstrap::load_runtime;
use crate::config::CliConfig;

/// Show the parsed encounter rule of a map, or list maps when no id is given
#[derive(Parser)]
pub struct Inspect {
    /// Data directory (defaults to ENCOUNTER_DATA_DIR, then demos/data)
    #[arg(short, long, value_name = "DIR")]
    data: Option<PathBuf>,

    /// Map id (omit to list every map)
    #[arg(short, long, value_name = "ID")]
    map: Option<i32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct InspectReport<'a> {
    map: MapId,
    name: &'a str,
    tagged: bool,
    discarded: usize,
    rule: Option<MapEncounterRule>,
}

impl Inspect {
    pub fn execute(self, config: &CliConfig) -> Result<()> {
        let runtime = load_runtime(&config.resolve_data_dir(self.data))?;
        let system = runtime.oracles().system();
        let Some(map) = self.map.map(MapId) else {
            return list_maps(runtime.oracles().maps(), self.format);
        };
        let data = runtime
            .oracles()
            .maps()
            .get(map)
            .with_context(|| format!("{map} is not in the map catalog"))?;

        let (tagged, discarded, rule) = match parse_note(&data.note, system.switch_table_len()) {
            ParsedNote::NoTag => (false, 0, None),
            ParsedNote::Empty { discarded } => (true, discarded, None),
            ParsedNote::Rule(rule) => (true, 0, Some(rule)),
        };
        let report = InspectReport {
            map,
            name: &data.name,
            tagged,
            discarded,
            rule,
        };

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Text => print_text(&report, system),
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MapEntry<'a> {
    map: MapId,
    name: &'a str,
}

fn list_maps(maps: &MapOracleImpl, format: OutputFormat) -> Result<()> {
    let entries: Vec<MapEntry<'_>> = maps
        .map_ids()
        .into_iter()
        .filter_map(|id| maps.get(id))
        .map(|data| MapEntry {
            map: data.id,
            name: &data.name,
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Text => {
            for entry in &entries {
                println!("{} ({})", entry.map, entry.name);
            }
        }
    }
    Ok(())
}

fn print_text(report: &InspectReport<'_>, system: &dyn SystemOracle) {
    println!("{} ({})", report.map, report.name);

    let Some(rule) = &report.rule else {
        if report.tagged {
            println!("  encounter tag present, no usable tokens ({} discarded)", report.discarded);
        } else {
            println!("  no rule");
        }
        return;
    };

    for modifier in &rule.level_modifiers {
        println!("  party level >= {:>3}: x{}", modifier.min_level, modifier.rate);
    }
    for (switch, rate) in &rule.switch_modifiers {
        match system.switch_name(switch.0).filter(|name| !name.is_empty()) {
            Some(name) => println!("  {switch} ({name}) on: x{rate}"),
            None => println!("  {switch} on: x{rate}"),
        }
    }
}

//! Optional JSON file export of harvested payloads.
//!
//! With `--out <dir>`, a run leaves behind `agendas.json` (the accumulated
//! discovery list) and one `events_<uid>_<keyword>.json` per fetched event
//! collection.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use openagenda::Agenda;

/// Write the accumulated discovery list to `<dir>/agendas.json`.
pub fn write_agendas(dir: &Path, agendas: &[Agenda]) -> Result<PathBuf> {
    let path = dir.join("agendas.json");
    write_pretty(&path, &serde_json::to_value(agendas)?)?;
    Ok(path)
}

/// Write one fetched event collection to `<dir>/events_<uid>_<keyword>.json`.
pub fn write_events(dir: &Path, agenda_uid: u64, keyword: &str, events: &Value) -> Result<PathBuf> {
    let path = dir.join(format!("events_{agenda_uid}_{}.json", filename_slug(keyword)));
    write_pretty(&path, events)?;
    Ok(path)
}

fn write_pretty(path: &Path, value: &Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating export directory {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(value)?;
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Keywords go into filenames; anything non-alphanumeric becomes `-`.
fn filename_slug(keyword: &str) -> String {
    keyword
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect()
}

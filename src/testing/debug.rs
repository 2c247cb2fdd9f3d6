//! Debug utilities for inspecting emitted mappings.

use anyhow::Result;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Render a mapping as pretty JSON with keys in sorted order.
///
/// Sorted keys make the output stable across runs, so it can be diffed or
/// asserted against a checked-in expectation.
pub fn snapshot_json<V: Serialize>(map: &HashMap<String, V>) -> Result<String> {
    let ordered: BTreeMap<&String, &V> = map.iter().collect();
    Ok(serde_json::to_string_pretty(&ordered)?)
}

/// Write [`snapshot_json`] output to a file.
pub fn dump_snapshot<V: Serialize, P: AsRef<Path>>(map: &HashMap<String, V>, path: P) -> Result<()> {
    std::fs::write(path, snapshot_json(map)?)?;
    Ok(())
}

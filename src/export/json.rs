//! JSON import/export for study records.
//! Reads a JSON array of `{"question": .., "answer": ..}` objects and writes a study set back out.

use crate::error::Result;
use crate::models::{Record, StudySet};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Exports a study set to a JSON file at the specified path.
/// Returns an error if file creation or writing fails.
pub fn export_json_to_path(set: &StudySet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let json_string = serde_json::to_string_pretty(set)?;
    let mut file = File::create(path)?;
    file.write_all(json_string.as_bytes())?;

    tracing::info!("exported {} cards to '{}'", set.len(), path.display());
    Ok(())
}

/// Imports raw records from a JSON file.
/// Records are not checked here; missing keys surface when the set is built.
pub fn import_records(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    let records: Vec<Record> = serde_json::from_str(&contents)?;

    tracing::info!("imported {} records from '{}'", records.len(), path.display());
    Ok(records)
}

//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use arbiter_data::DecayRecord;
use arbiter_view::{DataTable, summary};

/// Load a decay record from a JSON file.
///
/// Deserialization funnels through the validating record constructor, so
/// a malformed or tampered file fails here rather than at display time.
pub fn load_record(path: &str) -> Result<DecayRecord> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    serde_json::from_str(&source).with_context(|| format!("Invalid record file: {path}"))
}

/// Print one record: summary panel, then the raw-count table.
pub fn print_record(record: &DecayRecord, max_rows: usize) {
    print!("{}", summary(record));
    println!();
    print!("{}", DataTable::with_max_rows(record, max_rows));
    println!();
}

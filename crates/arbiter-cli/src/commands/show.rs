//! Show command implementation.
//!
//! Load record files into a collection and render them in the order
//! given.

use anyhow::Result;
use console::style;
use tracing::info;

use arbiter_data::DecayRecordCollection;

use super::common::{load_record, print_record};

/// Execute the show command.
pub fn execute(files: &[String], format: &str, max_rows: usize) -> Result<()> {
    let mut collection = DecayRecordCollection::new();
    for path in files {
        collection.add(load_record(path)?);
    }
    info!("loaded {} record(s)", collection.len());

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&collection)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        _ => {
            for (path, record) in files.iter().zip(collection.iter()) {
                println!("{} {}", style("→").cyan().bold(), style(path).green());
                print_record(record, max_rows);
            }
        }
    }

    Ok(())
}

//! Generate command implementation.

use anyhow::{Context, Result};
use console::style;
use std::fs;

use arbiter_data::synthetic::{self, SynthConfig};

/// Execute the generate command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    name: &str,
    seq_lengths: &[u32],
    throws: usize,
    shots: u32,
    referenced: bool,
    decay_rate: f64,
    seed: u64,
    output: Option<&str>,
) -> Result<()> {
    let config = SynthConfig {
        name: name.to_string(),
        sequence_lengths: seq_lengths.to_vec(),
        n_throws: throws,
        shots_per_throw: shots,
        referenced,
        decay_rate,
        seed,
    };

    let record = synthetic::generate(&config).context("Failed to generate record")?;
    let json = serde_json::to_string_pretty(&record).context("Failed to serialize record")?;

    match output {
        Some(path) => {
            fs::write(path, &json).with_context(|| format!("Failed to write file: {path}"))?;
            println!(
                "{} Generated '{}': {} lengths x {} throws, {} shots per throw",
                style("✓").green().bold(),
                style(record.name()).green(),
                record.n_seq(),
                record.n_throws(),
                record.shots_per_throw()
            );
            println!("  Output: {}", style(path).green());
        }
        None => println!("{json}"),
    }

    Ok(())
}

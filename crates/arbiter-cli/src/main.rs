//! Arbiter Command-Line Interface
//!
//! The main entry point for the Arbiter CLI tool: generates synthetic
//! randomized-benchmarking records in place of an instrument import and
//! renders stored records as console tables and summaries.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{generate, show, version};

/// Arbiter - randomized-benchmarking decay data on the console
#[derive(Parser)]
#[command(name = "arbiter")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic decay record
    Generate {
        /// Record name
        #[arg(short, long, default_value = "synthetic")]
        name: String,

        /// Comma-separated sequence lengths
        #[arg(
            short = 'l',
            long,
            value_delimiter = ',',
            default_value = "1,2,4,8,16,32,64,128"
        )]
        seq_lengths: Vec<u32>,

        /// Random sequences drawn per length
        #[arg(short, long, default_value = "30")]
        throws: usize,

        /// Binomial trials per throw
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Sample upper/lower calibration channels too
        #[arg(short, long)]
        referenced: bool,

        /// Per-gate survival retention, in [0, 1]
        #[arg(long, default_value = "0.98")]
        decay_rate: f64,

        /// RNG seed
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Output file for the record JSON (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Display decay records from JSON files
    Show {
        /// Record files, rendered in the order given
        #[arg(required = true)]
        files: Vec<String>,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Maximum table rows per record
        #[arg(long, default_value = "32")]
        max_rows: usize,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Generate {
            name,
            seq_lengths,
            throws,
            shots,
            referenced,
            decay_rate,
            seed,
            output,
        } => generate::execute(
            &name,
            &seq_lengths,
            throws,
            shots,
            referenced,
            decay_rate,
            seed,
            output.as_deref(),
        ),

        Commands::Show {
            files,
            format,
            max_rows,
        } => show::execute(&files, &format, max_rows),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

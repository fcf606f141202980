//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - randomized-benchmarking decay data on the console",
        style("Arbiter").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  arbiter-data  Decay records, calibration references, collections");
    println!("  arbiter-view  Table and summary rendering");
    println!("  arbiter-cli   Command-line interface");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}

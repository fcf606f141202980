//! Record summaries.
//!
//! One compact panel per record: a header with the cube dimensions, then
//! the mean referenced signal per sequence length with a proportional
//! bar. The bars give the decay shape at a glance without a plot.

use std::fmt::Write as _;

use arbiter_data::DecayRecord;
use ndarray::Axis;

/// Widest bar, in glyphs, given to the peak mean signal.
const BAR_WIDTH: f64 = 40.0;

/// Render a multi-line summary of one record.
pub fn summary(record: &DecayRecord) -> String {
    let mut out = String::new();

    let kind = if record.is_referenced() {
        "referenced"
    } else {
        "unreferenced"
    };
    let _ = writeln!(out, "{} ({})", record.name(), kind);
    let _ = writeln!(
        out,
        "  {} sequence lengths x {} throws, {} shots per throw",
        record.n_seq(),
        record.n_throws(),
        record.shots_per_throw()
    );
    if record.ragged() {
        let _ = writeln!(out, "  ragged: negative cells mark missing throws");
    }

    let normalized = record.normalized_data();
    let Some(means) = normalized.mean_axis(Axis(1)) else {
        let _ = writeln!(out, "  (no throws)");
        return out;
    };

    let peak = means.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    for (&length, &mean) in record.sequence_lengths().iter().zip(means.iter()) {
        let bar_length = if peak > 0.0 && mean > 0.0 {
            ((mean / peak) * BAR_WIDTH).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(bar_length);
        let _ = writeln!(out, "  m={length:>6}  mean {mean:>10.2}  {bar}");
    }

    out
}

//! Raw-count tables.
//!
//! Renders a record's raw channel as a text grid: sequence lengths across
//! the top, one row per throw. Long acquisitions are capped and the
//! remainder elided, so a 10k-throw record stays printable.

use std::fmt;

use arbiter_data::DecayRecord;

/// Default cap on rendered throw rows.
pub const DEFAULT_MAX_ROWS: usize = 32;

/// Text table of a record's raw counts.
#[derive(Debug, Clone)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    elided_rows: usize,
}

impl DataTable {
    /// Build a table capped at [`DEFAULT_MAX_ROWS`] throw rows.
    pub fn new(record: &DecayRecord) -> Self {
        Self::with_max_rows(record, DEFAULT_MAX_ROWS)
    }

    /// Build a table showing at most `max_rows` throw rows.
    pub fn with_max_rows(record: &DecayRecord, max_rows: usize) -> Self {
        let headers = record
            .sequence_lengths()
            .iter()
            .map(|length| length.to_string())
            .collect();

        let raw = record.raw_data();
        let shown = record.n_throws().min(max_rows);
        let rows = (0..shown)
            .map(|throw| {
                (0..record.n_seq())
                    .map(|seq| format_cell(raw[[seq, throw]]))
                    .collect()
            })
            .collect();

        Self {
            headers,
            rows,
            elided_rows: record.n_throws() - shown,
        }
    }

    /// Number of sequence-length columns.
    pub fn n_columns(&self) -> usize {
        self.headers.len()
    }

    /// Number of rendered throw rows, after capping.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Throw rows dropped by the cap.
    pub fn elided_rows(&self) -> usize {
        self.elided_rows
    }
}

impl fmt::Display for DataTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.len());
            }
        }

        let gutter = self
            .rows
            .len()
            .saturating_sub(1)
            .to_string()
            .len()
            .max("throw".len());

        write!(f, "{:>gutter$}", "throw")?;
        for (header, width) in self.headers.iter().zip(widths.iter().copied()) {
            write!(f, "  {header:>width$}")?;
        }
        writeln!(f)?;

        for (throw, row) in self.rows.iter().enumerate() {
            write!(f, "{throw:>gutter$}")?;
            for (cell, width) in row.iter().zip(widths.iter().copied()) {
                write!(f, "  {cell:>width$}")?;
            }
            writeln!(f)?;
        }

        if self.elided_rows > 0 {
            writeln!(f, "... and {} more throws", self.elided_rows)?;
        }

        Ok(())
    }
}

/// Counts print as integers; anything fractional keeps three decimals.
fn format_cell(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e12 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}

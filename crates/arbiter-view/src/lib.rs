//! Arbiter Record Rendering
//!
//! Read-only views over [`arbiter_data`] records for console display. The
//! crate produces plain strings; color, paging and terminal handling stay
//! with the caller.
//!
//! # Core Components
//!
//! - **Tables**: [`DataTable`] for the raw-count grid, one column per
//!   sequence length and one row per throw
//! - **Summaries**: [`summary`] for the per-record header and mean-signal
//!   panel
//!
//! # Example
//!
//! ```rust
//! use arbiter_data::DecayRecord;
//! use arbiter_view::DataTable;
//! use ndarray::Array3;
//!
//! let record = DecayRecord::new("demo", Array3::from_elem((1, 2, 3), 7.0), 8).unwrap();
//! let table = DataTable::new(&record);
//!
//! assert_eq!(table.n_columns(), 2);
//! assert_eq!(table.n_rows(), 3);
//! assert!(table.to_string().contains('7'));
//! ```

pub mod summary;
pub mod table;

pub use summary::summary;
pub use table::DataTable;

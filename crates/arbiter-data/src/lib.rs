//! Arbiter Decay-Record Core
//!
//! This crate provides the data structures behind Arbiter's randomized-
//! benchmarking views. It owns the measurement cubes, the calibration
//! bookkeeping and the ordered record collections; everything above it is
//! rendering.
//!
//! # Overview
//!
//! A fidelity-decay run produces a cube of binomial counts indexed by
//! channel, sequence length and throw. [`DecayRecord`] validates that cube
//! once at construction and then exposes infallible views: the raw counts,
//! the upper and lower calibration references (measured when present,
//! synthesized from the shot count when not) and the referenced signal
//! `raw * (upper - lower) + lower`.
//!
//! # Core Components
//!
//! - **Records**: [`DecayRecord`] for a single decay curve and its
//!   calibration channels
//! - **Collections**: [`DecayRecordCollection`] for insertion-ordered sets
//!   of curves
//! - **Errors**: [`DataError`], [`DataResult`] for construction failures
//! - **Synthesis**: [`synthetic`] for seeded stand-in records when no
//!   instrument data is at hand
//!
//! # Example: Normalizing an Unreferenced Record
//!
//! ```rust
//! use arbiter_data::DecayRecord;
//! use ndarray::Array3;
//!
//! // One channel, three sequence lengths, two throws.
//! let cube = Array3::from_elem((1, 3, 2), 2.0);
//! let record = DecayRecord::new("demo", cube, 5).unwrap();
//!
//! // Without measured references the signal is scaled by the shot count.
//! assert_eq!(record.sequence_lengths(), &[1, 2, 3]);
//! assert!(record.normalized_data().iter().all(|&v| v == 10.0));
//! ```
//!
//! # Example: Generating a Synthetic Record
//!
//! ```rust
//! use arbiter_data::synthetic::{self, SynthConfig};
//!
//! let config = SynthConfig {
//!     sequence_lengths: vec![1, 2, 4],
//!     n_throws: 5,
//!     shots_per_throw: 128,
//!     ..Default::default()
//! };
//!
//! let record = synthetic::generate(&config).unwrap();
//! assert_eq!(record.n_seq(), 3);
//! assert_eq!(record.n_throws(), 5);
//! ```

pub mod collection;
pub mod error;
pub mod record;
pub mod synthetic;

pub use collection::DecayRecordCollection;
pub use error::{DataError, DataResult};
pub use record::DecayRecord;
pub use synthetic::SynthConfig;

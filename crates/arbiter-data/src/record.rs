//! Decay-curve records.
//!
//! A [`DecayRecord`] holds the measurement cube of one randomized-benchmarking
//! run. Axis 0 selects the channel (raw counts, plus the upper and lower
//! calibration references when present), axis 1 the sequence length and
//! axis 2 the throw. Records are immutable after construction and every
//! derived view is computed from the cube on demand.

use ndarray::{Array2, Array3, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DataError, DataResult};

/// Axis-0 channel holding the raw counts.
const RAW: usize = 0;
/// Axis-0 channel holding the upper calibration reference.
const UPPER: usize = 1;
/// Axis-0 channel holding the lower calibration reference.
const LOWER: usize = 2;

/// One fidelity-decay curve.
///
/// The cube has shape `(channels, n_seq, n_throws)` with exactly one
/// channel (unreferenced) or three channels (raw plus the two calibration
/// references). Cells are binomial counts out of
/// [`shots_per_throw`](Self::shots_per_throw) trials, stored as `f64` so
/// that pre-scaled fractions and the negative placeholder cells of ragged
/// acquisitions stay representable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct DecayRecord {
    name: String,
    measurements: Array3<f64>,
    sequence_lengths: Vec<u32>,
    shots_per_throw: u32,
    ragged: bool,
}

/// Wire shape of a record. Deserialization lands here first and is then
/// funneled through the validating constructor, so a tampered file fails
/// on load rather than at display time.
#[derive(Deserialize)]
struct RecordFields {
    name: String,
    measurements: Array3<f64>,
    sequence_lengths: Vec<u32>,
    shots_per_throw: u32,
    #[serde(default)]
    ragged: bool,
}

impl TryFrom<RecordFields> for DecayRecord {
    type Error = DataError;

    fn try_from(fields: RecordFields) -> DataResult<Self> {
        let record = DecayRecord::with_sequence_lengths(
            fields.name,
            fields.measurements,
            fields.sequence_lengths,
            fields.shots_per_throw,
        )?;
        Ok(record.with_ragged(fields.ragged))
    }
}

impl DecayRecord {
    /// Create a record with default sequence-length labels `1..=n_seq`.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidShape`] if the cube does not carry one
    /// or three channels, and [`DataError::InvalidParameter`] if
    /// `shots_per_throw` is zero.
    pub fn new(
        name: impl Into<String>,
        measurements: Array3<f64>,
        shots_per_throw: u32,
    ) -> DataResult<Self> {
        let n_seq = measurements.dim().1;
        let sequence_lengths = (1..=n_seq as u32).collect();
        Self::with_sequence_lengths(name, measurements, sequence_lengths, shots_per_throw)
    }

    /// Create a record with explicit sequence-length labels.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::InvalidShape`] if the cube does not carry one
    /// or three channels or if the label count does not match axis 1, and
    /// [`DataError::InvalidParameter`] if `shots_per_throw` is zero or any
    /// label is zero.
    pub fn with_sequence_lengths(
        name: impl Into<String>,
        measurements: Array3<f64>,
        sequence_lengths: Vec<u32>,
        shots_per_throw: u32,
    ) -> DataResult<Self> {
        let name = name.into();
        let (channels, n_seq, n_throws) = measurements.dim();

        if channels != 1 && channels != 3 {
            return Err(DataError::InvalidShape {
                channels,
                n_seq,
                n_throws,
                detail: "axis 0 must hold 1 channel (unreferenced) or 3 (raw + references)"
                    .to_string(),
            });
        }

        if sequence_lengths.len() != n_seq {
            return Err(DataError::InvalidShape {
                channels,
                n_seq,
                n_throws,
                detail: format!(
                    "{} sequence-length labels for {} columns",
                    sequence_lengths.len(),
                    n_seq
                ),
            });
        }

        if shots_per_throw == 0 {
            return Err(DataError::InvalidParameter {
                name: "shots_per_throw",
                value: 0.0,
                requirement: "must be at least 1",
            });
        }

        if sequence_lengths.contains(&0) {
            return Err(DataError::InvalidParameter {
                name: "sequence_lengths",
                value: 0.0,
                requirement: "every length must be at least 1",
            });
        }

        debug!(
            "decay record '{}': {} channel(s), {} lengths, {} throws",
            name, channels, n_seq, n_throws
        );

        Ok(Self {
            name,
            measurements,
            sequence_lengths,
            shots_per_throw,
            ragged: false,
        })
    }

    /// Mark the record as ragged (some throws stopped early and carry
    /// negative placeholder cells). The flag is descriptive only and does
    /// not change any derived view.
    #[must_use]
    pub fn with_ragged(mut self, ragged: bool) -> Self {
        self.ragged = ragged;
        self
    }

    /// Record name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Channel count on axis 0 (1 or 3).
    pub fn channels(&self) -> usize {
        self.measurements.dim().0
    }

    /// Number of sequence lengths (axis 1).
    pub fn n_seq(&self) -> usize {
        self.measurements.dim().1
    }

    /// Number of throws per sequence length (axis 2).
    pub fn n_throws(&self) -> usize {
        self.measurements.dim().2
    }

    /// Binomial trials behind each cell.
    pub fn shots_per_throw(&self) -> u32 {
        self.shots_per_throw
    }

    /// Whether some throws stopped early.
    pub fn ragged(&self) -> bool {
        self.ragged
    }

    /// Whether the cube carries measured calibration references.
    pub fn is_referenced(&self) -> bool {
        self.channels() > 1
    }

    /// Sequence-length label per column of axis 1.
    pub fn sequence_lengths(&self) -> &[u32] {
        &self.sequence_lengths
    }

    /// The full measurement cube.
    pub fn measurements(&self) -> &Array3<f64> {
        &self.measurements
    }

    /// Raw counts, `(n_seq, n_throws)`.
    pub fn raw_data(&self) -> ArrayView2<'_, f64> {
        self.measurements.index_axis(Axis(0), RAW)
    }

    /// Upper calibration reference, `(n_seq, n_throws)`.
    ///
    /// Unreferenced records synthesize a constant plane at
    /// `shots_per_throw`, the count an ideal all-ones measurement would
    /// produce.
    pub fn upper_reference(&self) -> Array2<f64> {
        if self.is_referenced() {
            self.measurements.index_axis(Axis(0), UPPER).to_owned()
        } else {
            Array2::from_elem(
                (self.n_seq(), self.n_throws()),
                f64::from(self.shots_per_throw),
            )
        }
    }

    /// Lower calibration reference, `(n_seq, n_throws)`.
    ///
    /// Unreferenced records synthesize an all-zero plane.
    pub fn lower_reference(&self) -> Array2<f64> {
        if self.is_referenced() {
            self.measurements.index_axis(Axis(0), LOWER).to_owned()
        } else {
            Array2::zeros((self.n_seq(), self.n_throws()))
        }
    }

    /// Referenced signal: each raw cell rescaled between its calibration
    /// bounds, `raw * (upper - lower) + lower`.
    pub fn normalized_data(&self) -> Array2<f64> {
        let upper = self.upper_reference();
        let lower = self.lower_reference();
        (&self.raw_data() * &(&upper - &lower)) + &lower
    }
}

//! Error types for the decay-record core.

use thiserror::Error;

/// Result type for decay-record operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors raised while building decay records.
///
/// Every structural check runs at construction time, so a record that
/// exists is a record whose accessors cannot fail.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DataError {
    /// The measurement cube does not satisfy the record contract.
    #[error("invalid measurement shape {channels}x{n_seq}x{n_throws}: {detail}")]
    InvalidShape {
        /// Channel count on axis 0.
        channels: usize,
        /// Sequence-length count on axis 1.
        n_seq: usize,
        /// Throw count on axis 2.
        n_throws: usize,
        /// Which part of the contract the shape broke.
        detail: String,
    },

    /// A scalar parameter is outside its allowed range.
    #[error("invalid parameter '{name}': {value} ({requirement})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// What the parameter must satisfy.
        requirement: &'static str,
    },
}

//! Synthetic decay-record generation.
//!
//! Stands in for an acquisition backend: draws binomial counts from the
//! single-exponential survival model `p(m) = 0.5 * f^m + 0.5`, where `f`
//! is the per-gate retention and `m` the sequence length. Generation is
//! deterministic per seed, which keeps downstream rendering testable.

use ndarray::Array3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{DataError, DataResult};
use crate::record::DecayRecord;

/// Survival probability of the upper calibration channel.
const UPPER_SURVIVAL: f64 = 0.98;
/// Survival probability of the lower calibration channel.
const LOWER_SURVIVAL: f64 = 0.02;

/// Configuration for synthetic record generation.
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Name given to the generated record.
    pub name: String,
    /// Sequence lengths to sample, one cube column each.
    pub sequence_lengths: Vec<u32>,
    /// Random sequences drawn per length.
    pub n_throws: usize,
    /// Binomial trials per throw.
    pub shots_per_throw: u32,
    /// Whether to sample the upper/lower calibration channels too.
    pub referenced: bool,
    /// Per-gate survival retention, in `[0, 1]`.
    pub decay_rate: f64,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            name: "synthetic".to_string(),
            sequence_lengths: vec![1, 2, 4, 8, 16, 32, 64, 128],
            n_throws: 30,
            shots_per_throw: 1024,
            referenced: false,
            decay_rate: 0.98,
            seed: 0,
        }
    }
}

/// Generate a decay record by sampling the survival model.
///
/// # Errors
///
/// Returns [`DataError::InvalidParameter`] if `decay_rate` falls outside
/// `[0, 1]`, plus any record-construction error for the remaining fields.
pub fn generate(config: &SynthConfig) -> DataResult<DecayRecord> {
    if !(0.0..=1.0).contains(&config.decay_rate) {
        return Err(DataError::InvalidParameter {
            name: "decay_rate",
            value: config.decay_rate,
            requirement: "must lie in [0, 1]",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let n_seq = config.sequence_lengths.len();
    let channels = if config.referenced { 3 } else { 1 };
    let mut cube = Array3::zeros((channels, n_seq, config.n_throws));

    for (seq, &length) in config.sequence_lengths.iter().enumerate() {
        let survival = 0.5 * config.decay_rate.powf(f64::from(length)) + 0.5;
        for throw in 0..config.n_throws {
            cube[[0, seq, throw]] = draw(&mut rng, config.shots_per_throw, survival);
            if config.referenced {
                cube[[1, seq, throw]] = draw(&mut rng, config.shots_per_throw, UPPER_SURVIVAL);
                cube[[2, seq, throw]] = draw(&mut rng, config.shots_per_throw, LOWER_SURVIVAL);
            }
        }
    }

    debug!(
        "generated synthetic cube: {} channel(s), {} lengths, {} throws, seed {}",
        channels, n_seq, config.n_throws, config.seed
    );

    DecayRecord::with_sequence_lengths(
        config.name.clone(),
        cube,
        config.sequence_lengths.clone(),
        config.shots_per_throw,
    )
}

/// Sample one binomial count: `shots` Bernoulli trials at probability `p`.
fn draw(rng: &mut SmallRng, shots: u32, p: f64) -> f64 {
    (0..shots).filter(|_| rng.gen_bool(p)).count() as f64
}

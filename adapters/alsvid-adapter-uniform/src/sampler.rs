//! Uniform bitstring sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use alsvid_hal::Counts;

/// Parameters for one sampling call.
///
/// Immutable once built; a request has no identity beyond the call that
/// consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleRequest {
    /// Number of shots to draw.
    pub shots: u32,
    /// Bits per drawn bitstring. Must be at least 1.
    pub bits: u32,
    /// RNG seed. `None` draws the seed from OS entropy.
    pub seed: Option<u64>,
}

impl SampleRequest {
    /// Create an unseeded request.
    pub fn new(shots: u32, bits: u32) -> Self {
        Self {
            shots,
            bits,
            seed: None,
        }
    }

    /// Create a seeded, reproducible request.
    pub fn with_seed(shots: u32, bits: u32, seed: u64) -> Self {
        Self {
            shots,
            bits,
            seed: Some(seed),
        }
    }
}

/// Draw `shots` bitstrings of width `bits` with every bit an independent
/// fair coin, and aggregate them into a [`Counts`] histogram.
///
/// Zero shots yields an empty histogram. The sum of the returned counts
/// always equals `shots` exactly. A non-positive bit width is a caller
/// error, not a recoverable condition.
pub fn sample_uniform(request: &SampleRequest) -> Counts {
    debug_assert!(request.bits >= 1, "bit width must be positive");

    let mut rng = match request.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut counts = Counts::new();

    for _ in 0..request.shots {
        let mut bitstring = String::with_capacity(request.bits as usize);
        for _ in 0..request.bits {
            bitstring.push(if rng.gen_bool(0.5) { '1' } else { '0' });
        }
        counts.insert(bitstring, 1);
    }

    debug!(
        shots = request.shots,
        bits = request.bits,
        seeded = request.seed.is_some(),
        outcomes = counts.len(),
        "uniform sampling complete"
    );

    counts
}

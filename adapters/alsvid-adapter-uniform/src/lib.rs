//! Alsvid Uniform Random Sampler
//!
//! This crate provides the synthetic measurement backend: bitstring
//! histograms drawn from independent fair coins rather than from any
//! circuit semantics. It exists so the counts-aggregation and reporting
//! paths can be exercised with no hardware, credentials, or network.
//!
//! Two surfaces:
//!
//! - [`sample_uniform`] — the pure sampling function, one call per
//!   [`SampleRequest`].
//! - [`UniformBackend`] — the same sampler behind the HAL [`Backend`]
//!   trait, so it participates in the normal job lifecycle.
//!
//! # Determinism
//!
//! A seeded request is bit-for-bit reproducible: the RNG is `StdRng`
//! seeded via `seed_from_u64`, and bits are drawn in a fixed order
//! (per trial, high bit first). An unseeded request draws its state
//! from OS entropy and varies between runs.
//!
//! # Example
//!
//! ```rust
//! use alsvid_adapter_uniform::{sample_uniform, SampleRequest};
//!
//! let counts = sample_uniform(&SampleRequest::with_seed(1000, 2, 42));
//! assert_eq!(counts.total_shots(), 1000);
//! // Expect roughly 250 per outcome; exact values depend on the seed.
//! ```
//!
//! [`Backend`]: alsvid_hal::Backend

mod backend;
mod sampler;

pub use backend::UniformBackend;
pub use sampler::{sample_uniform, SampleRequest};

//! Deterministic RNG feeding the noise kernels.
//!
//! All randomness in the crate flows through [`NoiseRng`] so that rendered
//! noise is reproducible: the same seed yields the same sample stream on
//! every platform. The generator is an explicitly owned object, not a
//! process global, so independent noise streams can be seeded and tested
//! in isolation — or a single stream can be shared across several noise
//! kernels by handing each render call the same `&mut NoiseRng`.

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoroshiro128Plus;

/// 2^-53, scales a 53-bit integer onto [0, 1).
const UNIFORM_SCALE: f64 = 1.0 / (1u64 << 53) as f64;

/// Seeded xoroshiro128+ generator with audio-oriented accessors.
#[derive(Debug, Clone)]
pub struct NoiseRng {
    inner: Xoroshiro128Plus,
}

impl NoiseRng {
    /// Create a generator from an explicit seed. Identical seeds produce
    /// identical streams.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Xoroshiro128Plus::seed_from_u64(seed),
        }
    }

    /// Uniform double in [0, 1): the raw 64-bit output right-shifted by 11
    /// and scaled by 2^-53.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * UNIFORM_SCALE
    }

    /// Uniform sample in [-1, 1).
    #[inline]
    pub fn next_bipolar(&mut self) -> f32 {
        (self.next_uniform() * 2.0 - 1.0) as f32
    }
}

//! Elementwise mixing combinators.
//!
//! These are the pure, stateless glue between the stateful kernels: fill a
//! block with a constant, sum any number of input blocks, or multiply them
//! (ring modulation / VCA-style gain). All of them write every sample of
//! `output` and touch nothing else.
//!
//! Length mismatches between blocks are caller bugs, guarded with debug
//! assertions rather than runtime checks so the render path stays branch
//! free in release builds.

/// Fill every sample of `output` with `value`.
#[inline]
pub fn set(output: &mut [f32], value: f32) {
    output.fill(value);
}

/// Elementwise sum of all `inputs` into `output`.
///
/// Zero inputs yields an all-zero block, so `add` doubles as a clear.
/// Summing can exceed [-1, 1]; follow with a limiter if that matters.
pub fn add(output: &mut [f32], inputs: &[&[f32]]) {
    output.fill(0.0);
    for input in inputs {
        debug_assert_eq!(input.len(), output.len());
        for (o, &i) in output.iter_mut().zip(input.iter()) {
            *o += i;
        }
    }
}

/// Elementwise product of all `inputs` into `output`.
///
/// Zero inputs yields an all-one block (the multiplicative identity).
pub fn multiply(output: &mut [f32], inputs: &[&[f32]]) {
    output.fill(1.0);
    for input in inputs {
        debug_assert_eq!(input.len(), output.len());
        for (o, &i) in output.iter_mut().zip(input.iter()) {
            *o *= i;
        }
    }
}

/// Interleave `left` and `right` frames into `output`.
///
/// `output[2s] = left[s]`, `output[2s+1] = right[s]`; `output` must hold
/// twice as many samples as each input block holds frames.
pub fn stereo_interleave(output: &mut [f32], left: &[f32], right: &[f32]) {
    debug_assert_eq!(left.len(), right.len());
    debug_assert_eq!(output.len(), left.len() * 2);

    for (frame, (&l, &r)) in output.chunks_exact_mut(2).zip(left.iter().zip(right.iter())) {
        frame[0] = l;
        frame[1] = r;
    }
}

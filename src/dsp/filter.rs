use std::f32::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SAMPLE_RATE;

/*
One-pole filter pair sharing a single state variable:

| mode      | output per sample        | passes       | rejects      |
| --------- | ------------------------ | ------------ | ------------ |
| low-pass  | last_value               | below cutoff | above cutoff |
| high-pass | input - last_value       | above cutoff | below cutoff |

Because the highpass output is the input minus the lowpass output, a
lowpass/highpass pair fed the same input and cutoff reconstructs the input
exactly at every sample (complementary split at all frequencies).

The coefficient comes from exact pole matching rather than the usual
small-angle approximation, so the cutoff stays accurate up to Nyquist:

    wc    = 2π · f / sample_rate      (f clamped to [0, Nyquist])
    y     = 1 - cos(wc)
    alpha = -y + sqrt(y · (y + 2))

Cutoff is a per-sample buffer and alpha is recomputed every sample, which
keeps audio-rate cutoff modulation glitch-free. Deliberately not cached.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode {
    LowPass,
    HighPass,
}

/// Compute the one-pole coefficient for a cutoff in Hz.
///
/// Public so callers (and tests) can inspect the response; the render loop
/// calls it once per sample.
#[inline]
pub fn coefficient(cutoff_hz: f32) -> f32 {
    let wc = TAU * (cutoff_hz / SAMPLE_RATE).clamp(0.0, 0.5);
    let y = 1.0 - wc.cos();
    -y + (y * (y + 2.0)).sqrt()
}

pub struct OnePole {
    mode: FilterMode,
    last_value: f32, // the single pole's memory
}

impl OnePole {
    pub fn new(mode: FilterMode) -> Self {
        Self {
            mode,
            last_value: 0.0,
        }
    }

    pub fn lowpass() -> Self {
        Self::new(FilterMode::LowPass)
    }

    pub fn highpass() -> Self {
        Self::new(FilterMode::HighPass)
    }

    /// Filter one block. `cutoff` supplies the cutoff in Hz per sample.
    pub fn render(&mut self, output: &mut [f32], input: &[f32], cutoff: &[f32]) {
        debug_assert_eq!(input.len(), output.len());
        debug_assert_eq!(cutoff.len(), output.len());

        for s in 0..output.len() {
            let alpha = coefficient(cutoff[s]);
            self.last_value += alpha * (input[s] - self.last_value);
            // Flush denormals: near-zero decay tails otherwise hit the
            // denormal slow path on many FPUs.
            self.last_value = self.last_value + 1e-20 - 1e-20;
            output[s] = match self.mode {
                FilterMode::LowPass => self.last_value,
                FilterMode::HighPass => input[s] - self.last_value,
            };
        }
    }

    pub fn reset(&mut self) {
        self.last_value = 0.0;
    }
}

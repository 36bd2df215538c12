use crate::SAMPLE_RATE;

/// Smallest duty the ramps will see. Keeps both denominators (`d` and
/// `1 - d`) finite when the caller asks for a pure saw with duty 0 or 1.
const DUTY_FLOOR: f32 = 1e-4;

/// Variable-duty triangle oscillator.
///
/// A phase accumulator advanced by `frequency / SAMPLE_RATE` per sample,
/// wrapped into [0, 1). Negative frequencies and increments above 1 are
/// allowed, so through-zero FM and hard-sync-like sweeps work. Duty shifts
/// the triangle's peak: 0.5 is symmetric, the extremes approach rising and
/// falling saws.
///
/// Phase is accumulated in f64 so a long render does not drift audibly.
pub struct Triangle {
    phase: f64,
}

impl Triangle {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current phase in [0, 1).
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Render one block. `frequency` is in Hz per sample, `duty` in [0, 1]
    /// per sample (clamped).
    pub fn render(&mut self, output: &mut [f32], frequency: &[f32], duty: &[f32]) {
        debug_assert_eq!(frequency.len(), output.len());
        debug_assert_eq!(duty.len(), output.len());

        let inv_sample_rate = 1.0 / SAMPLE_RATE as f64;

        for s in 0..output.len() {
            self.phase += frequency[s] as f64 * inv_sample_rate;
            self.phase = self.phase.rem_euclid(1.0);

            let d = duty[s].clamp(DUTY_FLOOR, 1.0 - DUTY_FLOOR) as f64;
            output[s] = if self.phase < d {
                (self.phase / d * 2.0 - 1.0) as f32
            } else {
                ((1.0 - self.phase) / (1.0 - d) * 2.0 - 1.0) as f32
            };
        }
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

impl Default for Triangle {
    fn default() -> Self {
        Self::new()
    }
}

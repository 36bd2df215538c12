/// Linked-stereo soft limiter.
///
/// Tracks the running gain divisor needed to keep the louder channel at or
/// under 1.0. Attack is instant (the divisor jumps to the peak the moment a
/// sample exceeds 1, so no peak ever gets through) and release is a 0.99
/// per-sample exponential decay back toward unity, roughly one second at
/// 44.1 kHz. Both channels are divided by the same divisor, preserving the
/// stereo image while the limiter is engaged.
pub struct StereoLimiter {
    divisor: f64, // >= 1 always
}

impl StereoLimiter {
    pub fn new() -> Self {
        Self { divisor: 1.0 }
    }

    /// Current gain divisor (1.0 when the limiter is fully recovered).
    pub fn divisor(&self) -> f64 {
        self.divisor
    }

    /// Limit one stereo block. Returns true if any sample in the block
    /// pushed the divisor above 1 (a diagnostic, not state).
    pub fn render(
        &mut self,
        output_left: &mut [f32],
        output_right: &mut [f32],
        input_left: &[f32],
        input_right: &[f32],
    ) -> bool {
        debug_assert_eq!(input_left.len(), output_left.len());
        debug_assert_eq!(input_right.len(), output_right.len());
        debug_assert_eq!(output_left.len(), output_right.len());

        let mut hit_limiter = false;

        for s in 0..output_left.len() {
            let amplitude = f32::max(input_left[s].abs(), input_right[s].abs());
            if amplitude > 1.0 {
                self.divisor = f64::max(self.divisor, amplitude as f64);
                hit_limiter = true;
            }
            debug_assert!(self.divisor >= 1.0);
            output_left[s] = (input_left[s] as f64 / self.divisor) as f32;
            output_right[s] = (input_right[s] as f64 / self.divisor) as f32;
            self.divisor = f64::max(1.0, self.divisor * 0.99);
        }

        hit_limiter
    }

    pub fn reset(&mut self) {
        self.divisor = 1.0;
    }
}

impl Default for StereoLimiter {
    fn default() -> Self {
        Self::new()
    }
}

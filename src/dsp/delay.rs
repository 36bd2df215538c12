//! Delay line split into independent writer and reader kernels.
//!
//! The circular buffer itself is owned by the caller and passed into every
//! call, so one writer can feed several readers (multi-tap) and the host
//! decides the buffer's lifetime. The scheduling contract is the caller's:
//! the writer for block N must run before any reader for block N, and a
//! reader must never trail the most recent write by more than the buffer
//! length or it reads stale data.

use crate::SAMPLE_RATE;

/// Writing half: copies the input block into the circular buffer.
pub struct DelayWriter {
    write_index: usize,
}

impl DelayWriter {
    pub fn new() -> Self {
        Self { write_index: 0 }
    }

    /// Index the next sample will be written to.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    pub fn render(&mut self, buffer: &mut [f32], input: &[f32]) {
        for &sample in input {
            buffer[self.write_index] = sample;
            self.write_index = (self.write_index + 1) % buffer.len();
        }
    }

    pub fn reset(&mut self) {
        self.write_index = 0;
    }
}

impl Default for DelayWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reading half: taps the buffer at a per-sample variable lag.
///
/// `read_index` is the read origin for the block and is set by the host,
/// typically to the writer's position at the start of the block. The render
/// call advances a local cursor only and does not persist it back; the host
/// re-derives the origin every block.
pub struct DelayReader {
    pub read_index: usize,
    min_delay_samples: usize,
    max_delay_samples: usize,
}

impl DelayReader {
    /// `min_delay_samples`/`max_delay_samples` clamp the per-sample lag.
    /// `max_delay_samples` must stay below the buffer length.
    pub fn new(min_delay_samples: usize, max_delay_samples: usize) -> Self {
        assert!(
            min_delay_samples <= max_delay_samples,
            "delay bounds reversed"
        );
        Self {
            read_index: 0,
            min_delay_samples,
            max_delay_samples,
        }
    }

    /// Read one block. `delay_time` is the desired lag in seconds per
    /// sample, rounded to the nearest whole sample and clamped to the
    /// configured bounds.
    pub fn render(&self, buffer: &[f32], output: &mut [f32], delay_time: &[f32]) {
        debug_assert_eq!(delay_time.len(), output.len());
        debug_assert!(self.max_delay_samples < buffer.len());

        for s in 0..output.len() {
            let desired = (delay_time[s] * SAMPLE_RATE + 0.5).floor() as isize;
            let delay_samples = desired
                .clamp(self.min_delay_samples as isize, self.max_delay_samples as isize)
                as usize;
            let cursor = (self.read_index + s) % buffer.len();
            let index = (cursor + buffer.len() - delay_samples) % buffer.len();
            output[s] = buffer[index];
        }
    }
}

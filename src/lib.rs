pub mod dsp;
pub mod rng; // Deterministic seeded noise source

/// Process-wide sample rate in Hz. Every kernel that works in absolute
/// time or frequency units assumes this rate.
pub const SAMPLE_RATE: f32 = 44_100.0;

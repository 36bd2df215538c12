//! Low-level, block-based DSP kernels.
//!
//! Every kernel here is allocation-free and realtime-safe: it reads
//! caller-owned input blocks, writes exactly one output block (or stereo
//! pair) per call, and carries its internal state across calls so the
//! rendered signal is glitch-free no matter how the caller slices its
//! blocks. Kernels never call each other; a host engine invokes them in
//! whatever data-flow order it wants.

/// Circular delay line split into writer and reader halves.
pub mod delay;
/// Gated attack/decay/sustain/release envelope generator.
pub mod envelope;
/// One-pole lowpass/highpass pair with audio-rate cutoff modulation.
pub mod filter;
/// Linked-stereo soft limiter.
pub mod limiter;
/// Elementwise mixing combinators and stereo interleave.
pub mod mix;
/// White and pink noise generators.
pub mod noise;
/// Variable-duty triangle oscillator.
pub mod oscillator;

pub use envelope::EnvelopeStage;
pub use filter::FilterMode;

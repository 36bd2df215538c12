#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SAMPLE_RATE;

/*
Gated ADSR envelope
===================

A four-stage state machine driven by a per-sample gate buffer rather than
note_on/note_off calls, so a gate edge lands with sample accuracy anywhere
inside a block:

    gate >= 0.5 while in Release          -> Attack
    gate <  0.5 while in any other stage  -> Release

  Level
    1.0 ┐     ╱╲
        │    ╱  ╲___________
    S   │   ╱               ╲
        │  ╱                 ╲
    0.0 └─╱───────────────────╲──→ Time
        Attack Decay  Sustain  Release

Release always ramps from the level at the moment the gate dropped, not
from 1: its per-sample delta is recomputed at the transition as
-value / release_samples, so an early note-off during attack or decay still
reaches 0 in exactly the configured release time without a click.

Stage durations are floored at one sample (max(1, time * sample_rate)), so
zero attack/decay/release are legal and mean "one sample". The default
state is Release at level 0, i.e. silent until the gate first rises.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnvelopeStage {
    Attack,
    Decay,
    Sustain,
    #[default]
    Release,
}

pub struct Adsr {
    // Shape parameters, validated once at construction.
    attack: f64,  // seconds, 0 -> 1
    decay: f64,   // seconds, 1 -> sustain
    sustain: f64, // level held while the gate stays high
    release: f64, // seconds, current level -> 0

    // Persisted per-voice state.
    stage: EnvelopeStage,
    value: f64,
    release_delta: f64, // recomputed at each gate-low transition
}

impl Adsr {
    /// Build an envelope from attack/decay/release times in seconds and a
    /// sustain level in [0, 1].
    ///
    /// # Panics
    /// Negative times or an out-of-range sustain are a broken upstream
    /// contract and panic immediately rather than corrupt the ramps.
    pub fn new(attack: f32, decay: f32, sustain: f32, release: f32) -> Self {
        assert!(
            attack >= 0.0 && decay >= 0.0 && release >= 0.0,
            "envelope times must be non-negative"
        );
        assert!(
            (0.0..=1.0).contains(&sustain),
            "sustain level must be in [0, 1]"
        );

        Self {
            attack: attack as f64,
            decay: decay as f64,
            sustain: sustain as f64,
            release: release as f64,
            stage: EnvelopeStage::Release,
            value: 0.0,
            release_delta: 0.0,
        }
    }

    /// Render one block of envelope values, driven by the gate buffer
    /// (thresholded at 0.5).
    pub fn render(&mut self, output: &mut [f32], gate: &[f32]) {
        debug_assert_eq!(gate.len(), output.len());

        let sample_rate = SAMPLE_RATE as f64;
        let attack_delta = 1.0 / f64::max(1.0, self.attack * sample_rate);
        let decay_delta = -(1.0 - self.sustain) / f64::max(1.0, self.decay * sample_rate);

        for s in 0..output.len() {
            if gate[s] >= 0.5 {
                if self.stage == EnvelopeStage::Release {
                    self.stage = EnvelopeStage::Attack;
                }
            } else if self.stage != EnvelopeStage::Release {
                self.stage = EnvelopeStage::Release;
                self.release_delta = -self.value / f64::max(1.0, self.release * sample_rate);
            }

            match self.stage {
                EnvelopeStage::Attack => {
                    self.value += attack_delta;
                    if self.value >= 1.0 {
                        self.value = 1.0;
                        self.stage = EnvelopeStage::Decay;
                    }
                }
                EnvelopeStage::Decay => {
                    self.value += decay_delta;
                    if self.value <= self.sustain {
                        self.value = self.sustain;
                        self.stage = EnvelopeStage::Sustain;
                    }
                }
                EnvelopeStage::Sustain => {}
                EnvelopeStage::Release => {
                    if self.value > 0.0 {
                        self.value += self.release_delta;
                        if self.value < 0.0 {
                            self.value = 0.0;
                        }
                    }
                }
            }

            debug_assert!((0.0..=1.0).contains(&self.value));
            output[s] = self.value as f32;
        }
    }

    /// Current stage of the state machine.
    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// Current level in [0, 1].
    pub fn value(&self) -> f32 {
        self.value as f32
    }

    /// True while the envelope can still produce non-zero output.
    pub fn is_active(&self) -> bool {
        self.stage != EnvelopeStage::Release || self.value > 0.0
    }

    /// Back to silence: Release at level 0.
    pub fn reset(&mut self) {
        self.stage = EnvelopeStage::Release;
        self.value = 0.0;
        self.release_delta = 0.0;
    }
}

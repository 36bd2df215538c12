use crate::rng::NoiseRng;

/// Fill `output` with white noise in [-1, 1), one RNG draw per sample.
///
/// The generator is injected so the host controls seeding and stream
/// sharing; passing the same `NoiseRng` to several noise kernels advances
/// one deterministic stream across all of them.
pub fn white(rng: &mut NoiseRng, output: &mut [f32]) {
    for sample in output.iter_mut() {
        *sample = rng.next_bipolar();
    }
}

/// Pink (1/f) noise via Paul Kellet's 7-tap recursive approximation.
///
/// Each tap is a leaky integrator of the white source at a different decay
/// rate; their sum approximates a -3 dB/octave spectrum across the audio
/// band. `b6` is deliberately not smoothed — it carries last sample's white
/// draw at low weight, which flattens the response at the top of the band.
/// The coefficients are Kellet's empirically tuned constants.
pub struct PinkNoise {
    b0: f64,
    b1: f64,
    b2: f64,
    b3: f64,
    b4: f64,
    b5: f64,
    b6: f64,
}

impl PinkNoise {
    pub fn new() -> Self {
        Self {
            b0: 0.0,
            b1: 0.0,
            b2: 0.0,
            b3: 0.0,
            b4: 0.0,
            b5: 0.0,
            b6: 0.0,
        }
    }

    pub fn render(&mut self, rng: &mut NoiseRng, output: &mut [f32]) {
        for sample in output.iter_mut() {
            let white = rng.next_uniform() * 2.0 - 1.0;
            self.b0 = 0.99886 * self.b0 + white * 0.0555179;
            self.b1 = 0.99332 * self.b1 + white * 0.0750759;
            self.b2 = 0.96900 * self.b2 + white * 0.1538520;
            self.b3 = 0.86650 * self.b3 + white * 0.3104856;
            self.b4 = 0.55000 * self.b4 + white * 0.5329522;
            self.b5 = -0.7616 * self.b5 - white * 0.0168980;
            *sample = (self.b0
                + self.b1
                + self.b2
                + self.b3
                + self.b4
                + self.b5
                + self.b6
                + white * 0.5362) as f32;
            self.b6 = white * 0.115926;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for PinkNoise {
    fn default() -> Self {
        Self::new()
    }
}

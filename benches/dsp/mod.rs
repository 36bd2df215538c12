//! Per-kernel benchmark groups.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};

use cinder_dsp::dsp::{delay, envelope, filter, limiter, mix, noise, oscillator};
use cinder_dsp::rng::NoiseRng;
use cinder_dsp::SAMPLE_RATE;

use crate::BLOCK_SIZES;

fn ramp(size: usize) -> Vec<f32> {
    (0..size).map(|i| (i as f32 / size as f32) * 2.0 - 1.0).collect()
}

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let a = ramp(size);
        let b = ramp(size);
        let c3 = ramp(size);
        let inputs: [&[f32]; 3] = [&a, &b, &c3];
        let mut out = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("add_3", size), &size, |bench, _| {
            bench.iter(|| mix::add(black_box(&mut out), black_box(&inputs[..])))
        });

        group.bench_with_input(BenchmarkId::new("multiply_3", size), &size, |bench, _| {
            bench.iter(|| mix::multiply(black_box(&mut out), black_box(&inputs[..])))
        });

        let mut stereo = vec![0.0f32; size * 2];
        group.bench_with_input(BenchmarkId::new("interleave", size), &size, |bench, _| {
            bench.iter(|| mix::stereo_interleave(black_box(&mut stereo), black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        let input = ramp(size);
        let mut out = vec![0.0f32; size];

        // Constant cutoff (still recomputes alpha per sample by design).
        let cutoff = vec![1_000.0f32; size];
        let mut lp = filter::OnePole::lowpass();
        group.bench_with_input(BenchmarkId::new("lowpass", size), &size, |bench, _| {
            bench.iter(|| lp.render(black_box(&mut out), black_box(&input), black_box(&cutoff)))
        });

        let mut hp = filter::OnePole::highpass();
        group.bench_with_input(BenchmarkId::new("highpass", size), &size, |bench, _| {
            bench.iter(|| hp.render(black_box(&mut out), black_box(&input), black_box(&cutoff)))
        });

        // Audio-rate cutoff sweep.
        let sweep: Vec<f32> = (0..size).map(|i| 100.0 + i as f32 * 40.0).collect();
        let mut swept = filter::OnePole::lowpass();
        group.bench_with_input(BenchmarkId::new("lowpass_swept", size), &size, |bench, _| {
            bench.iter(|| swept.render(black_box(&mut out), black_box(&input), black_box(&sweep)))
        });
    }

    group.finish();
}

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let frequency = vec![440.0f32; size];
        let duty = vec![0.5f32; size];
        let mut out = vec![0.0f32; size];

        let mut osc = oscillator::Triangle::new();
        group.bench_with_input(BenchmarkId::new("triangle", size), &size, |bench, _| {
            bench.iter(|| osc.render(black_box(&mut out), black_box(&frequency), black_box(&duty)))
        });
    }

    group.finish();
}

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut out = vec![0.0f32; size];

        let gate_high = vec![1.0f32; size];
        let mut env = envelope::Adsr::new(0.1, 0.1, 0.7, 0.3);
        group.bench_with_input(BenchmarkId::new("gate_high", size), &size, |bench, _| {
            bench.iter(|| env.render(black_box(&mut out), black_box(&gate_high)))
        });

        // Gate edge in the middle of every block: worst case for the
        // transition branches.
        let gate_edge: Vec<f32> = (0..size).map(|s| if s < size / 2 { 1.0 } else { 0.0 }).collect();
        let mut env = envelope::Adsr::new(0.01, 0.01, 0.5, 0.01);
        group.bench_with_input(BenchmarkId::new("gate_edge", size), &size, |bench, _| {
            bench.iter(|| env.render(black_box(&mut out), black_box(&gate_edge)))
        });
    }

    group.finish();
}

pub fn bench_limiter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/limiter");

    for &size in BLOCK_SIZES {
        let quiet = vec![0.5f32; size];
        let hot: Vec<f32> = (0..size).map(|i| ((i as f32 * 0.3).sin()) * 2.5).collect();
        let mut out_l = vec![0.0f32; size];
        let mut out_r = vec![0.0f32; size];

        let mut limiter = limiter::StereoLimiter::new();
        group.bench_with_input(BenchmarkId::new("quiet", size), &size, |bench, _| {
            bench.iter(|| {
                limiter.render(
                    black_box(&mut out_l),
                    black_box(&mut out_r),
                    black_box(&quiet),
                    black_box(&quiet),
                )
            })
        });

        let mut limiter = limiter::StereoLimiter::new();
        group.bench_with_input(BenchmarkId::new("engaged", size), &size, |bench, _| {
            bench.iter(|| {
                limiter.render(
                    black_box(&mut out_l),
                    black_box(&mut out_r),
                    black_box(&hot),
                    black_box(&hot),
                )
            })
        });
    }

    group.finish();
}

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; 1 << 15];
        let input = ramp(size);
        let mut out = vec![0.0f32; size];
        let delay_time = vec![0.25f32 * size as f32 / SAMPLE_RATE; size];

        let mut writer = delay::DelayWriter::new();
        let mut reader = delay::DelayReader::new(1, (1 << 15) - 1);

        group.bench_with_input(BenchmarkId::new("write_read", size), &size, |bench, _| {
            bench.iter(|| {
                reader.read_index = writer.write_index();
                writer.render(black_box(&mut buffer), black_box(&input));
                reader.render(black_box(&buffer), black_box(&mut out), black_box(&delay_time));
            })
        });
    }

    group.finish();
}

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/noise");

    for &size in BLOCK_SIZES {
        let mut rng = NoiseRng::seeded(1);
        let mut out = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("white", size), &size, |bench, _| {
            bench.iter(|| noise::white(black_box(&mut rng), black_box(&mut out)))
        });

        let mut pink = noise::PinkNoise::new();
        group.bench_with_input(BenchmarkId::new("pink", size), &size, |bench, _| {
            bench.iter(|| pink.render(black_box(&mut rng), black_box(&mut out)))
        });
    }

    group.finish();
}

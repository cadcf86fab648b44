use ndarray::{Array1, array};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsynth_core::{Event, Mode, TimeSeries};
use tsynth_generators::prelude::*;
use tsynth_sampler::{Grid, TimeSampler};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn irregular_times(seed: u64) -> Array1<f64> {
    TimeSampler::new(0.0, 20.0)
        .unwrap()
        .sample_irregular_time(Grid::Points(500), 50.0, &mut rng(seed))
        .unwrap()
}

fn assert_strictly_increasing(times: &Array1<f64>) {
    assert!(times.windows(2).into_iter().all(|w| w[0] < w[1]));
}

#[test]
fn pseudo_periodic_with_white_noise_on_irregular_times() {
    let times = irregular_times(1);
    assert_eq!(times.len(), 250);
    assert_strictly_increasing(&times);

    let mut signal = PseudoPeriodic::new(
        pseudo_periodic::Config {
            frequency: 2.0,
            frequency_sd: 0.01,
            amplitude_sd: 0.5,
            ..pseudo_periodic::Config::default()
        },
        rng(2),
    )
    .unwrap();
    let mut noise = GaussianNoise::zero_mean(0.3, rng(3)).unwrap();

    let sampled = TimeSeries::new(&mut signal)
        .with_noise(&mut noise)
        .sample(times.view())
        .unwrap();

    assert_eq!(sampled.mode, Mode::Vectorized);
    assert_eq!(sampled.times, times);
    assert_eq!(sampled.samples, &sampled.signals + &sampled.errors);
    assert!(sampled.samples.iter().all(|x| x.is_finite()));
}

#[test]
fn red_noise_falls_back_to_pointwise() {
    let times = irregular_times(4);

    let mut signal = Sinusoidal::new(sinusoidal::Config::default()).unwrap();
    let mut noise = RedNoise::new(red::Config { std: 0.2, tau: 0.5 }, rng(5)).unwrap();

    let sampled = TimeSeries::new(&mut signal)
        .with_noise(&mut noise)
        .sample(times.view())
        .unwrap();

    assert_eq!(sampled.mode, Mode::Pointwise);
    assert_eq!(sampled.len(), times.len());
    assert_eq!(sampled.signals.len(), times.len());
    assert_eq!(sampled.errors.len(), times.len());
    for i in 0..sampled.len() {
        assert_eq!(sampled.samples[i], sampled.signals[i] + sampled.errors[i]);
    }
}

#[test]
fn autoregressive_window_tracks_the_signal() {
    let times = TimeSampler::default()
        .sample_regular_time(Grid::Points(100))
        .unwrap();

    let mut signal = AutoRegressive::new(auto_regressive::Config::default(), rng(6)).unwrap();
    let mut noise = GaussianNoise::zero_mean(0.1, rng(7)).unwrap();

    let sampled = TimeSeries::new(&mut signal)
        .with_noise(&mut noise)
        .sample(times.view())
        .unwrap();

    assert_eq!(sampled.mode, Mode::Pointwise);
    assert_eq!(sampled.len(), 100);

    // The window holds the last two noiseless values, oldest first.
    let n = sampled.len();
    let window: Vec<f64> = signal.window().iter().copied().collect();
    assert_eq!(window, vec![sampled.signals[n - 2], sampled.signals[n - 1]]);
}

#[test]
fn car_handles_irregular_gaps() {
    let times = irregular_times(8);

    let mut signal = Car::new(car::Config::default(), rng(9)).unwrap();
    let sampled = TimeSeries::new(&mut signal).sample(times.view()).unwrap();

    assert_eq!(sampled.mode, Mode::Pointwise);
    assert_eq!(sampled.signals[0], 0.01);
    assert!(sampled.errors.iter().all(|&e| e == 0.0));
    assert_eq!(
        signal.previous(),
        Some((times[times.len() - 1], sampled.signals[times.len() - 1]))
    );
}

#[test]
fn narma_with_mixed_noise() {
    let times = TimeSampler::default()
        .sample_regular_time(Grid::Points(200))
        .unwrap();

    let mut signal = Narma::new(narma::Config::default(), rng(10)).unwrap();
    let mut noise = MixedNoise::default()
        .with(GaussianNoise::zero_mean(0.05, rng(11)).unwrap())
        .with(RedNoise::new(red::Config::default(), rng(12)).unwrap());

    let sampled = TimeSeries::new(&mut signal)
        .with_noise(&mut noise)
        .sample(times.view())
        .unwrap();

    assert_eq!(sampled.mode, Mode::Pointwise);
    assert_eq!(sampled.len(), 200);
    assert!(sampled.signals.iter().take(10).all(|&y| y >= 0.1));
}

#[test]
fn observer_sees_every_point_in_order() {
    let times = array![0.0, 0.5, 1.25, 3.0];
    let mut signal = Sinusoidal::new(sinusoidal::Config::default()).unwrap();
    let mut noise = GaussianNoise::zero_mean(1.0, rng(13)).unwrap();

    let mut events: Vec<Event> = Vec::new();
    let sampled = TimeSeries::new(&mut signal)
        .with_noise(&mut noise)
        .sample_observed(times.view(), |event: &Event| events.push(*event))
        .unwrap();

    assert_eq!(events.len(), 4);
    for (i, event) in events.iter().enumerate() {
        assert_eq!(event.index, i);
        assert_eq!(event.time, times[i]);
        assert_eq!(event.sample, sampled.samples[i]);
        assert_eq!(event.error, sampled.errors[i]);
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let times = irregular_times(14);
        let mut signal = PseudoPeriodic::new(pseudo_periodic::Config::default(), rng(15)).unwrap();
        let mut noise = RedNoise::new(red::Config::default(), rng(16)).unwrap();
        TimeSeries::new(&mut signal)
            .with_noise(&mut noise)
            .sample(times.view())
            .unwrap()
    };

    assert_eq!(run(), run());
}

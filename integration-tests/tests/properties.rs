//! Properties that hold for any seed and any valid sampling parameters.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tsynth_core::{Mode, TimeSeries};
use tsynth_generators::prelude::*;
use tsynth_sampler::{Grid, TimeSampler};

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Bounds with a span large enough for any grid drawn below.
fn arb_bounds() -> impl Strategy<Value = (f64, f64)> {
    (-100.0..100.0_f64, 1.0..100.0_f64).prop_map(|(start, span)| (start, start + span))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The regular grid has `n` strictly increasing points spanning the bounds.
    #[test]
    fn prop_regular_grid_spans_bounds((start, stop) in arb_bounds(), n in 2usize..500) {
        let times = TimeSampler::new(start, stop)
            .unwrap()
            .sample_regular_time(Grid::Points(n))
            .unwrap();

        prop_assert_eq!(times.len(), n);
        prop_assert_eq!(times[0], start);
        prop_assert_eq!(times[n - 1], stop);
        prop_assert!(times.windows(2).into_iter().all(|w| w[0] < w[1]));
    }

    /// An irregular sample keeps `round(n * p / 100)` grid points in order.
    #[test]
    fn prop_irregular_is_ordered_subset(
        (start, stop) in arb_bounds(),
        n in 1usize..400,
        keep in 1.0..=100.0_f64,
        seed in any::<u64>(),
    ) {
        let sampler = TimeSampler::new(start, stop).unwrap();
        let regular = sampler.sample_regular_time(Grid::Points(n)).unwrap();
        let irregular = sampler
            .sample_irregular_time(Grid::Points(n), keep, &mut rng(seed))
            .unwrap();

        let expected = ((n as f64) * keep / 100.0).round() as usize;
        prop_assert_eq!(irregular.len(), expected.min(n));
        prop_assert!(irregular.windows(2).into_iter().all(|w| w[0] < w[1]));

        let mut grid = regular.iter();
        for t in &irregular {
            prop_assert!(grid.any(|g| g == t), "{} is not a grid point", t);
        }
    }

    /// Vectorized series values are exactly signal plus noise.
    #[test]
    fn prop_vectorized_sum_is_exact(n in 1usize..200, std in 0.0..2.0_f64, seed in any::<u64>()) {
        let times = TimeSampler::default().sample_regular_time(Grid::Points(n)).unwrap();
        let mut signal = PseudoPeriodic::new(pseudo_periodic::Config::default(), rng(seed)).unwrap();
        let mut noise = GaussianNoise::zero_mean(std, rng(seed ^ 1)).unwrap();

        let sampled = TimeSeries::new(&mut signal)
            .with_noise(&mut noise)
            .sample(times.view())
            .unwrap();

        prop_assert_eq!(sampled.mode, Mode::Vectorized);
        for i in 0..sampled.len() {
            prop_assert_eq!(sampled.samples[i], sampled.signals[i] + sampled.errors[i]);
        }
    }

    /// Pointwise series values are exactly signal plus noise.
    #[test]
    fn prop_pointwise_sum_is_exact(n in 1usize..200, seed in any::<u64>()) {
        let times = TimeSampler::default().sample_regular_time(Grid::Points(n)).unwrap();
        let mut signal = AutoRegressive::new(auto_regressive::Config::default(), rng(seed)).unwrap();
        let mut noise = RedNoise::new(red::Config::default(), rng(seed ^ 1)).unwrap();

        let sampled = TimeSeries::new(&mut signal)
            .with_noise(&mut noise)
            .sample(times.view())
            .unwrap();

        prop_assert_eq!(sampled.mode, Mode::Pointwise);
        prop_assert_eq!(sampled.len(), n);
        for i in 0..n {
            prop_assert_eq!(sampled.samples[i], sampled.signals[i] + sampled.errors[i]);
        }
    }
}

use std::collections::VecDeque;

use rand::Rng;
use tsynth_core::{Generator, SignalGenerator};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    ParamError,
    draw::normal,
    error::{finite, std_dev},
};

/// Parameters of an [`AutoRegressive`] signal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    /// Coefficients `[φ1, φ2, ..., φp]`; `φ1` weights the most recent value.
    pub coefficients: Vec<f64>,

    /// Standard deviation of the innovation added at each step.
    pub sigma: f64,

    /// The `p` values preceding the first sample, oldest first.
    ///
    /// Defaults to zeros.
    pub start_value: Option<Vec<f64>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            coefficients: vec![1.5, -0.75],
            sigma: 0.5,
            start_value: None,
        }
    }
}

/// Autoregressive process of order `p`:
///
/// ```text
/// y_t = φ1 * y_{t-1} + φ2 * y_{t-2} + ... + φp * y_{t-p} + N(0, sigma²)
/// ```
///
/// The generator keeps the last `p` values as a window. Each call to
/// [`sample_next`](Generator::sample_next) computes the next value from the
/// window, drops the oldest entry, and appends the new one. Timestamps are
/// not used, so the process assumes regular sampling.
#[derive(Debug, Clone)]
pub struct AutoRegressive<R> {
    /// Coefficients aligned with `window`: `weights[i]` multiplies `window[i]`.
    weights: Vec<f64>,
    sigma: f64,
    window: VecDeque<f64>,
    rng: R,
}

impl<R: Rng> AutoRegressive<R> {
    /// Creates an AR(p) process that draws its innovations from `rng`.
    ///
    /// # Errors
    ///
    /// - [`ParamError::EmptyCoefficients`] if no coefficients are given.
    /// - [`ParamError::DimensionMismatch`] if a starting window is given whose
    ///   length differs from the number of coefficients.
    /// - [`ParamError::NonFinite`] or [`ParamError::InvalidStdDev`] for
    ///   non-finite coefficients or an invalid `sigma`.
    pub fn new(config: Config, rng: R) -> Result<Self, ParamError> {
        let Config {
            coefficients,
            sigma,
            start_value,
        } = config;

        let order = coefficients.len();
        if order == 0 {
            return Err(ParamError::EmptyCoefficients);
        }
        for &phi in &coefficients {
            finite("coefficient", phi)?;
        }
        let sigma = std_dev(sigma)?;

        let window = match start_value {
            Some(values) if values.len() != order => {
                return Err(ParamError::DimensionMismatch {
                    expected: order,
                    window: values.len(),
                });
            }
            Some(values) => {
                for &value in &values {
                    finite("start value", value)?;
                }
                VecDeque::from(values)
            }
            None => VecDeque::from(vec![0.0; order]),
        };

        // The window is oldest first, so φp lines up with window[0].
        let mut weights = coefficients;
        weights.reverse();

        Ok(Self {
            weights,
            sigma,
            window,
            rng,
        })
    }

    /// Returns the order `p` of the process.
    #[must_use]
    pub fn order(&self) -> usize {
        self.weights.len()
    }

    /// Returns the last `p` values, oldest first.
    #[must_use]
    pub fn window(&self) -> &VecDeque<f64> {
        &self.window
    }
}

impl<R: Rng> Generator for AutoRegressive<R> {
    fn kind(&self) -> &'static str {
        "autoregressive"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(&mut self, _time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        let mean: f64 = self
            .window
            .iter()
            .zip(&self.weights)
            .map(|(value, weight)| value * weight)
            .sum();
        let value = mean + normal(&mut self.rng, 0.0, self.sigma);

        self.window.pop_front();
        self.window.push_back(value);
        value
    }
}

impl<R: Rng> SignalGenerator for AutoRegressive<R> {}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tsynth_core::UnsupportedOperation;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn noiseless(coefficients: Vec<f64>, start_value: Vec<f64>) -> AutoRegressive<ChaCha8Rng> {
        let config = Config {
            coefficients,
            sigma: 0.0,
            start_value: Some(start_value),
        };
        AutoRegressive::new(config, test_rng()).unwrap()
    }

    #[test]
    fn identity_coefficient_repeats_the_start_value() {
        let mut ar = noiseless(vec![1.0], vec![5.0]);

        for t in 0..10 {
            assert_eq!(ar.sample_next(f64::from(t), &[], &[]), 5.0);
            assert_eq!(ar.window(), &VecDeque::from(vec![5.0]));
        }
    }

    #[test]
    fn first_coefficient_weights_the_most_recent_value() {
        // y_t = 1.0 * y_{t-1} + 10.0 * y_{t-2}
        let mut ar = noiseless(vec![1.0, 10.0], vec![2.0, 3.0]);

        // 1 * 3 + 10 * 2
        assert_eq!(ar.sample_next(0.0, &[], &[]), 23.0);
        assert_eq!(ar.window(), &VecDeque::from(vec![3.0, 23.0]));

        // 1 * 23 + 10 * 3
        assert_eq!(ar.sample_next(1.0, &[], &[]), 53.0);
        assert_eq!(ar.window(), &VecDeque::from(vec![23.0, 53.0]));
    }

    #[test]
    fn window_defaults_to_zeros() {
        let config = Config {
            coefficients: vec![0.5, 0.25, 0.125],
            sigma: 0.0,
            start_value: None,
        };
        let mut ar = AutoRegressive::new(config, test_rng()).unwrap();

        assert_eq!(ar.order(), 3);
        assert_eq!(ar.window(), &VecDeque::from(vec![0.0; 3]));
        assert_eq!(ar.sample_next(0.0, &[], &[]), 0.0);
    }

    #[test]
    fn innovations_enter_the_window() {
        let config = Config {
            coefficients: vec![0.5],
            sigma: 1.0,
            start_value: Some(vec![4.0]),
        };
        let mut ar = AutoRegressive::new(config, test_rng()).unwrap();

        let first = ar.sample_next(0.0, &[], &[]);
        assert_eq!(ar.window()[0], first);

        let second = ar.sample_next(1.0, &[], &[]);
        assert_eq!(ar.window()[0], second);
        assert!(first != 2.0, "innovation should perturb the value");
    }

    #[test]
    fn stable_process_stays_bounded() {
        let mut ar = AutoRegressive::new(Config::default(), test_rng()).unwrap();

        let values: Vec<f64> = (0..2_000)
            .map(|t| ar.sample_next(f64::from(t), &[], &[]))
            .collect();
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        assert!(values.iter().all(|v| v.abs() < 20.0));
        assert_abs_diff_eq!(mean, 0.0, epsilon = 0.5);
    }

    #[test]
    fn mismatched_window_is_rejected() {
        let config = Config {
            coefficients: vec![0.5, 0.2],
            sigma: 0.5,
            start_value: Some(vec![1.0]),
        };

        let err = AutoRegressive::new(config, test_rng()).unwrap_err();

        assert_eq!(
            err,
            ParamError::DimensionMismatch {
                expected: 2,
                window: 1
            }
        );
    }

    #[test]
    fn empty_coefficients_are_rejected() {
        let config = Config {
            coefficients: vec![],
            ..Config::default()
        };

        assert_eq!(
            AutoRegressive::new(config, test_rng()).unwrap_err(),
            ParamError::EmptyCoefficients
        );
    }

    #[test]
    fn vectorized_sampling_is_unsupported() {
        let mut ar = AutoRegressive::new(Config::default(), test_rng()).unwrap();

        assert!(!ar.is_vectorizable());
        assert_eq!(
            ar.sample_vectorized(array![0.0, 1.0].view()),
            Err(UnsupportedOperation::new("autoregressive"))
        );
    }
}

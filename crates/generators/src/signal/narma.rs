use std::collections::VecDeque;

use rand::Rng;
use tsynth_core::{Generator, SignalGenerator};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{ParamError, error::finite};

/// Upper bound of the uniform driving input.
const INPUT_MAX: f64 = 0.5;

/// Parameters of a [`Narma`] signal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    pub order: usize,
    /// Coefficients `[a0, a1, a2, a3]` of the recurrence.
    pub coefficients: [f64; 4],
    /// The `order` values preceding the first sample, oldest first.
    ///
    /// Defaults to zeros.
    pub initial_condition: Option<Vec<f64>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            order: 10,
            coefficients: [0.3, 0.05, 1.5, 0.1],
            initial_condition: None,
        }
    }
}

/// Nonlinear autoregressive moving average process of order `n`.
///
/// Driven by inputs `u ~ U(0, 0.5)`:
///
/// ```text
/// y_t = a0 * y_{t-1} + a1 * y_{t-1} * (y_{t-1} + ... + y_{t-n}) + a2 * u_{t-n} * u_t + a3
/// ```
///
/// The generator keeps the last `n` outputs and the last `n` inputs. The
/// inputs before the first sample are drawn at construction.
#[derive(Debug, Clone)]
pub struct Narma<R> {
    coefficients: [f64; 4],
    values: VecDeque<f64>,
    inputs: VecDeque<f64>,
    rng: R,
}

impl<R: Rng> Narma<R> {
    /// Creates a NARMA process that draws its inputs from `rng`.
    ///
    /// # Errors
    ///
    /// - [`ParamError::InvalidOrder`] if `order` is zero.
    /// - [`ParamError::DimensionMismatch`] if an initial condition is given
    ///   whose length differs from `order`.
    /// - [`ParamError::NonFinite`] for non-finite coefficients or initial
    ///   values.
    pub fn new(config: Config, mut rng: R) -> Result<Self, ParamError> {
        let Config {
            order,
            coefficients,
            initial_condition,
        } = config;

        if order == 0 {
            return Err(ParamError::InvalidOrder);
        }
        for &a in &coefficients {
            finite("coefficient", a)?;
        }

        let values = match initial_condition {
            Some(values) if values.len() != order => {
                return Err(ParamError::DimensionMismatch {
                    expected: order,
                    window: values.len(),
                });
            }
            Some(values) => {
                for &value in &values {
                    finite("initial condition", value)?;
                }
                VecDeque::from(values)
            }
            None => VecDeque::from(vec![0.0; order]),
        };

        let inputs = (0..order)
            .map(|_| rng.random_range(0.0..INPUT_MAX))
            .collect();

        Ok(Self {
            coefficients,
            values,
            inputs,
            rng,
        })
    }

    /// Returns the order `n` of the process.
    #[must_use]
    pub fn order(&self) -> usize {
        self.values.len()
    }
}

impl<R: Rng> Generator for Narma<R> {
    fn kind(&self) -> &'static str {
        "narma"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(&mut self, _time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        let [a0, a1, a2, a3] = self.coefficients;

        let input = self.rng.random_range(0.0..INPUT_MAX);
        let last = self.values.back().copied().unwrap_or_default();
        let window_sum: f64 = self.values.iter().sum();
        let oldest_input = self.inputs.front().copied().unwrap_or_default();

        let value = a0 * last + a1 * last * window_sum + a2 * oldest_input * input + a3;

        self.values.pop_front();
        self.values.push_back(value);
        self.inputs.pop_front();
        self.inputs.push_back(input);
        value
    }
}

impl<R: Rng> SignalGenerator for Narma<R> {}

use rand::Rng;
use tsynth_core::{Generator, SignalGenerator};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    ParamError,
    draw::normal,
    error::{finite, std_dev},
};

/// Parameters of a [`Car`] signal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    /// Decay per unit time, in `(0, 1]`.
    pub ar_param: f64,
    pub sigma: f64,
    pub start_value: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ar_param: 1.0,
            sigma: 0.5,
            start_value: 0.01,
        }
    }
}

/// Continuous-time autoregressive process of order one.
///
/// The first sample is `start_value`. Each later sample, a time `dt` after
/// the previous one, is
///
/// ```text
/// y = φ^dt * y_prev + N(0, sigma²) * sqrt(1 - φ^(2 dt))
/// ```
///
/// Unlike [`AutoRegressive`](super::AutoRegressive), the decay depends on the
/// gap between timestamps, so the process suits irregular sampling.
/// Timestamps must be non-decreasing.
#[derive(Debug, Clone)]
pub struct Car<R> {
    config: Config,
    previous: Option<(f64, f64)>,
    rng: R,
}

impl<R: Rng> Car<R> {
    /// Creates a CAR(1) process that draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidCoefficient`] if `ar_param` is outside
    /// `(0, 1]`, or an error for an invalid `sigma` or `start_value`.
    pub fn new(config: Config, rng: R) -> Result<Self, ParamError> {
        if !(config.ar_param > 0.0 && config.ar_param <= 1.0) {
            return Err(ParamError::InvalidCoefficient(config.ar_param));
        }
        std_dev(config.sigma)?;
        finite("start value", config.start_value)?;

        Ok(Self {
            config,
            previous: None,
            rng,
        })
    }

    /// Returns the time and value of the last sample, if any.
    #[must_use]
    pub fn previous(&self) -> Option<(f64, f64)> {
        self.previous
    }
}

impl<R: Rng> Generator for Car<R> {
    fn kind(&self) -> &'static str {
        "continuous autoregressive"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(&mut self, time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        let Config { ar_param, sigma, .. } = self.config;

        let value = match self.previous {
            None => self.config.start_value,
            Some((previous_time, previous_value)) => {
                let dt = time - previous_time;
                debug_assert!(dt >= 0.0, "timestamps must be non-decreasing");

                let decay = ar_param.powf(dt);
                let spread = (1.0 - ar_param.powf(2.0 * dt)).sqrt();
                decay * previous_value + normal(&mut self.rng, 0.0, sigma) * spread
            }
        };

        self.previous = Some((time, value));
        value
    }
}

impl<R: Rng> SignalGenerator for Car<R> {}

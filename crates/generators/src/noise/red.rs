use rand::Rng;
use tsynth_core::{Generator, NoiseGenerator};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{ParamError, draw::normal, error::std_dev};

/// Parameters of [`RedNoise`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    pub std: f64,
    /// Correlation time constant.
    pub tau: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { std: 1.0, tau: 0.2 }
    }
}

/// Exponentially correlated (red) noise.
///
/// The first value is drawn from `N(0, std²)`. A later value, `dt` after the
/// previous one, is
///
/// ```text
/// x = e^(-dt/tau) * x_prev + sqrt(1 - e^(-2 dt/tau)) * N(0, std²)
/// ```
///
/// which keeps the marginal distribution at `N(0, std²)` for any spacing.
/// Timestamps must be non-decreasing.
#[derive(Debug, Clone)]
pub struct RedNoise<R> {
    std: f64,
    tau: f64,
    previous: Option<(f64, f64)>,
    rng: R,
}

impl<R: Rng> RedNoise<R> {
    /// Creates red noise that draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidStdDev`] for an invalid `std`, or
    /// [`ParamError::InvalidTimescale`] if `tau` is not finite and positive.
    pub fn new(config: Config, rng: R) -> Result<Self, ParamError> {
        let std = std_dev(config.std)?;
        if !config.tau.is_finite() || config.tau <= 0.0 {
            return Err(ParamError::InvalidTimescale(config.tau));
        }

        Ok(Self {
            std,
            tau: config.tau,
            previous: None,
            rng,
        })
    }
}

impl<R: Rng> Generator for RedNoise<R> {
    fn kind(&self) -> &'static str {
        "red noise"
    }

    fn is_vectorizable(&self) -> bool {
        false
    }

    fn sample_next(&mut self, time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        let innovation = normal(&mut self.rng, 0.0, self.std);

        let value = match self.previous {
            None => innovation,
            Some((previous_time, previous_value)) => {
                let dt = time - previous_time;
                debug_assert!(dt >= 0.0, "timestamps must be non-decreasing");

                let decay = (-dt / self.tau).exp();
                decay * previous_value + (1.0 - decay * decay).sqrt() * innovation
            }
        };

        self.previous = Some((time, value));
        value
    }
}

impl<R: Rng> NoiseGenerator for RedNoise<R> {}

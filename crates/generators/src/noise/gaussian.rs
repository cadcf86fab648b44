use ndarray::{Array1, ArrayView1};
use rand::Rng;
use tsynth_core::{Generator, NoiseGenerator, UnsupportedOperation};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    ParamError,
    draw::{normal, normal_batch},
    error::{finite, std_dev},
};

/// Parameters of [`GaussianNoise`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    pub mean: f64,
    pub std: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mean: 0.0,
            std: 1.0,
        }
    }
}

/// White noise: independent draws from `N(mean, std²)`.
///
/// The noise has no memory, so both sampling paths are available and the
/// batch path draws all values at once.
#[derive(Debug, Clone)]
pub struct GaussianNoise<R> {
    mean: f64,
    std: f64,
    rng: R,
}

impl<R: Rng> GaussianNoise<R> {
    /// Creates white noise that draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidStdDev`] if `std` is negative or not
    /// finite, or [`ParamError::NonFinite`] if `mean` is not finite.
    pub fn new(config: Config, rng: R) -> Result<Self, ParamError> {
        Ok(Self {
            mean: finite("mean", config.mean)?,
            std: std_dev(config.std)?,
            rng,
        })
    }

    /// Convenience constructor for zero-mean noise.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidStdDev`] if `std` is negative or not
    /// finite.
    pub fn zero_mean(std: f64, rng: R) -> Result<Self, ParamError> {
        Self::new(Config { mean: 0.0, std }, rng)
    }
}

impl<R: Rng> Generator for GaussianNoise<R> {
    fn kind(&self) -> &'static str {
        "gaussian noise"
    }

    fn is_vectorizable(&self) -> bool {
        true
    }

    fn sample_next(&mut self, _time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        normal(&mut self.rng, self.mean, self.std)
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        Ok(normal_batch(&mut self.rng, times.len(), self.mean, self.std))
    }
}

impl<R: Rng> NoiseGenerator for GaussianNoise<R> {}

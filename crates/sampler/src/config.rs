use ndarray::Array1;
use rand::Rng;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{ConfigError, Grid, TimeSampler, validate_keep_percentage};

/// Every time-sampling parameter in one value.
///
/// Exactly one of `num_points` and `resolution` must be set. A
/// `keep_percentage` below 100 drops a random share of the grid points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct SamplingConfig {
    pub start_time: f64,
    pub stop_time: f64,
    pub num_points: Option<usize>,
    pub resolution: Option<f64>,
    pub keep_percentage: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            stop_time: 10.0,
            num_points: None,
            resolution: None,
            keep_percentage: 100.0,
        }
    }
}

impl SamplingConfig {
    /// Builds the sampler for the configured bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeBounds`] if the bounds are invalid.
    pub fn sampler(&self) -> Result<TimeSampler, ConfigError> {
        TimeSampler::new(self.start_time, self.stop_time)
    }

    /// Resolves the configured grid.
    ///
    /// # Errors
    ///
    /// Returns an error unless exactly one of `num_points` and `resolution` is
    /// set to a valid value.
    pub fn grid(&self) -> Result<Grid, ConfigError> {
        match (self.num_points, self.resolution) {
            (Some(n), None) => Grid::Points(n).validate(),
            (None, Some(r)) => Grid::Resolution(r).validate(),
            (None, None) => Err(ConfigError::GridUnspecified),
            (Some(_), Some(_)) => Err(ConfigError::GridAmbiguous),
        }
    }

    /// Validates the whole config without sampling.
    ///
    /// # Errors
    ///
    /// Returns the first invalid parameter found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sampler()?;
        self.grid()?;
        validate_keep_percentage(self.keep_percentage)?;
        Ok(())
    }

    /// Produces the configured time vector.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is invalid.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Array1<f64>, ConfigError> {
        self.validate()?;
        self.sampler()?
            .sample_irregular_time(self.grid()?, self.keep_percentage, rng)
    }
}

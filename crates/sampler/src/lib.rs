//! Time grids for tsynth.
//!
//! A [`TimeSampler`] holds the bounds of a sampling window and produces
//! ordered time vectors inside it:
//!
//! - [`TimeSampler::sample_regular_time`] lays out a regular [`Grid`]
//! - [`TimeSampler::sample_irregular_time`] lays out the same grid and keeps a
//!   random, time-ordered subset of its points
//!
//! [`SamplingConfig`] bundles every parameter into one value that can be
//! loaded from a config file when the `serde-derive` feature is enabled.
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tsynth_sampler::{Grid, TimeSampler};
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! let sampler = TimeSampler::new(0.0, 20.0).unwrap();
//!
//! let times = sampler.sample_irregular_time(Grid::Points(500), 50.0, &mut rng).unwrap();
//! assert_eq!(times.len(), 250);
//! ```

mod config;
mod error;
mod grid;

pub use config::SamplingConfig;
pub use error::ConfigError;
pub use grid::{Grid, MAX_POINTS};

use ndarray::Array1;
use rand::{Rng, seq::index};

/// Produces regular or irregular time vectors within fixed bounds.
///
/// A sampler is immutable and stateless; the only state consumed by
/// [`sample_irregular_time`](Self::sample_irregular_time) is the caller's
/// random source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSampler {
    start_time: f64,
    stop_time: f64,
}

impl Default for TimeSampler {
    fn default() -> Self {
        Self {
            start_time: 0.0,
            stop_time: 10.0,
        }
    }
}

impl TimeSampler {
    /// Creates a sampler over `[start_time, stop_time]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::TimeBounds`] if either bound is non-finite or
    /// `stop_time <= start_time`.
    pub fn new(start_time: f64, stop_time: f64) -> Result<Self, ConfigError> {
        if !start_time.is_finite() || !stop_time.is_finite() || stop_time <= start_time {
            return Err(ConfigError::TimeBounds {
                start: start_time,
                stop: stop_time,
            });
        }

        Ok(Self {
            start_time,
            stop_time,
        })
    }

    /// Returns the first time of the window.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Returns the end of the window.
    #[must_use]
    pub fn stop_time(&self) -> f64 {
        self.stop_time
    }

    /// Returns a strictly increasing regular grid starting at `start_time`.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid parameter is invalid, if the grid would
    /// exceed [`MAX_POINTS`], or with [`ConfigError::Unresolvable`] if the
    /// spacing is too fine for `f64` to keep the points distinct.
    pub fn sample_regular_time(&self, grid: Grid) -> Result<Array1<f64>, ConfigError> {
        grid.layout(self.start_time, self.stop_time)
    }

    /// Returns a random, time-ordered subset of a regular grid.
    ///
    /// The grid of `n` points is laid out as in
    /// [`sample_regular_time`](Self::sample_regular_time), then
    /// `round(n * keep_percentage / 100)` of its points are chosen without
    /// replacement and returned in ascending order. Keeping every point
    /// returns the full grid without drawing from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeepPercentage`] if `keep_percentage` is not in
    /// `(0, 100]`, or an error if the grid parameter is invalid.
    pub fn sample_irregular_time<R: Rng + ?Sized>(
        &self,
        grid: Grid,
        keep_percentage: f64,
        rng: &mut R,
    ) -> Result<Array1<f64>, ConfigError> {
        let keep_percentage = validate_keep_percentage(keep_percentage)?;
        let regular = self.sample_regular_time(grid)?;

        let n = regular.len();
        let kept = kept_count(n, keep_percentage);
        if kept == n {
            return Ok(regular);
        }

        let mut indices = index::sample(rng, n, kept).into_vec();
        indices.sort_unstable();

        Ok(indices.into_iter().map(|i| regular[i]).collect())
    }
}

pub(crate) fn validate_keep_percentage(keep_percentage: f64) -> Result<f64, ConfigError> {
    if keep_percentage > 0.0 && keep_percentage <= 100.0 {
        Ok(keep_percentage)
    } else {
        Err(ConfigError::KeepPercentage(keep_percentage))
    }
}

/// Number of points kept from a grid of `n`, never more than `n`.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn kept_count(n: usize, keep_percentage: f64) -> usize {
    let kept = (n as f64 * keep_percentage / 100.0).round() as usize;
    kept.min(n)
}

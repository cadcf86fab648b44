//! Shared fixtures for the tsynth integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tsynth_core::{NoiseGenerator, Sampled, TimeSeries};
use tsynth_generators::{
    ParamError,
    noise::{GaussianNoise, RedNoise, gaussian, red},
    signal::{PseudoPeriodic, pseudo_periodic},
};
use tsynth_sampler::{ConfigError, SamplingConfig};

/// A complete run loaded from a config file: time grid, signal, and noise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub seed: u64,
    pub sampling: SamplingConfig,
    pub signal: pseudo_periodic::Config,
    pub noise: Option<NoiseSpec>,
}

/// The noise to add in a [`Scenario`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NoiseSpec {
    Gaussian(gaussian::Config),
    Red(red::Config),
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("invalid sampling config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid generator parameters: {0}")]
    Param(#[from] ParamError),

    #[error("sampling failed: {0}")]
    Sampling(#[from] tsynth_core::Error),
}

impl Scenario {
    /// Samples the scenario.
    ///
    /// Every random source derives from `seed`, so equal scenarios produce
    /// equal series.
    ///
    /// # Errors
    ///
    /// Returns an error if a config section is invalid.
    pub fn run(&self) -> Result<Sampled, ScenarioError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let times = self.sampling.sample(&mut rng)?;

        let mut signal = PseudoPeriodic::new(self.signal, ChaCha8Rng::from_rng(&mut rng))?;
        let mut noise: Option<Box<dyn NoiseGenerator>> = match self.noise {
            Some(NoiseSpec::Gaussian(config)) => Some(Box::new(GaussianNoise::new(
                config,
                ChaCha8Rng::from_rng(&mut rng),
            )?)),
            Some(NoiseSpec::Red(config)) => Some(Box::new(RedNoise::new(
                config,
                ChaCha8Rng::from_rng(&mut rng),
            )?)),
            None => None,
        };

        let series = TimeSeries::new(&mut signal);
        let mut series = match noise.as_deref_mut() {
            Some(noise) => series.with_noise(noise),
            None => series,
        };

        Ok(series.sample(times.view())?)
    }
}

use ndarray::{Array1, ArrayView1, Zip};
use rand::Rng;
use tsynth_core::{Generator, SignalGenerator, UnsupportedOperation};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    ParamError,
    draw::{normal, normal_batch},
    error::{finite, std_dev},
    waveform::{Waveform, default_waveform},
};

/// Parameters of a [`PseudoPeriodic`] signal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    /// Mean amplitude.
    pub amplitude: f64,
    /// Mean angular frequency.
    pub frequency: f64,
    /// Standard deviation of the per-point amplitude.
    pub amplitude_sd: f64,
    /// Standard deviation of the per-point frequency.
    pub frequency_sd: f64,
    #[cfg_attr(
        feature = "serde-derive",
        serde(skip, default = "crate::waveform::default_waveform")
    )]
    pub waveform: Waveform,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            amplitude: 1.0,
            frequency: 100.0,
            amplitude_sd: 0.1,
            frequency_sd: 0.4,
            waveform: default_waveform(),
        }
    }
}

/// Harmonic signal whose amplitude and frequency jitter from point to point.
///
/// Each point independently draws `a ~ N(amplitude, amplitude_sd²)` and
/// `f ~ N(frequency, frequency_sd²)` and returns `a * waveform(f * t)`.
/// Points do not depend on each other, so the signal is vectorizable; the
/// batch path draws every frequency, then every amplitude, in one pass each.
#[derive(Debug, Clone)]
pub struct PseudoPeriodic<R> {
    config: Config,
    rng: R,
}

impl<R: Rng> PseudoPeriodic<R> {
    /// Creates a pseudo-periodic signal that draws from `rng`.
    ///
    /// # Errors
    ///
    /// Returns an error if a mean is not finite or a standard deviation is
    /// negative or not finite.
    pub fn new(config: Config, rng: R) -> Result<Self, ParamError> {
        finite("amplitude", config.amplitude)?;
        finite("frequency", config.frequency)?;
        std_dev(config.amplitude_sd)?;
        std_dev(config.frequency_sd)?;

        Ok(Self { config, rng })
    }

    /// Returns the validated parameters.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl<R: Rng> Generator for PseudoPeriodic<R> {
    fn kind(&self) -> &'static str {
        "pseudo-periodic"
    }

    fn is_vectorizable(&self) -> bool {
        true
    }

    fn sample_next(&mut self, time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        let Config {
            amplitude,
            frequency,
            amplitude_sd,
            frequency_sd,
            waveform,
        } = self.config;

        let frequency = normal(&mut self.rng, frequency, frequency_sd);
        let amplitude = normal(&mut self.rng, amplitude, amplitude_sd);
        amplitude * waveform(frequency * time)
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        let Config {
            amplitude,
            frequency,
            amplitude_sd,
            frequency_sd,
            waveform,
        } = self.config;
        let n = times.len();

        let frequencies = normal_batch(&mut self.rng, n, frequency, frequency_sd);
        let amplitudes = normal_batch(&mut self.rng, n, amplitude, amplitude_sd);

        Ok(Zip::from(&amplitudes)
            .and(&frequencies)
            .and(times)
            .map_collect(|&a, &f, &t| a * waveform(f * t)))
    }
}

impl<R: Rng> SignalGenerator for PseudoPeriodic<R> {}

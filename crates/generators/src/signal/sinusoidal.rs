use std::f64::consts::TAU;

use ndarray::{Array1, ArrayView1};
use tsynth_core::{Generator, SignalGenerator, UnsupportedOperation};

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{
    ParamError,
    error::finite,
    waveform::{Waveform, default_waveform},
};

/// Parameters of a [`Sinusoidal`] signal.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde-derive",
    derive(Serialize, Deserialize),
    serde(default)
)]
pub struct Config {
    pub amplitude: f64,
    pub frequency: f64,
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
            frequency: 1.0,
            waveform: default_waveform(),
        }
    }
}

/// Deterministic harmonic signal `amplitude * waveform(2π * frequency * t)`.
#[derive(Debug, Clone, Copy)]
pub struct Sinusoidal {
    amplitude: f64,
    frequency: f64,
    waveform: Waveform,
}

impl Sinusoidal {
    /// Creates a sinusoidal signal.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::NonFinite`] if the amplitude or frequency is not
    /// finite.
    pub fn new(config: Config) -> Result<Self, ParamError> {
        Ok(Self {
            amplitude: finite("amplitude", config.amplitude)?,
            frequency: finite("frequency", config.frequency)?,
            waveform: config.waveform,
        })
    }

    fn value_at(&self, time: f64) -> f64 {
        self.amplitude * (self.waveform)(TAU * self.frequency * time)
    }
}

impl Generator for Sinusoidal {
    fn kind(&self) -> &'static str {
        "sinusoidal"
    }

    fn is_vectorizable(&self) -> bool {
        true
    }

    fn sample_next(&mut self, time: f64, _samples: &[f64], _errors: &[f64]) -> f64 {
        self.value_at(time)
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        Ok(times.mapv(|t| self.value_at(t)))
    }
}

impl SignalGenerator for Sinusoidal {}

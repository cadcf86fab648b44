//! Signal and noise generators for tsynth.
//!
//! Every generator implements [`tsynth_core::Generator`] and fills one role:
//!
//! - [`signal`]: noiseless processes, implementing
//!   [`SignalGenerator`](tsynth_core::SignalGenerator)
//! - [`noise`]: additive noise, implementing
//!   [`NoiseGenerator`](tsynth_core::NoiseGenerator)
//!
//! Stochastic generators own their random source. Pass a seeded RNG to make a
//! run reproducible.
//!
//! # Example
//!
//! ```
//! use ndarray::Array1;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tsynth_core::{Mode, TimeSeries};
//! use tsynth_generators::prelude::*;
//!
//! let mut signal = Sinusoidal::new(sinusoidal::Config::default()).unwrap();
//! let mut noise = GaussianNoise::zero_mean(0.3, ChaCha8Rng::seed_from_u64(1)).unwrap();
//!
//! let times = Array1::linspace(0.0, 20.0, 100);
//! let sampled = TimeSeries::new(&mut signal)
//!     .with_noise(&mut noise)
//!     .sample(times.view())
//!     .unwrap();
//!
//! assert_eq!(sampled.mode, Mode::Vectorized);
//! assert_eq!(sampled.len(), 100);
//! ```

pub mod noise;
pub mod signal;
pub mod waveform;

mod draw;
mod error;

pub use error::ParamError;
pub use waveform::Waveform;

pub mod prelude {
    pub use crate::{
        ParamError,
        noise::{GaussianNoise, MixedNoise, RedNoise, gaussian, red},
        signal::{
            AutoRegressive, Car, Narma, PseudoPeriodic, Sinusoidal, auto_regressive, car, narma,
            pseudo_periodic, sinusoidal,
        },
        waveform::Waveform,
    };
    pub use tsynth_core::{Generator, NoiseGenerator, SignalGenerator};
}

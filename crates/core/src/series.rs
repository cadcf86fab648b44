//! Composition of a signal and optional additive noise over a time vector.
//!
//! [`TimeSeries`] borrows a signal generator and, optionally, a noise
//! generator, and evaluates them at every timestamp:
//!
//! ```text
//! sample[i] = signal(times[i]) + noise(times[i])
//! ```
//!
//! # Dispatch
//!
//! If the signal is vectorizable and the noise is either absent or
//! vectorizable, each generator is called once with the whole time vector and
//! the results are summed elementwise. Otherwise both generators are called
//! pointwise, in time order, so the two streams stay aligned and stateful
//! generators see the history produced so far.
//!
//! # Example
//!
//! ```ignore
//! use tsynth_core::TimeSeries;
//!
//! let mut series = TimeSeries::new(&mut signal).with_noise(&mut noise);
//! let sampled = series.sample(times.view())?;
//!
//! for (t, x) in sampled.times.iter().zip(&sampled.samples) {
//!     println!("t={t}: {x}");
//! }
//! ```

mod error;
mod event;
mod sampled;

pub use error::Error;
pub use event::Event;
pub use sampled::{Mode, Sampled};

use ndarray::{Array1, ArrayView1};
use tracing::{debug, trace};

use crate::{NoiseGenerator, Observer, SignalGenerator};

/// Drives a signal generator and an optional noise generator over a time
/// vector.
///
/// The driver holds no state of its own beyond the borrowed generators; each
/// call to [`sample`](Self::sample) is an independent run that advances
/// whatever state the generators carry.
pub struct TimeSeries<'a> {
    signal: &'a mut dyn SignalGenerator,
    noise: Option<&'a mut dyn NoiseGenerator>,
}

impl<'a> TimeSeries<'a> {
    /// Creates a noiseless time series from a signal generator.
    pub fn new(signal: &'a mut dyn SignalGenerator) -> Self {
        Self {
            signal,
            noise: None,
        }
    }

    /// Adds a noise generator to the series.
    #[must_use]
    pub fn with_noise(mut self, noise: &'a mut dyn NoiseGenerator) -> Self {
        self.noise = Some(noise);
        self
    }

    /// Returns the mode [`sample`](Self::sample) will use.
    #[must_use]
    pub fn mode(&self) -> Mode {
        let noise_vectorizable = self
            .noise
            .as_ref()
            .is_none_or(|noise| noise.is_vectorizable());

        if self.signal.is_vectorizable() && noise_vectorizable {
            Mode::Vectorized
        } else {
            Mode::Pointwise
        }
    }

    /// Samples the series at every entry of `times`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator claims to be vectorizable but refuses a
    /// batch call, or returns a batch of the wrong length.
    pub fn sample(&mut self, times: ArrayView1<'_, f64>) -> Result<Sampled, Error> {
        self.sample_observed(times, |_: &Event| {})
    }

    /// Samples the series, emitting an [`Event`] per point to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a generator claims to be vectorizable but refuses a
    /// batch call, or returns a batch of the wrong length.
    pub fn sample_observed<O>(
        &mut self,
        times: ArrayView1<'_, f64>,
        mut observer: O,
    ) -> Result<Sampled, Error>
    where
        O: Observer<Event>,
    {
        let mode = self.mode();
        debug!(
            ?mode,
            points = times.len(),
            signal = self.signal.kind(),
            noise = self.noise.as_ref().map(|noise| noise.kind()),
            "sampling time series"
        );

        match mode {
            Mode::Vectorized => {
                let sampled = self.sample_vectorized(times)?;
                for index in 0..sampled.len() {
                    observer.observe(&Event {
                        index,
                        time: sampled.times[index],
                        sample: sampled.samples[index],
                        signal: sampled.signals[index],
                        error: sampled.errors[index],
                    });
                }
                Ok(sampled)
            }
            Mode::Pointwise => Ok(self.sample_pointwise(times, &mut observer)),
        }
    }

    fn sample_vectorized(&mut self, times: ArrayView1<'_, f64>) -> Result<Sampled, Error> {
        let n = times.len();

        let signals = self.signal.sample_vectorized(times)?;
        Error::check_len(self.signal.kind(), n, signals.len())?;

        let errors = match self.noise.as_mut() {
            Some(noise) => {
                let errors = noise.sample_vectorized(times)?;
                Error::check_len(noise.kind(), n, errors.len())?;
                errors
            }
            None => Array1::zeros(n),
        };

        let samples = &signals + &errors;

        Ok(Sampled {
            times: times.to_owned(),
            samples,
            signals,
            errors,
            mode: Mode::Vectorized,
        })
    }

    fn sample_pointwise<O>(&mut self, times: ArrayView1<'_, f64>, observer: &mut O) -> Sampled
    where
        O: Observer<Event>,
    {
        let n = times.len();
        let mut samples = Vec::with_capacity(n);
        let mut signals = Vec::with_capacity(n);
        let mut errors = Vec::with_capacity(n);

        for (index, &time) in times.iter().enumerate() {
            let signal = self.signal.sample_next(time, &samples, &errors);
            let error = match self.noise.as_mut() {
                Some(noise) => noise.sample_next(time, &samples, &errors),
                None => 0.0,
            };
            let sample = signal + error;
            trace!(index, time, sample, signal, error, "sampled point");
            observer.observe(&Event {
                index,
                time,
                sample,
                signal,
                error,
            });

            samples.push(sample);
            signals.push(signal);
            errors.push(error);
        }

        Sampled {
            times: times.to_owned(),
            samples: Array1::from_vec(samples),
            signals: Array1::from_vec(signals),
            errors: Array1::from_vec(errors),
            mode: Mode::Pointwise,
        }
    }
}

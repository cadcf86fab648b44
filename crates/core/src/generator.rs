use ndarray::{Array1, ArrayView1};
use thiserror::Error;

/// Produces values at timestamps.
///
/// A generator is evaluated in one of two ways:
///
/// - Pointwise, via [`sample_next`], one timestamp per call and in time order.
///   The generator may carry private state from one call to the next (the
///   trailing window of an autoregressive process, for example).
/// - Vectorized, via [`sample_vectorized`], over a whole time vector at once.
///   This is only available when [`is_vectorizable`] returns `true`, which a
///   generator must only do if its value at `t` does not depend on earlier
///   values.
///
/// Generators own their random source and state. Nothing outside the
/// generator resets or inspects that state; a fresh run needs a freshly
/// constructed generator.
///
/// [`sample_next`]: Generator::sample_next
/// [`sample_vectorized`]: Generator::sample_vectorized
/// [`is_vectorizable`]: Generator::is_vectorizable
pub trait Generator {
    /// A short, human-readable name for the generator kind.
    fn kind(&self) -> &'static str;

    /// Returns `true` if [`Generator::sample_vectorized`] is supported.
    fn is_vectorizable(&self) -> bool;

    /// Samples a single value at `time`.
    ///
    /// `samples` holds the series values produced before `time` (signal plus
    /// noise) and `errors` the additive noise values, both oldest first.
    /// Memoryless generators ignore them.
    fn sample_next(&mut self, time: f64, samples: &[f64], errors: &[f64]) -> f64;

    /// Samples one value per entry of `times`.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedOperation`] if the generator is not vectorizable.
    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        let _ = times;
        Err(UnsupportedOperation::new(self.kind()))
    }
}

/// A generator that provides the noiseless base signal of a time series.
pub trait SignalGenerator: Generator {}

/// A generator that provides the additive noise of a time series.
pub trait NoiseGenerator: Generator {}

/// Error returned when a generator is asked for a batch it cannot produce.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} does not support vectorized sampling")]
pub struct UnsupportedOperation {
    /// The [`Generator::kind`] of the generator that was called.
    pub kind: &'static str,
}

impl UnsupportedOperation {
    /// Creates an error for the given generator kind.
    #[must_use]
    pub fn new(kind: &'static str) -> Self {
        Self { kind }
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn is_vectorizable(&self) -> bool {
        (**self).is_vectorizable()
    }

    fn sample_next(&mut self, time: f64, samples: &[f64], errors: &[f64]) -> f64 {
        (**self).sample_next(time, samples, errors)
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        (**self).sample_vectorized(times)
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn is_vectorizable(&self) -> bool {
        (**self).is_vectorizable()
    }

    fn sample_next(&mut self, time: f64, samples: &[f64], errors: &[f64]) -> f64 {
        (**self).sample_next(time, samples, errors)
    }

    fn sample_vectorized(
        &mut self,
        times: ArrayView1<'_, f64>,
    ) -> Result<Array1<f64>, UnsupportedOperation> {
        (**self).sample_vectorized(times)
    }
}

impl<G: SignalGenerator + ?Sized> SignalGenerator for Box<G> {}
impl<G: SignalGenerator + ?Sized> SignalGenerator for &mut G {}

impl<G: NoiseGenerator + ?Sized> NoiseGenerator for Box<G> {}
impl<G: NoiseGenerator + ?Sized> NoiseGenerator for &mut G {}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Counts calls; its value at each step is the number of prior samples.
    struct HistoryLength;

    impl Generator for HistoryLength {
        fn kind(&self) -> &'static str {
            "history length"
        }

        fn is_vectorizable(&self) -> bool {
            false
        }

        #[allow(clippy::cast_precision_loss)]
        fn sample_next(&mut self, _time: f64, samples: &[f64], _errors: &[f64]) -> f64 {
            samples.len() as f64
        }
    }

    #[test]
    fn default_vectorized_call_is_unsupported() {
        let mut generator = HistoryLength;
        let times = array![0.0, 1.0];

        let err = generator.sample_vectorized(times.view()).unwrap_err();

        assert_eq!(err, UnsupportedOperation::new("history length"));
        assert_eq!(
            err.to_string(),
            "history length does not support vectorized sampling"
        );
    }

    #[test]
    fn boxed_generators_forward() {
        let mut boxed: Box<dyn Generator> = Box::new(HistoryLength);

        assert_eq!(boxed.kind(), "history length");
        assert!(!boxed.is_vectorizable());
        assert_eq!(boxed.sample_next(0.0, &[1.0, 2.0], &[]), 2.0);
        assert!(boxed.sample_vectorized(array![0.0].view()).is_err());
    }
}

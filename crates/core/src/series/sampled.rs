use ndarray::Array1;

/// How a [`TimeSeries`](super::TimeSeries) evaluated its generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// One batch call per generator.
    Vectorized,

    /// One call per generator per timestamp, in time order.
    Pointwise,
}

/// The result of sampling a time series.
///
/// All four arrays have the same length and are index-aligned, so
/// `samples[i] == signals[i] + errors[i]` is the value at `times[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Sampled {
    /// The timestamps that were realized.
    pub times: Array1<f64>,

    /// Series values, signal plus noise.
    pub samples: Array1<f64>,

    /// Noiseless signal component.
    pub signals: Array1<f64>,

    /// Additive noise component.
    pub errors: Array1<f64>,

    /// The evaluation mode that produced the arrays.
    pub mode: Mode,
}

impl Sampled {
    /// Returns the number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Returns `true` if no points were sampled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

/// Event emitted by [`TimeSeries`](super::TimeSeries) for each sampled point.
///
/// Events arrive in time order. In pointwise mode each event is emitted as soon
/// as its point is sampled; in vectorized mode they follow the whole batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Position of the point in the time vector.
    pub index: usize,

    /// The timestamp.
    pub time: f64,

    /// Series value, `signal + error`.
    pub sample: f64,

    /// Noiseless signal value.
    pub signal: f64,

    /// Additive noise value (zero when the series has no noise).
    pub error: f64,
}

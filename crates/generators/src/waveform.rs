//! Periodic shape functions for harmonic signals.
//!
//! Every waveform has period `2π` and range `[-1, 1]`, like [`f64::sin`], so
//! they are interchangeable wherever a [`Waveform`] is accepted.

use std::f64::consts::{PI, TAU};

/// A periodic function of phase.
pub type Waveform = fn(f64) -> f64;

/// `sin(x)`, the default shape.
#[must_use]
pub fn sine(x: f64) -> f64 {
    x.sin()
}

/// `cos(x)`.
#[must_use]
pub fn cosine(x: f64) -> f64 {
    x.cos()
}

/// `+1` for the first half of each period, `-1` for the second.
#[must_use]
pub fn square(x: f64) -> f64 {
    if x.rem_euclid(TAU) < PI { 1.0 } else { -1.0 }
}

/// Rises linearly from `-1` to `1` over each period.
#[must_use]
pub fn sawtooth(x: f64) -> f64 {
    x.rem_euclid(TAU) / PI - 1.0
}

/// Rises from `-1` to `1` over the first half period and falls back over the second.
#[must_use]
pub fn triangle(x: f64) -> f64 {
    1.0 - 2.0 * sawtooth(x).abs()
}

pub(crate) fn default_waveform() -> Waveform {
    sine
}

//! Core traits and types for tsynth.
//!
//! This crate defines the shared abstractions that signal and noise
//! generators plug into, and the driver that composes them:
//!
//! - [`Generator`]: produces values at timestamps, either one point at a time
//!   or as a single vectorized batch
//! - [`SignalGenerator`], [`NoiseGenerator`]: roles a generator can fill in a
//!   [`TimeSeries`]
//! - [`TimeSeries`]: evaluates a signal plus optional additive noise over a
//!   time vector
//! - [`Observer`]: receives an [`Event`] for every sampled point

mod generator;
mod observer;
pub mod series;

pub use generator::{Generator, NoiseGenerator, SignalGenerator, UnsupportedOperation};
pub use observer::Observer;
pub use series::{Error, Event, Mode, Sampled, TimeSeries};

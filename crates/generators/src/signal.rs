//! Noiseless signal generators.
//!
//! # Vectorizable
//!
//! - [`Sinusoidal`]: deterministic harmonic wave
//! - [`PseudoPeriodic`]: harmonic wave with per-point random amplitude and
//!   frequency
//!
//! # Pointwise only
//!
//! - [`AutoRegressive`]: AR(p) process over a sliding window
//! - [`Car`]: continuous-time AR(1) process for irregular sampling
//! - [`Narma`]: nonlinear autoregressive moving average process

pub mod auto_regressive;
pub mod car;
pub mod narma;
pub mod pseudo_periodic;
pub mod sinusoidal;

pub use auto_regressive::AutoRegressive;
pub use car::Car;
pub use narma::Narma;
pub use pseudo_periodic::PseudoPeriodic;
pub use sinusoidal::Sinusoidal;

//! Additive noise generators.
//!
//! - [`GaussianNoise`]: white noise, vectorizable
//! - [`RedNoise`]: exponentially correlated noise, pointwise only
//! - [`MixedNoise`]: sum of other noise generators

pub mod gaussian;
pub mod mixed;
pub mod red;

pub use gaussian::GaussianNoise;
pub use mixed::MixedNoise;
pub use red::RedNoise;

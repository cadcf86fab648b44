use thiserror::Error;

/// Validation errors for generator parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParamError {
    #[error("standard deviation must be finite and >= 0, got {0}")]
    InvalidStdDev(f64),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("at least one coefficient is required")]
    EmptyCoefficients,

    #[error("order must be positive")]
    InvalidOrder,

    #[error("starting window has {window} values, expected {expected}")]
    DimensionMismatch { expected: usize, window: usize },

    #[error("time constant must be finite and > 0, got {0}")]
    InvalidTimescale(f64),

    #[error("coefficient must be in (0, 1], got {0}")]
    InvalidCoefficient(f64),
}

pub(crate) fn std_dev(value: f64) -> Result<f64, ParamError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ParamError::InvalidStdDev(value))
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, ParamError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParamError::NonFinite { name, value })
    }
}

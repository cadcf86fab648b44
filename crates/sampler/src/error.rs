use thiserror::Error;

/// Errors that can occur when configuring time sampling.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("time bounds must be finite with start < stop, got [{start}, {stop}]")]
    TimeBounds { start: f64, stop: f64 },

    #[error("number of points must be positive")]
    NumPoints,

    #[error("resolution must be finite and positive, got {0}")]
    Resolution(f64),

    #[error("grid would exceed {max} points")]
    TooManyPoints { max: usize },

    #[error("grid spacing is below f64 precision within [{start}, {stop}]")]
    Unresolvable { start: f64, stop: f64 },

    #[error("keep percentage must be in (0, 100], got {0}")]
    KeepPercentage(f64),

    #[error("one of num_points or resolution must be given")]
    GridUnspecified,

    #[error("only one of num_points or resolution may be given")]
    GridAmbiguous,
}

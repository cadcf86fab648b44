use ndarray::Array1;

use crate::ConfigError;

/// How a regular time grid is laid out between its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Grid {
    /// `n` evenly spaced points from start to stop, both included.
    Points(usize),

    /// Points `start + i * resolution` strictly below stop.
    Resolution(f64),
}

/// Largest number of points a grid may hold.
pub const MAX_POINTS: usize = 1 << 28;

impl Grid {
    /// Checks the grid parameter.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NumPoints`] for zero points,
    /// [`ConfigError::TooManyPoints`] for more than [`MAX_POINTS`], or
    /// [`ConfigError::Resolution`] for a non-positive or non-finite resolution.
    pub fn validate(self) -> Result<Self, ConfigError> {
        match self {
            Self::Points(0) => Err(ConfigError::NumPoints),
            Self::Points(n) if n > MAX_POINTS => {
                Err(ConfigError::TooManyPoints { max: MAX_POINTS })
            }
            Self::Resolution(r) if !r.is_finite() || r <= 0.0 => Err(ConfigError::Resolution(r)),
            _ => Ok(self),
        }
    }

    /// Lays the grid out over `[start, stop]`.
    ///
    /// Bounds are assumed valid (`start < stop`, both finite). The result is
    /// strictly increasing; a spacing too fine for `f64` to tell neighbouring
    /// points apart is an error.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub(crate) fn layout(self, start: f64, stop: f64) -> Result<Array1<f64>, ConfigError> {
        let times = match self.validate()? {
            Self::Points(1) => Array1::from_elem(1, start),
            Self::Points(n) => {
                let step = (stop - start) / (n - 1) as f64;
                Array1::from_shape_fn(n, |i| {
                    if i == n - 1 {
                        stop
                    } else {
                        start + step * i as f64
                    }
                })
            }
            Self::Resolution(r) => {
                let count = ((stop - start) / r).ceil();
                if count > MAX_POINTS as f64 {
                    return Err(ConfigError::TooManyPoints { max: MAX_POINTS });
                }

                // The division rounds, so the last point can land on stop.
                let mut n = (count as usize).max(1);
                while n > 1 && start + r * (n - 1) as f64 >= stop {
                    n -= 1;
                }
                Array1::from_shape_fn(n, |i| start + r * i as f64)
            }
        };

        if times.windows(2).into_iter().any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Unresolvable { start, stop });
        }
        Ok(times)
    }
}

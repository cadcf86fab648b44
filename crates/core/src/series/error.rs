use thiserror::Error;

use crate::UnsupportedOperation;

/// Errors that can occur while sampling a time series.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Unsupported(#[from] UnsupportedOperation),

    #[error("{kind} returned {found} values for {expected} timestamps")]
    LengthMismatch {
        kind: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Error {
    pub(crate) fn check_len(kind: &'static str, expected: usize, found: usize) -> Result<(), Self> {
        if expected == found {
            Ok(())
        } else {
            Err(Self::LengthMismatch {
                kind,
                expected,
                found,
            })
        }
    }
}

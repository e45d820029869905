//! Argument errors for fitting and evaluation.
//!
//! Every variant is detected before any work is done, so a call either
//! completes or returns one of these with no partial output.
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer than two samples; no interval exists to interpolate on.
    #[error("at least two samples are required, got {0}")]
    TooFewSamples(usize),

    /// Grid spacing is exactly zero.
    #[error("grid step must be nonzero")]
    ZeroStep,

    /// A caller-supplied buffer does not have the required length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A row-major buffer can not be split evenly into `nrows` rows.
    #[error("buffer of length {len} can not be split into {nrows} rows")]
    RowMismatch { len: usize, nrows: usize },
}

impl Error {
    /// All errors in this crate are invalid-argument conditions.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::TooFewSamples(_)
                | Error::ZeroStep
                | Error::LengthMismatch { .. }
                | Error::RowMismatch { .. }
        )
    }
}

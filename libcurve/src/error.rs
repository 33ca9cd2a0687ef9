use thiserror::Error;

/// Reasons a sample set cannot be indexed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurveError {
    #[error("Sample set cannot be empty")]
    Empty,

    #[error("X and Y values must have equal length (x: {x_len}, y: {y_len})")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("X values must be strictly increasing (at index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("Y value at index {index} is NaN; use an absent value for gaps")]
    NanValue { index: usize },
}

//! Shared, read-only storage of the sampled curve.
use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::CurveError;

/// Ordered x coordinates and their optional y values.
///
/// Both buffers are reference counted so a caller can keep (and reuse) the
/// same sample arrays for several indices without copying them. Neither
/// buffer is ever modified after validation.
#[derive(Clone, Debug)]
pub(crate) struct Samples {
    x: Arc<[f64]>,
    y: Arc<[Option<f64>]>,
}

impl Samples {
    /// Validates and wraps the sample buffers.
    ///
    /// The buffers must be non-empty, of equal length, with x strictly
    /// increasing and no present y equal to NaN.
    pub fn new(x: Arc<[f64]>, y: Arc<[Option<f64>]>) -> Result<Self, CurveError> {
        if x.len() != y.len() {
            return Err(CurveError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(CurveError::Empty);
        }

        // A NaN x is unordered and therefore rejected here as well.
        if let Some(index) = x
            .windows(2)
            .position(|w| w[1].partial_cmp(&w[0]) != Some(Ordering::Greater))
        {
            return Err(CurveError::NotStrictlyIncreasing { index: index + 1 });
        }
        if x.len() == 1 && x[0].is_nan() {
            return Err(CurveError::NotStrictlyIncreasing { index: 0 });
        }

        if let Some(index) = y.iter().position(|v| v.is_some_and(f64::is_nan)) {
            return Err(CurveError::NanValue { index });
        }

        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[Option<f64>] {
        &self.y
    }

    pub fn shared_x(&self) -> &Arc<[f64]> {
        &self.x
    }

    pub fn shared_y(&self) -> &Arc<[Option<f64>]> {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: a validated sample set holds at least one sample.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// First and last x coordinate.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }
}

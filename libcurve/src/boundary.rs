//! Locating the samples that bracket a domain interval, and linear
//! interpolation at interval edges that fall between samples.
//!
//! Interpolation never bridges a gap: both bracketing samples need a value.

/// Index of the first sample with `x >= xmin`, or `None` if every sample lies
/// below `xmin`.
pub fn first_at_or_after(x: &[f64], xmin: f64) -> Option<usize> {
    let idx = x.partition_point(|&v| v < xmin);
    (idx < x.len()).then_some(idx)
}

/// Index of the last sample with `x <= xmax`, or `None` if every sample lies
/// above `xmax`.
pub fn last_at_or_before(x: &[f64], xmax: f64) -> Option<usize> {
    x.partition_point(|&v| v <= xmax).checked_sub(1)
}

/// Interpolated y at `xmin`, where `lo` is [`first_at_or_after`] of `xmin`.
///
/// Only produced when `xmin` lies strictly between samples `lo - 1` and `lo`.
pub fn interpolate_lower(x: &[f64], y: &[Option<f64>], lo: usize, xmin: f64) -> Option<f64> {
    if lo == 0 || x[lo] <= xmin {
        return None;
    }
    interpolate_segment(x, y, lo - 1, xmin)
}

/// Interpolated y at `xmax`, where `hi` is [`last_at_or_before`] of `xmax`.
///
/// Only produced when `xmax` lies strictly between samples `hi` and `hi + 1`.
pub fn interpolate_upper(x: &[f64], y: &[Option<f64>], hi: usize, xmax: f64) -> Option<f64> {
    if hi + 1 >= x.len() || x[hi] >= xmax || x[hi + 1] <= xmax {
        return None;
    }
    interpolate_segment(x, y, hi, xmax)
}

/// y at `at` on the line through samples `i` and `i + 1`.
fn interpolate_segment(x: &[f64], y: &[Option<f64>], i: usize, at: f64) -> Option<f64> {
    let (x0, x1) = (x[i], x[i + 1]);
    if x0 == x1 {
        return None;
    }
    let (y0, y1) = (y[i]?, y[i + 1]?);
    Some(y0 + (at - x0) / (x1 - x0) * (y1 - y0))
}

/// y at an arbitrary `at`: the sample value if `at` hits a sample, otherwise
/// the interpolation between the bracketing samples.
pub fn value_at(x: &[f64], y: &[Option<f64>], at: f64) -> Option<f64> {
    let idx = first_at_or_after(x, at)?;
    if x[idx] == at {
        y[idx]
    } else {
        interpolate_lower(x, y, idx, at)
    }
}

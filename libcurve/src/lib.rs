//! Min/max queries over sampled explicit curves `y = f(x)`.
//!
//! An [`ExplicitCurve`] indexes strictly increasing x coordinates and their
//! optional y values (an absent y is a gap). It answers "what are the smallest
//! and largest y over `[xmin, xmax]`" in O(log N) per query, which is what a
//! plot needs to rescale its vertical axis while the horizontal axis is
//! zoomed or panned.
//!
//! Interval edges that fall between two samples are linearly interpolated,
//! unless one of the two samples is a gap. Intervals carrying no information
//! yield `None`.
//!
//! ```
//! use libcurve::{ExplicitCurve, MinMax};
//!
//! let curve = ExplicitCurve::new(vec![0.0, 1.0, 2.0], vec![Some(0.0), Some(1.0), Some(2.0)]);
//! assert_eq!(curve.query(0.5, 1.5), Some(MinMax { min: 0.5, max: 1.5 }));
//! assert_eq!(curve.query(3.0, 4.0), None);
//! ```
//!
//! The tree and the raw interpolation helpers are internal; index ranges are
//! queried through [`ExplicitCurve::query_index_range`], which checks them
//! against the curve's own samples.
//!
//! ```compile_fail
//! use libcurve::ExtremaTree;
//! ```
//!
//! ```compile_fail
//! let _ = libcurve::boundary::value_at(&[0.0], &[None], 0.0);
//! ```
mod boundary;
pub mod config;
mod curve;
mod error;
pub mod min_max;
mod samples;
mod tree;

pub use config::{CurveConfig, InvertedInterval};
pub use curve::ExplicitCurve;
pub use error::CurveError;
pub use min_max::MinMax;

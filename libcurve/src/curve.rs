use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::boundary;
use crate::config::{CurveConfig, InvertedInterval};
use crate::error::CurveError;
use crate::min_max::{MinMax, merge_all};
use crate::samples::Samples;
use crate::tree::ExtremaTree;

/// A sampled explicit curve `y = f(x)` indexed for fast min/max queries over
/// arbitrary x intervals.
///
/// The index is built once and never changes. It holds the sample buffers by
/// `Arc`, so the same buffers may back several curves; the caller must not
/// mutate them through other means for the lifetime of the index. Any number
/// of threads may query one curve concurrently.
#[derive(Clone, Debug)]
pub struct ExplicitCurve {
    samples: Samples,
    tree: ExtremaTree,
    config: CurveConfig,
}

impl ExplicitCurve {
    /// Builds the index with the default configuration.
    ///
    /// # Panics
    /// Panics if the samples are empty, of different lengths, not strictly
    /// increasing in x, or contain a NaN y value. See [`Self::try_new`] for a
    /// non-panicking variant.
    pub fn new(x: impl Into<Arc<[f64]>>, y: impl Into<Arc<[Option<f64>]>>) -> Self {
        Self::with_config(x, y, CurveConfig::default())
    }

    pub fn try_new(
        x: impl Into<Arc<[f64]>>,
        y: impl Into<Arc<[Option<f64>]>>,
    ) -> Result<Self, CurveError> {
        Self::try_with_config(x, y, CurveConfig::default())
    }

    /// # Panics
    /// Panics on invalid samples, like [`Self::new`].
    pub fn with_config(
        x: impl Into<Arc<[f64]>>,
        y: impl Into<Arc<[Option<f64>]>>,
        config: CurveConfig,
    ) -> Self {
        match Self::try_with_config(x, y, config) {
            Ok(curve) => curve,
            Err(e) => panic!("Invalid curve samples: {e}"),
        }
    }

    pub fn try_with_config(
        x: impl Into<Arc<[f64]>>,
        y: impl Into<Arc<[Option<f64>]>>,
        config: CurveConfig,
    ) -> Result<Self, CurveError> {
        let samples = Samples::new(x.into(), y.into())?;
        let tree = ExtremaTree::build(samples.y());
        debug!(
            samples = samples.len(),
            nodes = tree.node_count(),
            layers = tree.layer_count(),
            "Built extrema tree"
        );
        Ok(Self {
            samples,
            tree,
            config,
        })
    }

    /// Min and max y over the domain interval `[xmin, xmax]`.
    ///
    /// Samples inside the interval contribute their values. An edge that
    /// falls strictly between two samples with values contributes the
    /// linearly interpolated value there. Returns `None` when nothing
    /// contributes, including intervals outside the sampled domain.
    ///
    /// An inverted interval (`xmin > xmax`) is handled according to
    /// [`CurveConfig::inverted_interval`]. NaN bounds give `None`.
    pub fn query(&self, xmin: f64, xmax: f64) -> Option<MinMax> {
        if xmin.is_nan() || xmax.is_nan() {
            warn!(xmin, xmax, "Domain interval has a NaN bound");
            return None;
        }

        let (xmin, xmax) = if xmin > xmax {
            match self.config.inverted_interval {
                InvertedInterval::Reject => {
                    warn!(xmin, xmax, "Rejecting inverted domain interval");
                    return None;
                }
                InvertedInterval::Swap => (xmax, xmin),
            }
        } else {
            (xmin, xmax)
        };

        let result = self.query_ordered(xmin, xmax);
        trace!(xmin, xmax, ?result, "Domain interval query");
        result
    }

    fn query_ordered(&self, xmin: f64, xmax: f64) -> Option<MinMax> {
        let x = self.samples.x();
        let y = self.samples.y();

        let lo = boundary::first_at_or_after(x, xmin)?;
        let hi = boundary::last_at_or_before(x, xmax)?;

        let lower = boundary::interpolate_lower(x, y, lo, xmin).map(MinMax::new);
        let upper = boundary::interpolate_upper(x, y, hi, xmax).map(MinMax::new);

        // With no sample inside the interval `hi` is `lo - 1`.
        let interior = if lo <= hi {
            self.tree.query(y, lo, hi)
        } else {
            None
        };

        merge_all([lower, interior, upper])
    }

    /// Min and max of the present y values at sample indices `lo..=hi`.
    ///
    /// # Panics
    /// Panics if `lo > hi` or `hi >= self.len()`.
    pub fn query_index_range(&self, lo: usize, hi: usize) -> Option<MinMax> {
        self.tree.query(self.samples.y(), lo, hi)
    }

    /// Min and max over all samples, or `None` if every sample is a gap.
    pub fn global_min_max(&self) -> Option<MinMax> {
        self.tree
            .root()
            .unwrap_or_else(|| self.samples.y()[0].map(MinMax::new))
    }

    /// y at `x`: the sample value on a sample, the interpolated value between
    /// two samples with values, `None` across a gap or outside the domain.
    pub fn value_at(&self, x: f64) -> Option<f64> {
        boundary::value_at(self.samples.x(), self.samples.y(), x)
    }

    pub fn x_values(&self) -> &[f64] {
        self.samples.x()
    }

    pub fn y_values(&self) -> &[Option<f64>] {
        self.samples.y()
    }

    pub fn samples(&self) -> (&[f64], &[Option<f64>]) {
        (self.samples.x(), self.samples.y())
    }

    pub fn shared_x_values(&self) -> Arc<[f64]> {
        Arc::clone(self.samples.shared_x())
    }

    pub fn shared_y_values(&self) -> Arc<[Option<f64>]> {
        Arc::clone(self.samples.shared_y())
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// First and last sampled x.
    pub fn domain(&self) -> (f64, f64) {
        self.samples.domain()
    }

    pub fn config(&self) -> &CurveConfig {
        &self.config
    }
}

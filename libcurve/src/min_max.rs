//! Min/max summaries and the rules for merging partially absent summaries.

/// Smallest and largest y value over some set of samples.
///
/// A set containing only gaps has no summary at all; this is expressed as
/// `Option<MinMax>` throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    /// Degenerate summary of a single value.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Summary of two optional values, e.g. a pair of adjacent samples.
    ///
    /// A missing value contributes nothing; two missing values give `None`.
    #[must_use]
    pub fn from_pair(a: Option<f64>, b: Option<f64>) -> Option<Self> {
        merge(a.map(Self::new), b.map(Self::new))
    }
}

impl From<MinMax> for (f64, f64) {
    fn from(value: MinMax) -> Self {
        (value.min, value.max)
    }
}

/// Union of two optional summaries.
///
/// Both present gives the elementwise min/max, one present passes through
/// unchanged, neither gives `None`.
#[must_use]
pub fn merge(a: Option<MinMax>, b: Option<MinMax>) -> Option<MinMax> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.combine(&b)),
        (Some(only), None) | (None, Some(only)) => Some(only),
        (None, None) => None,
    }
}

/// Union of any number of optional summaries.
#[must_use]
pub fn merge_all(parts: impl IntoIterator<Item = Option<MinMax>>) -> Option<MinMax> {
    parts.into_iter().fold(None, merge)
}

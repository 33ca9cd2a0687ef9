//! Flat complete binary tree of precomputed min/max summaries.
//!
//! For a curve with N samples the tree has `2^k - 1` nodes, `k = ceil(log2(N))`,
//! stored in one contiguous slice. Node `i` has children `2i + 1` and `2i + 2`.
//! With N = 16 (k = 4) the nodes cover these index ranges:
//!
//! ```text
//! layer 0, node 0:       (0,15)
//! layer 1, nodes 1-2:    (0,7), (8,15)
//! layer 2, nodes 3-6:    (0,3), (4,7), (8,11), (12,15)
//! layer 3, nodes 7-14:   (0,1), (2,3), (4,5), ..., (14,15)
//! ```
//!
//! Layer `l` starts at node `2^l - 1` and holds `2^l` nodes. When N is not a
//! power of two the ranges are laid out as if it were, and then clamped to the
//! last valid sample index; nodes lying wholly past the data are empty.
//!
//! # Complexity
//!
//! - Construction: O(N)
//! - Index range queries: O(log N)
//! - Memory: about N nodes of 40 bytes each
use crate::min_max::{MinMax, merge};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Node {
    /// First sample index covered (inclusive).
    lo: usize,
    /// Last sample index covered (inclusive), clamped to the data.
    hi: usize,
    /// Extrema of the present y values in `lo..=hi`.
    min_max: Option<MinMax>,
}

impl Node {
    const EMPTY: Self = Self {
        lo: 0,
        hi: 0,
        min_max: None,
    };
}

#[derive(Clone, Debug)]
pub(crate) struct ExtremaTree {
    nodes: Box<[Node]>,
    layers: u32,
}

impl ExtremaTree {
    /// Builds the tree bottom-up over `y`.
    ///
    /// A single sample needs no tree; queries on it read the value directly.
    pub fn build(y: &[Option<f64>]) -> Self {
        let n = y.len();
        let layers = n.next_power_of_two().trailing_zeros();

        if n < 2 {
            return Self {
                nodes: Box::new([]),
                layers,
            };
        }

        let last = n - 1;
        let mut nodes = vec![Node::EMPTY; (1 << layers) - 1];

        // The lowest layer summarizes adjacent pairs of samples directly.
        let leaf_layer = layers - 1;
        let first_leaf = (1 << leaf_layer) - 1;
        let value_at = |idx: usize| y.get(idx).copied().flatten();
        for (pair, leaf) in nodes[first_leaf..].iter_mut().enumerate() {
            let lo = 2 * pair;
            *leaf = Node {
                lo,
                hi: (lo + 1).min(last),
                min_max: MinMax::from_pair(value_at(lo), value_at(lo + 1)),
            };
        }

        for layer in (0..leaf_layer).rev() {
            let layer_start = (1 << layer) - 1;
            let span = 1 << (layers - layer);

            for j in 0..(1 << layer) {
                let i = layer_start + j;
                let lo = j * span;
                nodes[i] = Node {
                    lo,
                    hi: (lo + span - 1).min(last),
                    min_max: merge(nodes[2 * i + 1].min_max, nodes[2 * i + 2].min_max),
                };
            }
        }

        Self {
            nodes: nodes.into_boxed_slice(),
            layers,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// `ceil(log2(N))`; zero for a single sample.
    pub fn layer_count(&self) -> u32 {
        self.layers
    }

    /// Summary over every sample, or `None` for a tree over a single sample.
    pub fn root(&self) -> Option<Option<MinMax>> {
        self.nodes.first().map(|node| node.min_max)
    }

    /// Min/max of the present values of `y[lo..=hi]`.
    ///
    /// `y` must be the slice the tree was built from.
    ///
    /// # Panics
    /// Panics if `lo > hi` or `hi` is out of bounds.
    pub fn query(&self, y: &[Option<f64>], lo: usize, hi: usize) -> Option<MinMax> {
        assert!(
            lo <= hi && hi < y.len(),
            "Invalid index range {lo}..={hi} for {} samples",
            y.len()
        );
        self.query_node(y, lo, hi, 0)
    }

    fn query_node(
        &self,
        y: &[Option<f64>],
        lo: usize,
        hi: usize,
        node_idx: usize,
    ) -> Option<MinMax> {
        // Single indices are read from the samples, which also covers the
        // node-less tree of a single sample.
        if lo == hi {
            return y[lo].map(MinMax::new);
        }

        let node = &self.nodes[node_idx];
        if node.lo == lo && node.hi == hi {
            return node.min_max;
        }

        // A range of two or more indices that is not a whole node lies above
        // the leaf layer, so both children exist.
        let left_idx = 2 * node_idx + 1;
        let right_idx = 2 * node_idx + 2;
        let left = &self.nodes[left_idx];
        let right = &self.nodes[right_idx];

        if hi <= left.hi {
            self.query_node(y, lo, hi, left_idx)
        } else if lo >= right.lo {
            self.query_node(y, lo, hi, right_idx)
        } else {
            merge(
                self.query_node(y, lo, left.hi, left_idx),
                self.query_node(y, right.lo, hi, right_idx),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(y: &[Option<f64>], lo: usize, hi: usize) -> Option<MinMax> {
        y[lo..=hi]
            .iter()
            .fold(None, |acc, v| merge(acc, v.map(MinMax::new)))
    }

    fn ranges(tree: &ExtremaTree) -> Vec<(usize, usize)> {
        tree.nodes.iter().map(|n| (n.lo, n.hi)).collect()
    }

    #[test]
    fn test_single_sample_has_no_nodes() {
        let y = [Some(4.0)];
        let tree = ExtremaTree::build(&y);
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.layer_count(), 0);
        assert_eq!(tree.root(), None);
        assert_eq!(tree.query(&y, 0, 0), Some(MinMax::new(4.0)));

        let y = [None];
        assert_eq!(ExtremaTree::build(&y).query(&y, 0, 0), None);
    }

    #[test]
    fn test_two_samples_root_is_leaf() {
        let y = [Some(3.0), Some(7.0)];
        let tree = ExtremaTree::build(&y);
        assert_eq!(tree.node_count(), 1);
        assert_eq!(ranges(&tree), vec![(0, 1)]);
        assert_eq!(tree.root(), Some(Some(MinMax { min: 3.0, max: 7.0 })));
    }

    #[test]
    fn test_power_of_two_layout() {
        let y: Vec<_> = (0..16).map(|i| Some(f64::from(i))).collect();
        let tree = ExtremaTree::build(&y);
        assert_eq!(tree.layer_count(), 4);
        assert_eq!(tree.node_count(), 15);

        let r = ranges(&tree);
        assert_eq!(r[0], (0, 15));
        assert_eq!(&r[1..3], &[(0, 7), (8, 15)]);
        assert_eq!(&r[3..7], &[(0, 3), (4, 7), (8, 11), (12, 15)]);
        assert_eq!(r[7], (0, 1));
        assert_eq!(r[14], (14, 15));
    }

    #[test]
    fn test_non_power_of_two_ranges_are_clamped() {
        let y = [Some(1.0), Some(2.0), Some(3.0)];
        let tree = ExtremaTree::build(&y);
        assert_eq!(ranges(&tree), vec![(0, 2), (0, 1), (2, 2)]);
        assert_eq!(tree.root(), Some(Some(MinMax { min: 1.0, max: 3.0 })));

        let y = [Some(5.0), Some(2.0), Some(3.0), Some(4.0), Some(-1.0)];
        let tree = ExtremaTree::build(&y);
        assert_eq!(tree.node_count(), 7);
        assert_eq!(&ranges(&tree)[3..], &[(0, 1), (2, 3), (4, 4), (6, 4)]);
        assert_eq!(tree.nodes[5].min_max, Some(MinMax::new(-1.0)));
        // The leaf past the last sample is empty.
        assert_eq!(tree.nodes[6].min_max, None);
        assert_eq!(tree.nodes[2].min_max, Some(MinMax::new(-1.0)));
        assert_eq!(tree.root(), Some(Some(MinMax { min: -1.0, max: 5.0 })));
    }

    #[test]
    fn test_gap_summaries() {
        let y = [None, None, Some(2.0), None];
        let tree = ExtremaTree::build(&y);
        assert_eq!(tree.nodes[1].min_max, None);
        assert_eq!(tree.nodes[2].min_max, Some(MinMax::new(2.0)));
        assert_eq!(tree.root(), Some(Some(MinMax::new(2.0))));

        let y = [None, None, None];
        assert_eq!(ExtremaTree::build(&y).root(), Some(None));
    }

    #[test]
    fn test_every_index_range_matches_brute_force() {
        for n in 1..=40 {
            let y: Vec<_> = (0..n)
                .map(|i| {
                    if i % 3 == 1 || i % 7 == 5 {
                        None
                    } else {
                        Some(f64::from((i * 37 % 11) as i32 - 5))
                    }
                })
                .collect();
            let tree = ExtremaTree::build(&y);
            assert_eq!(tree.node_count(), (1 << tree.layer_count()) - 1);

            for lo in 0..n {
                for hi in lo..n {
                    assert_eq!(
                        tree.query(&y, lo, hi),
                        brute_force(&y, lo, hi),
                        "n = {n}, range {lo}..={hi}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_root_matches_whole_range() {
        for n in 2..=40 {
            let y: Vec<_> = (0..n).map(|i| Some(f64::from(i as i32 % 5))).collect();
            let tree = ExtremaTree::build(&y);
            assert_eq!(tree.root(), Some(brute_force(&y, 0, n - 1)), "n = {n}");
        }
    }

    #[test]
    #[should_panic(expected = "Invalid index range")]
    fn test_out_of_bounds_range() {
        let y = [Some(1.0), Some(2.0)];
        ExtremaTree::build(&y).query(&y, 0, 2);
    }

    #[test]
    #[should_panic(expected = "Invalid index range")]
    fn test_inverted_range() {
        let y = [Some(1.0), Some(2.0), Some(3.0)];
        ExtremaTree::build(&y).query(&y, 2, 1);
    }
}

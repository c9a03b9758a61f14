use rand::Rng;

use crate::algorithm::Sort;
use crate::error::ConfigError;
use crate::insertion::insertion_sort;
use crate::quicksort::quicksort_above;

/// SNUSort: partial randomized quicksort followed by a single insertion sort pass.
///
/// Phase 1 only partitions ranges longer than `k`, which leaves `v` k-sorted: every element ends
/// up less than `k` positions away from its sorted position. Phase 2 runs insertion sort over the
/// whole slice, where each element moves at most `k - 1` slots. A good `k` trades the deep end of
/// the quicksort recursion for that cheap cleanup pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HybridSort {
    k: usize,
}

impl HybridSort {
    /// Creates a hybrid sort that stops partitioning at ranges of `k` or fewer elements.
    pub fn new(k: usize) -> Result<Self, ConfigError> {
        if k < 1 {
            return Err(ConfigError::InvalidThreshold { k });
        }

        Ok(Self { k })
    }

    pub fn k(&self) -> usize {
        self.k
    }
}

impl Sort for HybridSort {
    fn name(&self) -> &'static str {
        "SNUSort"
    }

    fn sort<T: Ord, R: Rng + ?Sized>(&self, v: &mut [T], rng: &mut R) {
        partial_quicksort(v, self.k, rng);
        insertion_sort(v);
    }
}

/// Phase 1 of [`HybridSort`]. Randomized quicksort that leaves ranges of `k` or fewer elements
/// unsorted.
///
/// If `k >= v.len()` nothing is partitioned. `k == 0` behaves like `k == 1`, a full quicksort.
pub fn partial_quicksort<T: Ord, R: Rng + ?Sized>(v: &mut [T], k: usize, rng: &mut R) {
    quicksort_above(v, k.max(1), rng);
}

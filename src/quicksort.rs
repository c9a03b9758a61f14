use rand::Rng;

use crate::algorithm::Sort;

/// Quicksort with a uniformly random pivot per partition step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomizedQuickSort;

impl Sort for RandomizedQuickSort {
    fn name(&self) -> &'static str {
        "RandomizedQuickSort"
    }

    fn sort<T: Ord, R: Rng + ?Sized>(&self, v: &mut [T], rng: &mut R) {
        quicksort(v, rng);
    }
}

/// Sorts `v` in place with randomized quicksort.
///
/// Not stable. Expected *O*(*n* \* log(*n*)) comparisons for any input order, but inputs with
/// many duplicates degrade towards *O*(*n*^2) because ties always go to the left partition.
pub fn quicksort<T: Ord, R: Rng + ?Sized>(v: &mut [T], rng: &mut R) {
    quicksort_above(v, 1, rng);
}

/// Runs the quicksort driver over `v`, but only partitions ranges that hold more than
/// `min_len` elements. Ranges of `min_len` or fewer elements are left as they are.
///
/// With `min_len == 1` this is a full quicksort.
pub(crate) fn quicksort_above<T: Ord, R: Rng + ?Sized>(v: &mut [T], min_len: usize, rng: &mut R) {
    if v.len() < 2 {
        return;
    }

    // Inclusive ranges still to be partitioned. The right side is pushed before the left side,
    // so ranges are visited in the same order as the recursive formulation and consume the same
    // random numbers, while deep recursion can't overflow the call stack.
    let mut pending = vec![(0, v.len() - 1)];

    while let Some((low, high)) = pending.pop() {
        if low >= high || high - low + 1 <= min_len {
            continue;
        }

        let mid = randomized_partition(v, low, high, rng);

        if mid < high {
            pending.push((mid + 1, high));
        }
        if mid > low {
            pending.push((low, mid - 1));
        }
    }
}

/// Exchanges a uniformly chosen element of `v[low..=high]` into the pivot slot `high` and
/// partitions the range around it.
///
/// The random element goes to `high`, not `low`: [`partition`] pivots on `v[high]`, so swapping
/// into `low` would leave the pivot choice deterministic and sorted input quadratic.
///
/// Returns the final index of the pivot. Panics if `low > high` or `high >= v.len()`.
pub fn randomized_partition<T: Ord, R: Rng + ?Sized>(
    v: &mut [T],
    low: usize,
    high: usize,
    rng: &mut R,
) -> usize {
    let pivot_pos = rng.gen_range(low..=high);
    v.swap(pivot_pos, high);

    partition(v, low, high)
}

/// Lomuto partition of the inclusive range `v[low..=high]` around the pivot `v[high]`.
///
/// When the call returns, every element of `v[low..mid]` is `<=` the pivot, `v[mid]` is the
/// pivot and every element of `v[mid + 1..=high]` is `>` the pivot. Elements equal to the pivot
/// end up on the left side.
///
/// Returns `mid`. Panics if `low > high` or `high >= v.len()`.
pub fn partition<T: Ord>(v: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;

    for j in low..high {
        if v[j] <= v[high] {
            v.swap(boundary, j);
            boundary += 1;
        }
    }

    // Place the pivot between the two partitions.
    v.swap(boundary, high);

    boundary
}

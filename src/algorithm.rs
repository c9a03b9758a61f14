use clap::ValueEnum;
use rand::Rng;

use crate::error::ConfigError;
use crate::hybrid::HybridSort;
use crate::quicksort::RandomizedQuickSort;

/// A benchmarkable in-place sort.
///
/// All randomness is drawn from the caller supplied `rng`, so a sort is reproducible given the
/// rng state.
pub trait Sort {
    fn name(&self) -> &'static str;

    fn sort<T: Ord, R: Rng + ?Sized>(&self, v: &mut [T], rng: &mut R);
}

/// Algorithm selector as spelled on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortType {
    #[value(name = "rquick_sort")]
    RQuickSort,
    #[default]
    #[value(name = "snu_sort")]
    SnuSort,
}

/// One of the benchmarked algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    RandomizedQuickSort(RandomizedQuickSort),
    Hybrid(HybridSort),
}

impl Algorithm {
    /// Builds the algorithm for `sort_type`. `k` is only looked at for [`SortType::SnuSort`].
    pub fn new(sort_type: SortType, k: usize) -> Result<Self, ConfigError> {
        match sort_type {
            SortType::RQuickSort => Ok(Self::RandomizedQuickSort(RandomizedQuickSort)),
            SortType::SnuSort => HybridSort::new(k).map(Self::Hybrid),
        }
    }
}

impl Sort for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Self::RandomizedQuickSort(s) => s.name(),
            Self::Hybrid(s) => s.name(),
        }
    }

    fn sort<T: Ord, R: Rng + ?Sized>(&self, v: &mut [T], rng: &mut R) {
        match self {
            Self::RandomizedQuickSort(s) => s.sort(v, rng),
            Self::Hybrid(s) => s.sort(v, rng),
        }
    }
}

impl From<RandomizedQuickSort> for Algorithm {
    fn from(s: RandomizedQuickSort) -> Self {
        Self::RandomizedQuickSort(s)
    }
}

impl From<HybridSort> for Algorithm {
    fn from(s: HybridSort) -> Self {
        Self::Hybrid(s)
    }
}

use rand::rngs::StdRng;
use rand::SeedableRng;
use snusort_rs::{HybridSort, RandomizedQuickSort};

// The sort impls hand the test tools a fresh rng for every call. Correctness must not depend on
// the pivot sequence, so a fixed seed is fine here.
const PIVOT_SEED: u64 = 0x5eed;

fn rng() -> StdRng {
    StdRng::seed_from_u64(PIVOT_SEED)
}

mod rquick_sort {
    use super::*;
    use snusort_rs::Sort as _;
    use sort_test_tools::{instantiate_sort_tests, Sort};

    struct SortImpl {}

    impl Sort for SortImpl {
        fn name() -> String {
            "RandomizedQuickSort".into()
        }

        fn sort<T>(arr: &mut [T])
        where
            T: Ord,
        {
            RandomizedQuickSort.sort(arr, &mut rng());
        }
    }

    instantiate_sort_tests!(SortImpl);
}

macro_rules! snu_sort_tests {
    ($mod_name:ident, $k:expr) => {
        mod $mod_name {
            use super::*;
            use snusort_rs::Sort as _;
            use sort_test_tools::{instantiate_sort_tests, Sort};

            struct SortImpl {}

            impl Sort for SortImpl {
                fn name() -> String {
                    format!("SNUSort_k{}", $k)
                }

                fn sort<T>(arr: &mut [T])
                where
                    T: Ord,
                {
                    let hybrid = HybridSort::new($k).expect("valid threshold");
                    hybrid.sort(arr, &mut rng());
                }
            }

            instantiate_sort_tests!(SortImpl);
        }
    };
}

snu_sort_tests!(snu_sort_k1, 1);
snu_sort_tests!(snu_sort_k2, 2);
snu_sort_tests!(snu_sort_k16, 16);
snu_sort_tests!(snu_sort_k64, 64);

mod insertion_sort {
    use sort_test_tools::{instantiate_stable_sort_tests, Sort};

    struct SortImpl {}

    impl Sort for SortImpl {
        fn name() -> String {
            "insertion_sort".into()
        }

        fn sort<T>(arr: &mut [T])
        where
            T: Ord,
        {
            snusort_rs::insertion::insertion_sort(arr);
        }

        fn max_len() -> usize {
            2_048
        }
    }

    instantiate_stable_sort_tests!(SortImpl);
}

// k at or above the input length skips the quicksort phase entirely, the result must still be
// sorted and, because only insertion sort touched it, stable.
mod snu_sort_k_huge {
    use super::*;
    use snusort_rs::Sort as _;
    use sort_test_tools::{instantiate_stable_sort_tests, Sort};

    struct SortImpl {}

    impl Sort for SortImpl {
        fn name() -> String {
            "SNUSort_k_huge".into()
        }

        fn sort<T>(arr: &mut [T])
        where
            T: Ord,
        {
            let hybrid = HybridSort::new(usize::MAX).expect("valid threshold");
            hybrid.sort(arr, &mut rng());
        }

        fn max_len() -> usize {
            2_048
        }
    }

    instantiate_stable_sort_tests!(SortImpl);
}

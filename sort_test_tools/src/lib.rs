pub mod patterns;

/// Sort under test.
///
/// Implementations wrap an algorithm together with whatever state it needs, e.g. a threshold or a
/// seeded rng, behind a stateless interface so the generic test bodies can call it.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    /// Largest input the sort is tested with. Quadratic sorts lower this to keep test times sane.
    fn max_len() -> usize {
        usize::MAX
    }
}

/// Instantiates the correctness suite in [`tests`] for `$sort_impl`, one `#[test]` per check.
///
/// Invoke it once per module, the generated test names are fixed.
#[macro_export]
macro_rules! instantiate_sort_tests {
    (@inner $sort_impl:ty; $($test:ident),* $(,)?) => {
        $(
            #[test]
            fn $test() {
                $crate::tests::$test::<$sort_impl>();
            }
        )*
    };
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!(
            @inner $sort_impl;
            basic,
            empty_and_single,
            random,
            random_i64,
            random_permutation,
            random_dense,
            random_binary,
            random_zipf,
            all_equal,
            ascending,
            descending,
            saw_ascending,
            saw_descending,
            pipe_organ,
            int_edge,
            idempotent,
            sort_twice_matches_once,
        );
    };
}

/// Same as [`instantiate_sort_tests`] plus checks that equal elements keep their order.
#[macro_export]
macro_rules! instantiate_stable_sort_tests {
    ($sort_impl:ty) => {
        $crate::instantiate_sort_tests!($sort_impl);
        $crate::instantiate_sort_tests!(@inner $sort_impl; stability, stability_presorted);
    };
}

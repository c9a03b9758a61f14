use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

/// Seed shared by every pattern in this test run.
///
/// Set `SORT_TEST_SEED` to reproduce a failing run, otherwise a fresh random seed is drawn once per
/// process.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("SORT_TEST_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random)
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng(len: usize) -> StdRng {
    // Mix in the length so patterns of different sizes are not prefixes of each other.
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
}

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_i64(len: usize) -> Vec<i64> {
    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen::<i64>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::

    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// `0..len` shuffled, the benchmark input shape.
pub fn random_permutation(len: usize) -> Vec<i32> {
    let mut v: Vec<i32> = (0..len as i32).collect();
    v.shuffle(&mut new_rng(len));

    v
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, false)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, true)
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = ascending(len / 2);
    v.extend(descending(len - len / 2));

    v
}

fn saw(len: usize, saw_count: usize, reverse: bool) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let saw_len = len.div_ceil(saw_count.max(1));
    let mut v: Vec<i32> = random(len);
    for chunk in v.chunks_mut(saw_len) {
        if reverse {
            chunk.sort_by(|a, b| b.cmp(a));
        } else {
            chunk.sort();
        }
    }

    v
}

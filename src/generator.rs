use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ConfigError;

/// Returns `0..len` in a uniformly random order.
///
/// Fails instead of aborting if the list can't be allocated.
pub fn random_permutation<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Result<Vec<i64>, ConfigError> {
    let mut v: Vec<i64> = Vec::new();
    v.try_reserve_exact(len)
        .map_err(|_| ConfigError::AllocationFailed { len })?;
    v.extend(0..len as i64);
    v.shuffle(rng);

    Ok(v)
}

/// Returns `count` independent random permutations of `0..len`, drawn one after the other from
/// `rng`.
pub fn random_permutations<R: Rng + ?Sized>(
    len: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Vec<i64>>, ConfigError> {
    (0..count).map(|_| random_permutation(len, rng)).collect()
}

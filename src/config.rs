use std::mem::size_of;

use crate::algorithm::{Algorithm, SortType};
use crate::error::ConfigError;

pub const DEFAULT_LIST_SIZE_EXP: u32 = 8;
pub const DEFAULT_NUM_REPEAT: usize = 10;
pub const DEFAULT_SEED: u64 = 0;
pub const DEFAULT_K: usize = 16;

/// Validated, immutable benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    sort_type: SortType,
    algorithm: Algorithm,
    list_size_exp: u32,
    list_size: usize,
    num_repeat: usize,
    seed: u64,
    k: usize,
}

impl BenchConfig {
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    pub fn sort_type(&self) -> SortType {
        self.sort_type
    }

    pub fn list_size_exp(&self) -> u32 {
        self.list_size_exp
    }

    /// Number of elements per list, `4^list_size_exp`.
    pub fn list_size(&self) -> usize {
        self.list_size
    }

    pub fn num_repeat(&self) -> usize {
        self.num_repeat
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn k(&self) -> usize {
        self.k
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }
}

#[derive(Debug, Clone, Copy)]
pub struct BenchConfigBuilder {
    sort_type: SortType,
    list_size_exp: u32,
    num_repeat: usize,
    seed: u64,
    k: usize,
}

impl Default for BenchConfigBuilder {
    fn default() -> Self {
        Self {
            sort_type: SortType::default(),
            list_size_exp: DEFAULT_LIST_SIZE_EXP,
            num_repeat: DEFAULT_NUM_REPEAT,
            seed: DEFAULT_SEED,
            k: DEFAULT_K,
        }
    }
}

impl BenchConfigBuilder {
    pub fn sort_type(mut self, sort_type: SortType) -> Self {
        self.sort_type = sort_type;
        self
    }

    /// List length exponent, the list holds `4^exp` elements.
    pub fn list_size_exp(mut self, exp: u32) -> Self {
        self.list_size_exp = exp;
        self
    }

    pub fn num_repeat(mut self, num_repeat: usize) -> Self {
        self.num_repeat = num_repeat;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn build(self) -> Result<BenchConfig, ConfigError> {
        let list_size = 4usize
            .checked_pow(self.list_size_exp)
            .ok_or(ConfigError::ListSizeOverflow {
                exp: self.list_size_exp,
            })?;

        if self.num_repeat == 0 {
            return Err(ConfigError::NoRepeats);
        }

        working_set_bytes(list_size, self.num_repeat)?;

        // `k` only has to be valid for the algorithm that uses it.
        let algorithm = Algorithm::new(self.sort_type, self.k)?;

        Ok(BenchConfig {
            sort_type: self.sort_type,
            algorithm,
            list_size_exp: self.list_size_exp,
            list_size,
            num_repeat: self.num_repeat,
            seed: self.seed,
            k: self.k,
        })
    }
}

/// Bytes needed to hold `num_repeat` lists of `list_size` elements at once.
///
/// Errors if that exceeds the largest possible allocation, `isize::MAX` bytes.
pub fn working_set_bytes(list_size: usize, num_repeat: usize) -> Result<usize, ConfigError> {
    list_size
        .checked_mul(num_repeat)
        .and_then(|len| len.checked_mul(size_of::<i64>()))
        .filter(|&bytes| bytes <= isize::MAX as usize)
        .ok_or(ConfigError::WorkingSetTooLarge {
            list_size,
            num_repeat,
        })
}

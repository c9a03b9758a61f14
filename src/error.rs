use thiserror::Error;

/// Rejected benchmark or algorithm configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid threshold k = {k}, SNUSort needs k >= 1")]
    InvalidThreshold { k: usize },

    #[error("list size 4^{exp} does not fit into usize")]
    ListSizeOverflow { exp: u32 },

    #[error("list size must be at least 1")]
    EmptyList,

    #[error("num_repeat must be at least 1")]
    NoRepeats,

    #[error("{num_repeat} lists of {list_size} elements do not fit into memory")]
    WorkingSetTooLarge { list_size: usize, num_repeat: usize },

    #[error("failed to allocate a list of {len} elements")]
    AllocationFailed { len: usize },
}

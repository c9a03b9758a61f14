//! Randomized quicksort vs. SNUSort, a partial quicksort finished by insertion sort.
//!
//! The library holds the sort implementations and the timing harness. The `snusort` binary is a
//! thin CLI on top of [`harness::run`].

// Enforce explicit error handling - no panicking in library code.
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod generator;
pub mod harness;
pub mod hybrid;
pub mod insertion;
pub mod quicksort;

pub use algorithm::{Algorithm, Sort, SortType};
pub use config::BenchConfig;
pub use error::ConfigError;
pub use hybrid::HybridSort;
pub use quicksort::RandomizedQuickSort;

//! Wall-clock timing of a sort over freshly generated random permutations.

use std::fmt;
use std::hint::black_box;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::algorithm::{Algorithm, Sort};
use crate::config::{working_set_bytes, BenchConfig};
use crate::error::ConfigError;
use crate::generator::random_permutations;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchReport {
    pub algorithm: &'static str,
    pub list_size: usize,
    pub num_repeat: usize,
    /// Average wall-clock time of a single sort call.
    pub avg: Duration,
}

impl BenchReport {
    pub fn avg_secs(&self) -> f64 {
        self.avg.as_secs_f64()
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- List size: {}", self.list_size)?;
        writeln!(f, "- Num repeats: {}", self.num_repeat)?;
        write!(
            f,
            "- Avg. time per sort for {}: {}s",
            self.algorithm,
            self.avg_secs()
        )
    }
}

/// Runs the benchmark described by `config` and prints the report to stdout.
pub fn run(config: &BenchConfig) -> Result<BenchReport, ConfigError> {
    debug!(?config, "starting benchmark");

    let report = measure(
        &config.algorithm(),
        config.list_size(),
        config.num_repeat(),
        config.seed(),
    )?;
    println!("{report}");

    Ok(report)
}

/// Times `algorithm` over `num_repeat` random permutations of `0..list_size` and prints the
/// report to stdout.
///
/// Returns the average time of one sort call in seconds.
pub fn time_sort<S: Sort>(
    algorithm: &S,
    list_size: usize,
    num_repeat: usize,
    seed: u64,
) -> Result<f64, ConfigError> {
    let report = measure(algorithm, list_size, num_repeat, seed)?;
    println!("{report}");

    Ok(report.avg_secs())
}

/// Same as [`time_sort`] without printing.
pub fn measure<S: Sort>(
    algorithm: &S,
    list_size: usize,
    num_repeat: usize,
    seed: u64,
) -> Result<BenchReport, ConfigError> {
    if list_size == 0 {
        return Err(ConfigError::EmptyList);
    }
    if num_repeat == 0 {
        return Err(ConfigError::NoRepeats);
    }
    working_set_bytes(list_size, num_repeat)?;

    // One rng drives both input generation and pivot selection.
    let mut rng = StdRng::seed_from_u64(seed);

    debug!(list_size, num_repeat, seed, "generating inputs");
    let mut inputs = random_permutations(list_size, num_repeat, &mut rng)?;

    debug!(algorithm = algorithm.name(), "sorting");
    let start = Instant::now();
    for v in inputs.iter_mut() {
        algorithm.sort(black_box(v.as_mut_slice()), &mut rng);
    }
    let elapsed = start.elapsed();

    debug_assert!(inputs.iter().all(|v| v.windows(2).all(|w| w[0] <= w[1])));

    let avg = elapsed.div_f64(num_repeat as f64);
    info!(
        algorithm = algorithm.name(),
        list_size,
        num_repeat,
        avg_secs = avg.as_secs_f64(),
        "benchmark finished"
    );

    Ok(BenchReport {
        algorithm: algorithm.name(),
        list_size,
        num_repeat,
        avg,
    })
}

impl Algorithm {
    /// Convenience for [`time_sort`] on an [`Algorithm`].
    pub fn time_sort(
        &self,
        list_size: usize,
        num_repeat: usize,
        seed: u64,
    ) -> Result<f64, ConfigError> {
        time_sort(self, list_size, num_repeat, seed)
    }
}

//! `snusort` CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use snusort_rs::config::{DEFAULT_K, DEFAULT_LIST_SIZE_EXP, DEFAULT_NUM_REPEAT, DEFAULT_SEED};
use snusort_rs::{harness, BenchConfig, SortType};

/// Time randomized quicksort or SNUSort on random permutations.
#[derive(Parser, Debug)]
#[command(name = "snusort", version, long_about = None)]
struct Cli {
    /// Choose sorting algorithm.
    #[arg(long = "sort_type", value_enum, default_value_t = SortType::SnuSort)]
    sort_type: SortType,

    /// List size as a power of 4, e.g. 8 sorts lists of 4^8 = 65536 elements.
    #[arg(long = "list_size", default_value_t = DEFAULT_LIST_SIZE_EXP)]
    list_size: u32,

    /// Partition threshold k for SNUSort, ranges of k or fewer elements are left to insertion sort.
    #[arg(long = "k", default_value_t = DEFAULT_K)]
    k: usize,

    /// Number of times to repeat for timing.
    #[arg(long = "num_repeat", default_value_t = DEFAULT_NUM_REPEAT)]
    num_repeat: usize,

    /// Seed for input generation and pivot selection.
    #[arg(long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,
}

fn main() -> ExitCode {
    // Diagnostics go to stderr, stdout is reserved for the report.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let config = match BenchConfig::builder()
        .sort_type(cli.sort_type)
        .list_size_exp(cli.list_size)
        .k(cli.k)
        .num_repeat(cli.num_repeat)
        .seed(cli.seed)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match harness::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

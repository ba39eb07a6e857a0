//! Bounded settings and logging setup.
//!
//! Every tunable has a default, an inclusive range enforced by clap, and a
//! `CLASSICS_*` environment variable that stands in for the flag.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "CLASSICS_LOG";

pub const DEFAULT_BENCH_NODES: u64 = 100_000;
pub const MAX_BENCH_NODES: u64 = 10_000_000;

pub const DEFAULT_DEPTH: u32 = 2;
pub const MAX_DEPTH: u32 = 64;

pub const DEFAULT_DISCS: u32 = 3;
pub const MAX_DISCS: u32 = 24;

pub const DEFAULT_PI_TERMS: u32 = 1_000_000;

pub const DEFAULT_FIB_N: u32 = 20;
/// Naive recursion past this takes minutes.
pub const MAX_RECURSIVE_FIB_N: u32 = 40;

/// Install a stderr fmt subscriber.
///
/// With no `-v`, the filter comes from `CLASSICS_LOG` (default `info`).
/// `-v` forces `debug`, `-vv` forces `trace`.
pub fn init_logging(verbose: u8) -> Result<()> {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

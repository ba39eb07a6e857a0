//! classics CLI
//!
//! Runs the graph search demos and the standalone algorithm exercises.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use classics_exercises::fibonacci::{fib_iterative, fib_recursive, FibMemo, Fibonacci};
use classics_exercises::gene::CompressedGene;
use classics_exercises::hanoi::Hanoi;
use classics_exercises::{otp, pi};
use tracing::debug;

mod bench;
mod config;
mod route;

use config::{
    DEFAULT_BENCH_NODES, DEFAULT_DEPTH, DEFAULT_DISCS, DEFAULT_FIB_N, DEFAULT_PI_TERMS,
    MAX_BENCH_NODES, MAX_DEPTH, MAX_DISCS, MAX_RECURSIVE_FIB_N,
};

#[derive(Parser)]
#[command(name = "classics")]
#[command(
    author,
    version,
    about = "Graph search and classic algorithm exercises",
    long_about = None
)]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace); overrides CLASSICS_LOG
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shortest route between two vertices by breadth-first search
    Route {
        #[arg(long, default_value = "Boston")]
        from: String,

        #[arg(long, default_value = "Miami")]
        to: String,

        /// JSON edge list to search instead of the built-in city network
        #[arg(long, env = "CLASSICS_GRAPH", value_name = "FILE")]
        graph: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Every vertex within a hop limit of a starting vertex
    Neighborhood {
        #[arg(long)]
        from: String,

        #[arg(
            long,
            env = "CLASSICS_DEPTH",
            default_value_t = DEFAULT_DEPTH,
            value_parser = clap::value_parser!(u32).range(0..=i64::from(MAX_DEPTH))
        )]
        depth: u32,

        #[arg(long, env = "CLASSICS_GRAPH", value_name = "FILE")]
        graph: Option<PathBuf>,
    },

    /// Approximate pi with the Leibniz series
    Pi {
        #[arg(long, env = "CLASSICS_PI_TERMS", default_value_t = DEFAULT_PI_TERMS)]
        terms: u32,
    },

    /// Encrypt and decrypt text with a one-time pad
    Otp {
        text: String,
    },

    /// Solve Towers of Hanoi
    Hanoi {
        #[arg(
            long,
            env = "CLASSICS_DISCS",
            default_value_t = DEFAULT_DISCS,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DISCS))
        )]
        discs: u32,

        /// Print every move
        #[arg(long)]
        show_moves: bool,
    },

    /// Compute Fibonacci numbers
    Fib {
        #[arg(short, long, default_value_t = DEFAULT_FIB_N)]
        n: u32,

        #[arg(long, value_enum, default_value_t = FibVariant::Iterative)]
        variant: FibVariant,
    },

    /// Pack a nucleotide sequence into 2 bits per base
    Gene {
        sequence: String,
    },

    /// Time BFS over generated graphs
    Bench {
        #[arg(long, value_enum, default_value_t = bench::Generator::All)]
        generator: bench::Generator,

        #[arg(
            long,
            env = "CLASSICS_BENCH_NODES",
            default_value_t = DEFAULT_BENCH_NODES,
            value_parser = clap::value_parser!(u64).range(1..=MAX_BENCH_NODES)
        )]
        nodes: u64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FibVariant {
    Recursive,
    Memo,
    Iterative,
    /// Print fib(0) through fib(n)
    Sequence,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    config::init_logging(cli.verbose)?;
    run(cli.command)
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Route { from, to, graph, json } => {
            route::run_route(&from, &to, graph.as_deref(), json)
        }
        Commands::Neighborhood { from, depth, graph } => {
            route::run_neighborhood(&from, depth, graph.as_deref())
        }
        Commands::Pi { terms } => {
            println!("{}", pi::calculate_pi(terms));
            Ok(())
        }
        Commands::Otp { text } => {
            let pair = otp::encrypt(&text);
            debug!(bytes = pair.encrypted.len(), "encrypted");
            println!("key:       {}", hex(&pair.dummy));
            println!("encrypted: {}", hex(&pair.encrypted));
            println!("decrypted: {}", otp::decrypt(&pair)?);
            Ok(())
        }
        Commands::Hanoi { discs, show_moves } => {
            let mut hanoi = Hanoi::new(discs);
            let moves = hanoi.solve()?;
            if show_moves {
                for m in moves {
                    println!("disc {}: {} -> {}", m.disc, m.from, m.to);
                }
            }
            println!("{} discs solved in {} moves", discs, moves.len());
            Ok(())
        }
        Commands::Fib { n, variant } => run_fib(n, variant),
        Commands::Gene { sequence } => {
            let gene = CompressedGene::compress(&sequence);
            println!(
                "{} bases packed into {} bytes ({} characters skipped)",
                gene.len(),
                gene.byte_len(),
                gene.skipped()
            );
            println!("{}", gene);
            Ok(())
        }
        Commands::Bench { generator, nodes } => bench::run(generator, nodes),
    }
}

fn run_fib(n: u32, variant: FibVariant) -> Result<()> {
    match variant {
        FibVariant::Recursive => {
            if n > MAX_RECURSIVE_FIB_N {
                bail!(
                    "naive recursion is limited to n <= {}; use --variant memo",
                    MAX_RECURSIVE_FIB_N
                );
            }
            println!("{}", fib_recursive(n)?);
        }
        FibVariant::Memo => println!("{}", FibMemo::new().fib(n)?),
        FibVariant::Iterative => println!("{}", fib_iterative(n)?),
        FibVariant::Sequence => {
            let values: Vec<String> = Fibonacci::new()
                .take(n as usize + 1)
                .map(|v| v.to_string())
                .collect();
            println!("{}", values.join(" "));
        }
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

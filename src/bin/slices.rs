//! Byte iteration benchmark.
//!
//! Prints a CSV report suitable for https://ozh.github.io/ascii-tables/.
//! Any checksum mismatch or unreadable input ends the run with a non-zero
//! exit status before further trials start.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use slicebench::input::{generate_input, DEFAULT_INPUT_SIZE};
use slicebench::{Approach, BenchConfig, Report};
use std::io;
use std::num::NonZeroUsize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "slices")]
#[command(about = "Compare ways of iterating over a large byte buffer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the benchmark and print the CSV report (default)
    Run(RunArgs),
    /// Write a reproducible input file and print its checksum
    Generate(GenerateArgs),
}

#[derive(Debug, Default, Args)]
struct RunArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input file (overrides the configuration)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Bytes per block
    #[arg(long)]
    block_size: Option<usize>,

    /// Known-good checksum of the input
    #[arg(long)]
    expected_checksum: Option<u64>,

    /// Known-good CRC-32 of the input
    #[arg(long)]
    expected_fingerprint: Option<u32>,

    /// Approaches to run, in order (slicing, indexed-range, indirect-range, forced-copies, parallel-chunks)
    #[arg(short, long = "approach", value_name = "NAME")]
    approaches: Vec<Approach>,

    /// Iterations for every selected approach (overrides per-approach counts)
    #[arg(short = 'n', long)]
    iterations: Option<NonZeroUsize>,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Where to write the input
    #[arg(short, long, default_value = "30megabytes.bin")]
    output: PathBuf,

    /// File size in bytes
    #[arg(short, long, default_value_t = DEFAULT_INPUT_SIZE)]
    size: usize,

    /// Seed for the byte generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Run(args)) => run(args),
        Some(Command::Generate(args)) => generate(args),
        None => run(RunArgs::default()),
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = resolve_config(args)?;
    log::info!(
        "benchmarking {} approach(es) over {} (block size {})",
        config.approaches.len(),
        config.input.display(),
        config.block_size
    );

    let stdout = io::stdout();
    let mut report = Report::begin(stdout.lock())?;
    for (trial, iterations) in config.trials() {
        let label = trial.approach.label();
        report
            .run(label, || trial.run(), iterations)
            .with_context(|| format!("{} aborted", label))?;
    }
    Ok(())
}

fn resolve_config(args: RunArgs) -> Result<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => BenchConfig::default(),
    };

    if let Some(input) = args.input {
        config.input = input;
    }
    if let Some(block_size) = args.block_size {
        config.block_size = block_size;
    }
    if let Some(checksum) = args.expected_checksum {
        config.expected_checksum = checksum;
    }
    if args.expected_fingerprint.is_some() {
        config.expected_fingerprint = args.expected_fingerprint;
    }
    if !args.approaches.is_empty() {
        config.approaches = args
            .approaches
            .into_iter()
            .map(slicebench::config::ApproachConfig::with_default_iterations)
            .collect();
    }
    if let Some(iterations) = args.iterations {
        for approach in &mut config.approaches {
            approach.iterations = iterations;
        }
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn generate(args: GenerateArgs) -> Result<()> {
    let summary = generate_input(&args.output, args.size, args.seed)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("input: {}", args.output.display());
    println!("bytes: {}", summary.len);
    println!("expected_checksum = {}", summary.checksum);
    if let Some(fingerprint) = summary.fingerprint {
        println!("expected_fingerprint = {}", fingerprint);
    }
    Ok(())
}

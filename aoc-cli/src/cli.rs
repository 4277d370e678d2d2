//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// How independent solvers are spread over the thread pool
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum ParallelizeBy {
    /// Run everything in order on the calling thread
    Sequential,
    /// One task per year; days and parts within a year run in order
    Year,
    /// One task per year/day; parts run in order (default)
    #[default]
    Day,
}

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding puzzle inputs named `{year}_day{day:02}.txt`
    #[arg(long, default_value = "~/.cache/aoc_solver")]
    pub input_dir: PathBuf,

    /// Read this file instead of the input directory (needs --year and --day)
    #[arg(long, requires_all = ["year", "day"])]
    pub input: Option<PathBuf>,

    /// Number of threads for parallel execution
    #[arg(long)]
    pub threads: Option<usize>,

    /// Parallelization level: sequential, year or day
    #[arg(long, value_enum, default_value = "day")]
    pub parallelize_by: ParallelizeBy,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

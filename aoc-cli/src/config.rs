//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory path
    pub input_dir: PathBuf,
    /// Explicit input file, only set together with a year and day filter
    pub input_file: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            input_file: args.input.as_deref().map(expand_tilde),
            thread_count: args.threads.filter(|&n| n > 0).unwrap_or_else(num_cpus),
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        }
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

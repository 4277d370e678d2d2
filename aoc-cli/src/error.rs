//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;
use thiserror_ext::Arc as ArcDerive;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// Executor error (wraps Arc for cheap cloning)
    #[error("{0}")]
    Executor(#[from] ArcExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug, ArcDerive)]
#[thiserror_ext(newtype(name = ArcExecutorError))]
pub enum ExecutorError {
    /// Input could not be read
    #[error("Input unavailable for {year}/{day:02}: {source}")]
    Input {
        year: u16,
        day: u8,
        #[source]
        source: CacheError,
    },

    /// Parsing or solving failed
    #[error("{0}")]
    Solver(#[from] aoc_solver::SolverError),

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ArcExecutorError>),
}

impl ArcExecutorError {
    /// Combine two errors into one `Multiple`, flattening either side
    /// that already is one and keeping `first` before `second`
    pub fn combine(first: ArcExecutorError, second: ArcExecutorError) -> ArcExecutorError {
        let errors = match (first.inner(), second.inner()) {
            (ExecutorError::Multiple(v1), ExecutorError::Multiple(v2)) => {
                let mut combined = v1.clone();
                combined.extend(v2.iter().cloned());
                combined
            }
            (_, ExecutorError::Multiple(v)) => {
                let mut combined = vec![first];
                combined.extend(v.iter().cloned());
                combined
            }
            (ExecutorError::Multiple(v), _) => {
                let mut combined = v.clone();
                combined.push(second);
                combined
            }
            _ => vec![first, second],
        };
        ExecutorError::Multiple(errors).into()
    }
}

/// Input directory errors
#[derive(Error, Debug)]
pub enum CacheError {
    /// The input file does not exist
    #[error("no input file at {}", .0.display())]
    Missing(PathBuf),

    /// The input file exists but could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

//! Errors raised while registering, parsing and solving

use thiserror::Error;

/// Input text that a day could not turn into its shared data
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// A line or token is malformed; the message names the line
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    /// A section the puzzle needs is absent (empty input, no separator)
    #[error("Missing data: {0}")]
    MissingData(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// Failure to answer one part from already parsed data
#[derive(Debug, Error)]
pub enum SolveError {
    /// No `PartSolver` impl exists for the part
    #[error("Part {0} is not implemented")]
    PartNotImplemented(u8),
    /// Part is outside `1..=PARTS`
    #[error("Part {0} is out of range")]
    PartOutOfRange(u8),
    /// The data parsed but has no valid answer (no marker, too few elves, ...)
    #[error("Solve failed: {0}")]
    SolveFailed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Anything that can go wrong between a year/day lookup and an answer
#[derive(Debug, Error)]
pub enum SolverError {
    #[error("No solver registered for {0}/{1:02}")]
    NotFound(u16, u8),
    #[error("Year {0} day {1} is outside the registry")]
    InvalidYearDay(u16, u8),
    #[error("Parse error: {0}")]
    ParseError(#[from] ParseError),
    #[error("Solve error: {0}")]
    SolveError(#[from] SolveError),
}

/// Rejected registry registration
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    #[error("A solver for {0}/{1:02} is already registered")]
    DuplicateSolver(u16, u8),
    #[error("Year {0} day {1} is outside the registry")]
    InvalidYearDay(u16, u8),
}

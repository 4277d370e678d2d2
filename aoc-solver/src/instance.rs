//! A day's input parsed once, with the parse and each solve timed

use crate::error::{ParseError, SolveError};
use crate::solver::{Solver, SolverExt};
use chrono::{DateTime, TimeDelta, Utc};

/// One part's answer and the wall-clock window it was computed in
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub part: u8,
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveResult {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// `S::SharedData` for one year/day, plus when it was parsed
///
/// Day 7 relies on this: whichever part runs first computes the directory
/// sizes and the other part reuses them.
pub struct SolverInstance<'a, S: Solver> {
    year: u16,
    day: u8,
    shared: S::SharedData<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, S: Solver> SolverInstance<'a, S> {
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let shared = S::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            shared,
            parse_start,
            parse_end,
        })
    }

    pub fn shared(&self) -> &S::SharedData<'a> {
        &self.shared
    }
}

/// What the registry hands out: a parsed day with its types erased
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Lines>(2022, 10)
///     .unwrap()
///     .build();
/// let mut solver = registry.create_solver(2022, 10, "noop\naddx 3").unwrap();
/// assert_eq!((solver.year(), solver.day(), solver.parts()), (2022, 10, 1));
/// assert_eq!(solver.solve(1).unwrap().answer, "2");
/// assert!(solver.solve(2).is_err());
/// assert!(solver.parse_duration() >= chrono::TimeDelta::zero());
/// ```
pub trait DynSolver {
    /// Parts outside `1..=parts()` fail with `PartOutOfRange`
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// `PARTS` of the day behind this instance
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, S: SolverExt> DynSolver for SolverInstance<'a, S> {
    fn solve(&mut self, part: u8) -> Result<SolveResult, SolveError> {
        let solve_start = Utc::now();
        let answer = S::solve_part_checked_range(&mut self.shared, part)?;
        let solve_end = Utc::now();

        Ok(SolveResult {
            part,
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        S::PARTS
    }
}

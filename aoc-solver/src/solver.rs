//! The traits a day implements
//!
//! A day is a unit struct. [`AocParser`] turns the puzzle text into the
//! day's shared data once; each part is a [`PartSolver<N>`] working on that
//! data; [`Solver`] ties the parts together under a part number and is
//! normally derived with `#[derive(AocSolver)]`.

use crate::error::{ParseError, SolveError};

/// Puzzle text to shared data
///
/// `SharedData` may borrow from the input (`Vec<&'a str>` for rucksacks,
/// `&'a [u8]` for a datastream) or own it (a tree, a grid). It is handed to
/// every part by `&mut`, so a part can leave work behind for the next one.
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Datastream;
///
/// impl AocParser for Datastream {
///     type SharedData<'a> = &'a [u8];
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         match input.lines().next().map(str::trim) {
///             Some(line) if !line.is_empty() => Ok(line.as_bytes()),
///             _ => Err(ParseError::MissingData("empty datastream".into())),
///         }
///     }
/// }
///
/// assert_eq!(Datastream::parse("abc\n").unwrap(), b"abc");
/// assert!(Datastream::parse("").is_err());
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answer to part `N`
///
/// ```
/// use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
///
/// struct Calories;
///
/// impl AocParser for Calories {
///     type SharedData<'a> = Vec<u64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Calories {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         let most = shared.iter().max().ok_or_else(|| SolveError::SolveFailed("no elves".into()))?;
///         Ok(most.to_string())
///     }
/// }
///
/// let mut data = Calories::parse("3000\n9000\n4000").unwrap();
/// assert_eq!(<Calories as PartSolver<1>>::solve(&mut data).unwrap(), "9000");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Part-number dispatch over a day's [`PartSolver`] impls
///
/// `#[derive(AocSolver)]` with `#[aoc_solver(max_parts = N)]` writes this
/// impl; parts above `N` answer [`SolveError::PartNotImplemented`].
/// A hand-written impl is fine too:
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Totals;
///
/// impl AocParser for Totals {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl Solver for Totals {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => Ok(shared.iter().sum::<u32>().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut data = Totals::parse("2\n6").unwrap();
/// assert_eq!(Totals::solve_part(&mut data, 2).unwrap(), "8");
/// ```
pub trait Solver: AocParser {
    /// Highest part number; parts are `1..=PARTS`
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// [`Solver::solve_part`] that refuses parts outside `1..=PARTS` with
/// [`SolveError::PartOutOfRange`] before dispatching
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

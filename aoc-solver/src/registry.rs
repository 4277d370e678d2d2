//! Year/day keyed registry of solver factories

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of years the registry can hold (2015-2034)
pub const MAX_YEARS: usize = 20;
pub const DAYS_PER_YEAR: usize = 25;
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for year/day, `None` when out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory that parses an input and returns a ready solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    pub parts: u8,
}

struct SolverFactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Read-only storage of factories, one slot per year/day
///
/// Iteration follows slot order, which is ascending by year then day.
pub struct SolverFactoryStorage {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverFactoryStorage {
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

/// Builder for an immutable [`SolverRegistry`]
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Sum;
///
/// impl AocParser for Sum {
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
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<u32>().to_string())
///     }
/// }
///
/// let registry = SolverRegistryBuilder::new()
///     .register_solver::<Sum>(2022, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "6");
/// ```
pub struct SolverRegistryBuilder {
    entries: Vec<Option<SolverFactoryEntry>>,
}

impl SolverRegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory with an explicit part count
    ///
    /// Fails if year/day is out of bounds or already registered.
    pub fn register_factory<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }

        self.entries[index] = Some(SolverFactoryEntry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Solver`] type directly
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register_factory(year, day, S::PARTS, move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        })
    }

    /// Register every plugin submitted through `inventory`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::SolverRegistryBuilder;
    /// let registry = SolverRegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2022)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            storage: SolverFactoryStorage {
                entries: self.entries,
            },
        }
    }
}

impl Default for SolverRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry of solver factories
pub struct SolverRegistry {
    storage: SolverFactoryStorage,
}

impl SolverRegistry {
    /// Read-only access for iteration and lookup
    pub fn storage(&self) -> &SolverFactoryStorage {
        &self.storage
    }

    /// Parse `input` with the solver registered for year/day
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .storage
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }
}

/// Object-safe registration hook so solvers of different types can be
/// collected as plugins
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: SolverRegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<SolverRegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// A solver submitted for automatic registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`.
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Tags for filtering (e.g. "2022", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

/// Register a solver type on a builder variable, panicking on conflicts
///
/// ```
/// use aoc_solver::{register_solver, AocParser, ParseError, SolveError, Solver, SolverRegistryBuilder};
///
/// struct Echo;
///
/// impl AocParser for Echo {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Echo {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.to_string())
///     }
/// }
///
/// let mut builder = SolverRegistryBuilder::new();
/// register_solver!(builder, Echo, 2022, 1);
/// let registry = builder.build();
/// assert!(registry.storage().contains(2022, 1));
/// ```
#[macro_export]
macro_rules! register_solver {
    ($builder:expr, $solver:ty, $year:expr, $day:expr) => {
        $builder = $builder
            .register_solver::<$solver>($year, $day)
            .expect("Failed to register solver");
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips_for_every_slot() {
        for index in 0..CAPACITY {
            let (year, day) = from_index(index);
            assert_eq!(calc_index(year, day), Some(index));
        }
    }

    #[test]
    fn index_rejects_out_of_range() {
        assert_eq!(calc_index(2014, 1), None);
        assert_eq!(calc_index(2035, 1), None);
        assert_eq!(calc_index(2022, 0), None);
        assert_eq!(calc_index(2022, 26), None);
    }
}

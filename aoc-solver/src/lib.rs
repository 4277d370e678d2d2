//! Advent of Code Solver Library
//!
//! A small framework for Advent of Code puzzles. Each day implements a
//! parser producing shared data and one solver per part; the registry maps
//! year/day pairs to type-erased, timed solver instances.
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Day1;
//!
//! impl AocParser for Day1 {
//!     type SharedData<'a> = Vec<i32>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i32>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Day1 {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i32>().to_string())
//!     }
//! }
//!
//! let registry = SolverRegistryBuilder::new()
//!     .register_solver::<Day1>(2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Plugins
//!
//! `#[derive(AutoRegisterSolver)]` submits a solver to the plugin
//! inventory so that [`SolverRegistryBuilder::register_all_plugins`] finds
//! it without any manual wiring:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2022, day = 1, tags = ["2022"])]
//! pub struct CalorieCounting;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Used by the AutoRegisterSolver expansion
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

//! Advent of Code 2022 puzzle solutions
//!
//! Every day is a unit struct deriving `AocSolver` and
//! `AutoRegisterSolver`, so linking this crate is enough for
//! `SolverRegistryBuilder::register_all_plugins` to find it.

mod parsing;
pub mod year_2022;

//! Day 1: Calorie Counting

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::parsing::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 1, tags = ["2022"])]
pub struct CalorieCounting;

/// An elf and the calories it carries; `number` counts from 1 in input order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elf {
    pub number: usize,
    pub calories: u64,
}

impl AocParser for CalorieCounting {
    /// Elves sorted by calories, most first
    type SharedData<'a> = Vec<Elf>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut elves = Vec::new();
        let mut carried: Option<u64> = None;

        for (idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                if let Some(calories) = carried.take() {
                    elves.push(Elf {
                        number: elves.len() + 1,
                        calories,
                    });
                }
                continue;
            }
            let calories: u64 = line
                .parse()
                .map_err(|e| line_error(idx, format!("{e}: {line:?}")))?;
            *carried.get_or_insert(0) += calories;
        }
        if let Some(calories) = carried {
            elves.push(Elf {
                number: elves.len() + 1,
                calories,
            });
        }

        if elves.is_empty() {
            return Err(ParseError::MissingData("no calorie counts".into()));
        }
        // stable, so equal totals keep input order
        elves.sort_by(|a, b| b.calories.cmp(&a.calories));
        Ok(elves)
    }
}

/// The elf carrying the most calories
pub fn largest_elf(elves: &[Elf]) -> Option<&Elf> {
    elves.first()
}

/// Total carried by the `n` best-stocked elves, `None` if there are fewer than `n`
pub fn sum_top(elves: &[Elf], n: usize) -> Option<u64> {
    elves
        .get(..n)
        .map(|top| top.iter().map(|elf| elf.calories).sum())
}

pub fn sum_top_three(elves: &[Elf]) -> Option<u64> {
    sum_top(elves, 3)
}

impl PartSolver<1> for CalorieCounting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        largest_elf(shared)
            .map(|elf| elf.calories.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no elves".into()))
    }
}

impl PartSolver<2> for CalorieCounting {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        sum_top_three(shared)
            .map(|total| total.to_string())
            .ok_or_else(|| {
                SolveError::SolveFailed(format!("need three elves, found {}", shared.len()).into())
            })
    }
}

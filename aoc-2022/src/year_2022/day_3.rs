//! Day 3: Rucksack Reorganization
//!
//! Item types are tracked as bits of a `u64`, with bit `p` set for the item
//! of priority `p`, so shared items fall out of a bitwise AND.

use anyhow::{anyhow, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::parsing::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 3, tags = ["2022"])]
pub struct RucksackReorganization;

/// a-z are 1-26, A-Z are 27-52
pub fn priority(item: u8) -> Option<u32> {
    match item {
        b'a'..=b'z' => Some(u32::from(item - b'a') + 1),
        b'A'..=b'Z' => Some(u32::from(item - b'A') + 27),
        _ => None,
    }
}

/// Set of item types present in `items`
fn item_set(items: &[u8]) -> u64 {
    items
        .iter()
        .filter_map(|&item| priority(item))
        .fold(0, |set, p| set | 1 << p)
}

/// Priority of the only item type in `set`
fn single_priority(set: u64) -> Result<u32, SolveError> {
    match set.count_ones() {
        1 => Ok(set.trailing_zeros()),
        0 => Err(SolveError::SolveFailed("no common item".into())),
        n => Err(SolveError::SolveFailed(
            format!("{n} common items, expected one").into(),
        )),
    }
}

/// Priority of the item found in both compartments of a rucksack
pub fn misplaced_priority(rucksack: &str) -> Result<u32, SolveError> {
    let (left, right) = rucksack.as_bytes().split_at(rucksack.len() / 2);
    single_priority(item_set(left) & item_set(right))
        .map_err(|e| SolveError::SolveFailed(format!("rucksack {rucksack:?}: {e}").into()))
}

/// Priority of the badge, the one item carried by every rucksack in a group
pub fn badge_priority(group: &[&str]) -> Result<u32, SolveError> {
    let common = group
        .iter()
        .map(|rucksack| item_set(rucksack.as_bytes()))
        .reduce(|a, b| a & b)
        .unwrap_or(0);
    single_priority(common)
}

impl AocParser for RucksackReorganization {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let rucksacks = parse_lines(input, |line| {
            let line = line.trim();
            ensure!(!line.is_empty(), "empty rucksack");
            if let Some(bad) = line.bytes().find(|b| !b.is_ascii_alphabetic()) {
                return Err(anyhow!("invalid item {:?}", bad as char));
            }
            ensure!(
                line.len() % 2 == 0,
                "rucksack of {} items cannot be split evenly",
                line.len()
            );
            Ok(line)
        })?;
        if rucksacks.is_empty() {
            return Err(ParseError::MissingData("no rucksacks".into()));
        }
        Ok(rucksacks)
    }
}

impl PartSolver<1> for RucksackReorganization {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .map(|rucksack| misplaced_priority(rucksack))
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

impl PartSolver<2> for RucksackReorganization {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.len() % 3 != 0 {
            return Err(SolveError::SolveFailed(
                format!("{} rucksacks do not form groups of three", shared.len()).into(),
            ));
        }
        shared
            .chunks(3)
            .map(badge_priority)
            .sum::<Result<u32, _>>()
            .map(|total| total.to_string())
    }
}

//! Day 4: Camp Cleanup

use anyhow::{Context, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use std::fmt;
use std::str::FromStr;

use crate::parsing::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 4, tags = ["2022", "intervals"])]
pub struct CampCleanup;

/// Inclusive range of section IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub start: u32,
    pub end: u32,
}

impl Assignment {
    pub fn fully_contains(&self, other: &Assignment) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl FromStr for Assignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once('-')
            .with_context(|| format!("expected start-end, got {s:?}"))?;
        let start: u32 = start
            .trim()
            .parse()
            .with_context(|| format!("bad section {start:?}"))?;
        let end: u32 = end
            .trim()
            .parse()
            .with_context(|| format!("bad section {end:?}"))?;
        ensure!(start <= end, "range {start}-{end} ends before it starts");
        Ok(Assignment { start, end })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentPair {
    pub left: Assignment,
    pub right: Assignment,
}

impl AssignmentPair {
    /// Whether either assignment contains the other
    pub fn fully_contains(&self) -> bool {
        self.left.fully_contains(&self.right) || self.right.fully_contains(&self.left)
    }

    /// Sections assigned to both elves, as an inclusive range
    fn shared(&self) -> (u32, u32) {
        (
            self.left.start.max(self.right.start),
            self.left.end.min(self.right.end),
        )
    }

    /// Number of sections assigned to both elves
    ///
    /// `u64` because `0-4294967295` on both sides shares 2^32 sections.
    pub fn overlapping_sections(&self) -> u64 {
        let (start, end) = self.shared();
        if start <= end {
            u64::from(end - start) + 1
        } else {
            0
        }
    }

    pub fn overlaps(&self) -> bool {
        let (start, end) = self.shared();
        start <= end
    }
}

impl FromStr for AssignmentPair {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (left, right) = s
            .trim()
            .split_once(',')
            .with_context(|| format!("expected two comma separated ranges, got {s:?}"))?;
        Ok(AssignmentPair {
            left: left.parse()?,
            right: right.parse()?,
        })
    }
}

impl fmt::Display for AssignmentPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{},{}-{}",
            self.left.start, self.left.end, self.right.start, self.right.end
        )
    }
}

impl AocParser for CampCleanup {
    type SharedData<'a> = Vec<AssignmentPair>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_lines(input, str::parse)
    }
}

impl PartSolver<1> for CampCleanup {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|pair| pair.fully_contains()).count();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for CampCleanup {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.iter().filter(|pair| pair.overlaps()).count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;
    use proptest::prelude::*;

    const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8";

    #[test]
    fn part_1_example() {
        let mut pairs = CampCleanup::parse(EXAMPLE).unwrap();
        assert_eq!(CampCleanup::solve_part(&mut pairs, 1).unwrap(), "2");
    }

    #[test]
    fn part_2_example() {
        let mut pairs = CampCleanup::parse(EXAMPLE).unwrap();
        assert_eq!(CampCleanup::solve_part(&mut pairs, 2).unwrap(), "4");
    }

    #[test]
    fn overlapping_sections_in_example() {
        let pairs = CampCleanup::parse(EXAMPLE).unwrap();
        let sections: Vec<u64> = pairs.iter().map(|p| p.overlapping_sections()).collect();
        assert_eq!(sections, vec![0, 0, 1, 5, 1, 3]);
    }

    #[test]
    fn pairs_display_as_parsed() {
        let pairs = CampCleanup::parse(EXAMPLE).unwrap();
        let shown: Vec<String> = pairs.iter().map(ToString::to_string).collect();
        assert_eq!(shown.join("\n"), EXAMPLE);
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert!(CampCleanup::parse("2-4;6-8").is_err());
        assert!(CampCleanup::parse("2-4,6").is_err());
        assert!(CampCleanup::parse("2-x,6-8").is_err());
        assert!(CampCleanup::parse("4-2,6-8").is_err());
    }

    #[test]
    fn full_u32_range_does_not_overflow() {
        let input = "0-4294967295,0-4294967295\n4294967295-4294967295,0-4294967295";
        let mut pairs = CampCleanup::parse(input).unwrap();
        assert_eq!(pairs[0].overlapping_sections(), 1 << 32);
        assert_eq!(pairs[1].overlapping_sections(), 1);
        assert_eq!(CampCleanup::solve_part(&mut pairs, 1).unwrap(), "2");
        assert_eq!(CampCleanup::solve_part(&mut pairs, 2).unwrap(), "2");
    }

    fn assignment() -> impl Strategy<Value = Assignment> {
        (0u32..50, 0u32..50).prop_map(|(a, b)| Assignment {
            start: a.min(b),
            end: a.max(b),
        })
    }

    proptest! {
        #[test]
        fn containment_implies_overlap(left in assignment(), right in assignment()) {
            let pair = AssignmentPair { left, right };
            if pair.fully_contains() {
                prop_assert!(pair.overlaps());
            }
        }

        #[test]
        fn overlap_is_symmetric(left in assignment(), right in assignment()) {
            let pair = AssignmentPair { left, right };
            let swapped = AssignmentPair { left: right, right: left };
            prop_assert_eq!(pair.overlapping_sections(), swapped.overlapping_sections());
            prop_assert_eq!(pair.fully_contains(), swapped.fully_contains());
        }

        #[test]
        fn overlap_counts_shared_sections(left in assignment(), right in assignment()) {
            let pair = AssignmentPair { left, right };
            let shared = (left.start..=left.end)
                .filter(|s| (right.start..=right.end).contains(s))
                .count() as u64;
            prop_assert_eq!(pair.overlapping_sections(), shared);
            prop_assert_eq!(pair.overlaps(), shared > 0);
        }
    }
}

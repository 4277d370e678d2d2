//! Day 6: Tuning Trouble

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 6, tags = ["2022", "strings"])]
pub struct TuningTrouble;

pub const START_OF_PACKET: usize = 4;
pub const START_OF_MESSAGE: usize = 14;

/// Number of characters read when the first window of `size` distinct
/// characters is complete
///
/// Runs in one pass: the window start jumps past the previous occurrence
/// of each character as soon as that occurrence falls inside the window.
pub fn find_marker(stream: &[u8], size: usize) -> Option<usize> {
    if size == 0 {
        return Some(0);
    }
    let mut last_seen = [None::<usize>; 256];
    let mut window_start = 0;
    for (i, &byte) in stream.iter().enumerate() {
        if let Some(prev) = last_seen[byte as usize]
            && prev >= window_start
        {
            window_start = prev + 1;
        }
        last_seen[byte as usize] = Some(i);
        if i + 1 - window_start == size {
            return Some(i + 1);
        }
    }
    None
}

fn solve_marker(stream: &[u8], size: usize) -> Result<String, SolveError> {
    find_marker(stream, size)
        .map(|position| position.to_string())
        .ok_or_else(|| {
            SolveError::SolveFailed(format!("no window of {size} distinct characters").into())
        })
}

impl AocParser for TuningTrouble {
    type SharedData<'a> = &'a [u8];

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stream = input.lines().next().unwrap_or_default().trim();
        if stream.is_empty() {
            return Err(ParseError::MissingData("empty datastream".into()));
        }
        Ok(stream.as_bytes())
    }
}

impl PartSolver<1> for TuningTrouble {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, START_OF_PACKET)
    }
}

impl PartSolver<2> for TuningTrouble {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_marker(shared, START_OF_MESSAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;
    use proptest::prelude::*;

    const EXAMPLES: [(&str, usize, usize); 5] = [
        ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
        ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
    ];

    #[test]
    fn part_1_examples() {
        for (stream, packet, _) in EXAMPLES {
            let mut shared = TuningTrouble::parse(stream).unwrap();
            assert_eq!(
                TuningTrouble::solve_part(&mut shared, 1).unwrap(),
                packet.to_string(),
                "{stream}"
            );
        }
    }

    #[test]
    fn part_2_examples() {
        for (stream, _, message) in EXAMPLES {
            let mut shared = TuningTrouble::parse(stream).unwrap();
            assert_eq!(
                TuningTrouble::solve_part(&mut shared, 2).unwrap(),
                message.to_string(),
                "{stream}"
            );
        }
    }

    #[test]
    fn no_marker_fails() {
        let mut shared = TuningTrouble::parse("aaaaaaa\n").unwrap();
        assert!(matches!(
            TuningTrouble::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn empty_input_is_missing_data() {
        assert!(matches!(
            TuningTrouble::parse("\n"),
            Err(ParseError::MissingData(_))
        ));
    }

    fn all_distinct(window: &[u8]) -> bool {
        window
            .iter()
            .enumerate()
            .all(|(i, b)| !window[i + 1..].contains(b))
    }

    proptest! {
        #[test]
        fn marker_is_first_distinct_window(stream in "[a-e]{0,40}", size in 1usize..=5) {
            let bytes = stream.as_bytes();
            let expected = bytes
                .windows(size)
                .position(all_distinct)
                .map(|start| start + size);
            prop_assert_eq!(find_marker(bytes, size), expected);
        }
    }
}

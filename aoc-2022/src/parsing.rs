//! Line-oriented parsing helpers shared by the day modules

use aoc_solver::ParseError;
use std::fmt::Display;

/// Parse each line of `input` with `parse_line`
///
/// Trailing whitespace of the whole input is ignored. The first failing
/// line is reported with its 1-based line number.
pub(crate) fn parse_lines<'a, T, F>(input: &'a str, mut parse_line: F) -> Result<Vec<T>, ParseError>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    input
        .trim_end()
        .lines()
        .enumerate()
        .map(|(idx, line)| parse_line(line).map_err(|e| line_error(idx, e)))
        .collect()
}

/// `InvalidFormat` for the zero-based line `idx`
pub(crate) fn line_error(idx: usize, err: impl Display) -> ParseError {
    ParseError::InvalidFormat(format!("(line {}) {}", idx + 1, err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn reports_one_based_line_numbers() {
        let err = parse_lines("1\n2\nx\n4", |line| {
            line.parse::<u8>().map_err(|_| anyhow!("not a number: {line}"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid format: (line 3) not a number: x");
    }

    #[test]
    fn ignores_trailing_newlines() {
        let parsed = parse_lines("1\n2\n\n", |line| Ok(line.parse::<u8>()?)).unwrap();
        assert_eq!(parsed, vec![1, 2]);
    }
}

//! Day 5: Supply Stacks

use anyhow::{Context, bail, ensure};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::parsing::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 5, tags = ["2022", "stacks"])]
pub struct SupplyStacks;

/// Crates from bottom to top
pub type Stack = Vec<char>;

/// One rearrangement step, stack indices 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub amount: usize,
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrateMover {
    /// Moves one crate at a time
    Model9000,
    /// Moves several crates at once, keeping their order
    Model9001,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cargo {
    pub stacks: Vec<Stack>,
    pub steps: Vec<Step>,
}

impl Cargo {
    /// Run every step on a copy of the stacks
    pub fn rearrange(&self, mover: CrateMover) -> Result<Vec<Stack>, SolveError> {
        let mut stacks = self.stacks.clone();
        for (n, step) in self.steps.iter().enumerate() {
            let available = stacks[step.from].len();
            if available < step.amount {
                return Err(SolveError::SolveFailed(
                    format!(
                        "step {}: cannot move {} crates from stack {} holding {}",
                        n + 1,
                        step.amount,
                        step.from + 1,
                        available
                    )
                    .into(),
                ));
            }
            // one crate at a time onto the same stack puts each back where it was
            if step.from == step.to {
                continue;
            }
            let mut moved = stacks[step.from].split_off(available - step.amount);
            if mover == CrateMover::Model9000 {
                moved.reverse();
            }
            stacks[step.to].extend(moved);
        }
        Ok(stacks)
    }
}

/// Top crate of each stack in order, skipping empty stacks
pub fn top_of_stacks(stacks: &[Stack]) -> String {
    stacks.iter().filter_map(|stack| stack.last()).collect()
}

fn parse_step(line: &str, stack_count: usize) -> anyhow::Result<Step> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let ["move", amount, "from", from, "to", to] = tokens[..] else {
        bail!("expected \"move N from A to B\", got {line:?}");
    };
    let amount = amount.parse().with_context(|| format!("bad amount {amount:?}"))?;
    let stack_index = |label: &str| -> anyhow::Result<usize> {
        let n: usize = label
            .parse()
            .with_context(|| format!("bad stack number {label:?}"))?;
        ensure!(
            (1..=stack_count).contains(&n),
            "stack {n} does not exist, there are {stack_count}"
        );
        Ok(n - 1)
    };
    Ok(Step {
        amount,
        from: stack_index(from)?,
        to: stack_index(to)?,
    })
}

impl AocParser for SupplyStacks {
    type SharedData<'a> = Cargo;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input.lines().collect();
        let blank = lines
            .iter()
            .position(|line| line.trim().is_empty())
            .ok_or_else(|| {
                ParseError::MissingData("no blank line between drawing and steps".into())
            })?;

        let (numbers_idx, numbers) = blank
            .checked_sub(1)
            .map(|idx| (idx, lines[idx]))
            .ok_or_else(|| ParseError::MissingData("no crate drawing".into()))?;
        let stack_count = numbers.split_whitespace().count();
        if stack_count == 0 {
            return Err(line_error(numbers_idx, "expected stack numbers"));
        }

        let mut stacks: Vec<Stack> = vec![Vec::new(); stack_count];
        // bottom row first; crate labels sit at columns 1, 5, 9, ...
        for (idx, row) in lines[..numbers_idx].iter().enumerate().rev() {
            let row = row.as_bytes();
            if row.len() > stack_count * 4 {
                return Err(line_error(idx, "crate row wider than the stack numbers"));
            }
            for (i, stack) in stacks.iter_mut().enumerate() {
                match row.get(i * 4 + 1) {
                    Some(b' ') | None => {}
                    Some(&label) if row[i * 4] == b'[' => stack.push(label as char),
                    Some(_) => {
                        return Err(line_error(
                            idx,
                            format!("malformed crate in stack {}", i + 1),
                        ));
                    }
                }
            }
        }

        let steps = lines[blank + 1..]
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(offset, line)| {
                parse_step(line, stack_count).map_err(|e| line_error(blank + 1 + offset, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cargo { stacks, steps })
    }
}

impl PartSolver<1> for SupplyStacks {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_of_stacks(&shared.rearrange(CrateMover::Model9000)?))
    }
}

impl PartSolver<2> for SupplyStacks {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(top_of_stacks(&shared.rearrange(CrateMover::Model9001)?))
    }
}

//! Day 8: Treetop Tree House

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::parsing::line_error;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2022, day = 8, tags = ["2022", "grid"])]
pub struct TreetopTreeHouse;

/// Up, down, left, right as (row, col) steps
const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Tree heights in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGrid {
    heights: Vec<u8>,
    width: usize,
    height: usize,
}

impl TreeGrid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.height && col < self.width {
            Some(self.heights[row * self.width + col])
        } else {
            None
        }
    }

    /// Heights met walking away from (row, col), nearest first
    fn line_of_sight(
        &self,
        row: usize,
        col: usize,
        (dr, dc): (isize, isize),
    ) -> impl Iterator<Item = u8> + '_ {
        (1..).map_while(move |step: isize| {
            let r = row.checked_add_signed(dr * step)?;
            let c = col.checked_add_signed(dc * step)?;
            self.get(r, c)
        })
    }

    fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| (row, col)))
    }

    /// Whether every tree between (row, col) and some edge is shorter
    pub fn is_visible(&self, row: usize, col: usize) -> bool {
        let Some(tree) = self.get(row, col) else {
            return false;
        };
        DIRECTIONS.iter().any(|&direction| {
            self.line_of_sight(row, col, direction)
                .all(|other| other < tree)
        })
    }

    /// Trees seen in one direction, up to and including the first that blocks the view
    pub fn viewing_distance(&self, row: usize, col: usize, direction: (isize, isize)) -> usize {
        let Some(tree) = self.get(row, col) else {
            return 0;
        };
        let mut distance = 0;
        for other in self.line_of_sight(row, col, direction) {
            distance += 1;
            if other >= tree {
                break;
            }
        }
        distance
    }

    pub fn scenic_score(&self, row: usize, col: usize) -> usize {
        DIRECTIONS
            .iter()
            .map(|&direction| self.viewing_distance(row, col, direction))
            .product()
    }

    pub fn visible_count(&self) -> usize {
        self.positions()
            .filter(|&(row, col)| self.is_visible(row, col))
            .count()
    }

    pub fn best_scenic_score(&self) -> usize {
        self.positions()
            .map(|(row, col)| self.scenic_score(row, col))
            .max()
            .unwrap_or(0)
    }
}

impl AocParser for TreetopTreeHouse {
    type SharedData<'a> = TreeGrid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut heights = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (idx, line) in input.trim_end().lines().enumerate() {
            let line = line.trim();
            let expected = *width.get_or_insert(line.len());
            if line.len() != expected {
                return Err(line_error(
                    idx,
                    format!("row has {} trees, expected {}", line.len(), expected),
                ));
            }
            for c in line.chars() {
                let digit = c
                    .to_digit(10)
                    .ok_or_else(|| line_error(idx, format!("invalid tree height {c:?}")))?;
                heights.push(digit as u8);
            }
            height += 1;
        }

        match width {
            Some(width) if width > 0 => Ok(TreeGrid {
                heights,
                width,
                height,
            }),
            _ => Err(ParseError::MissingData("empty tree grid".into())),
        }
    }
}

impl PartSolver<1> for TreetopTreeHouse {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.visible_count().to_string())
    }
}

impl PartSolver<2> for TreetopTreeHouse {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.best_scenic_score().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver;

    const EXAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

    #[test]
    fn part_1_example() {
        let mut grid = TreetopTreeHouse::parse(EXAMPLE).unwrap();
        assert_eq!(TreetopTreeHouse::solve_part(&mut grid, 1).unwrap(), "21");
    }

    #[test]
    fn part_2_example() {
        let mut grid = TreetopTreeHouse::parse(EXAMPLE).unwrap();
        assert_eq!(TreetopTreeHouse::solve_part(&mut grid, 2).unwrap(), "8");
    }

    #[test]
    fn viewing_distances_in_example() {
        let grid = TreetopTreeHouse::parse(EXAMPLE).unwrap();
        // the middle 5 in the second row
        let distances: Vec<usize> = DIRECTIONS
            .iter()
            .map(|&d| grid.viewing_distance(1, 2, d))
            .collect();
        assert_eq!(distances, vec![1, 2, 1, 2]);
        assert_eq!(grid.scenic_score(1, 2), 4);
        assert_eq!(grid.scenic_score(3, 2), 8);
    }

    #[test]
    fn edges_are_visible_interior_may_not_be() {
        let grid = TreetopTreeHouse::parse(EXAMPLE).unwrap();
        assert!(grid.is_visible(0, 0));
        assert!(grid.is_visible(4, 4));
        assert!(grid.is_visible(1, 1));
        assert!(!grid.is_visible(1, 3));
        assert!(!grid.is_visible(2, 2));
    }

    #[test]
    fn single_tree_grid() {
        let grid = TreetopTreeHouse::parse("7").unwrap();
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert_eq!(grid.visible_count(), 1);
        assert_eq!(grid.best_scenic_score(), 0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = TreetopTreeHouse::parse("123\n12\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.contains("line 2")));
    }

    #[test]
    fn non_digits_are_rejected() {
        assert!(TreetopTreeHouse::parse("12a\n").is_err());
        assert!(matches!(
            TreetopTreeHouse::parse(""),
            Err(ParseError::MissingData(_))
        ));
    }
}

//! Solvers derived with AutoRegisterSolver are found by the registry

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 4, tags = ["macro-test", "strings"])]
struct Reverse;

impl AocParser for Reverse {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Reverse {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 3)]
#[aoc(year = 2016, day = 5, tags = ["macro-test"])]
struct Lengths;

impl AocParser for Lengths {
    type SharedData<'a> = Vec<usize>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().map(str::len).collect())
    }
}

impl PartSolver<1> for Lengths {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<usize>().to_string())
    }
}

impl PartSolver<2> for Lengths {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<3> for Lengths {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max()
            .map(usize::to_string)
            .ok_or_else(|| SolveError::SolveFailed("no lines".into()))
    }
}

#[test]
fn plugins_are_collected_with_metadata() {
    let plugins: Vec<_> = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .filter(|p| p.tags.contains(&"macro-test"))
        .map(|p| (p.year, p.day))
        .collect();

    assert_eq!(plugins.len(), 2);
    assert!(plugins.contains(&(2016, 4)));
    assert!(plugins.contains(&(2016, 5)));
}

#[test]
fn tag_filter_selects_subset() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"strings"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 4));
    assert!(!registry.storage().contains(2016, 5));
}

#[test]
fn registered_plugins_report_their_part_count() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert_eq!(registry.storage().get_info(2016, 4).map(|i| i.parts), Some(1));
    assert_eq!(registry.storage().get_info(2016, 5).map(|i| i.parts), Some(3));

    let mut solver = registry.create_solver(2016, 5, "ab\ncde\nf").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "6");
    assert_eq!(solver.solve(2).unwrap().answer, "3");
    assert_eq!(solver.solve(3).unwrap().answer, "3");

    let mut solver = registry.create_solver(2016, 4, "abc\n").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
}

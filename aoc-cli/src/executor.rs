//! Parallel executor for running solvers

use crate::cache::{InputCache, read_input};
use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, CacheError, ExecutorError};
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::{TimeDelta, Utc};
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcExecutorError>,
    pub solve_duration: TimeDelta,
    /// Set on the first part run for a day, which paid for the parse
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    sync_executor_config: SyncExecutorConfig,
    thread_pool: rayon::ThreadPool,
}

struct SyncExecutorConfig {
    registry: SolverRegistry,
    cache: InputCache,
    input_file: Option<PathBuf>,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl SyncExecutorConfig {
    /// Where the input for a year/day is read from
    fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.input_file {
            Some(path) => path.clone(),
            None => self.cache.cache_path(year, day),
        }
    }

    fn has_input(&self, year: u16, day: u8) -> bool {
        match &self.input_file {
            Some(path) => path.is_file(),
            None => self.cache.contains(year, day),
        }
    }

    fn input(&self, year: u16, day: u8) -> Result<String, ExecutorError> {
        let input = match &self.input_file {
            Some(path) => read_input(path),
            None => self.cache.get(year, day).and_then(|input| {
                input.ok_or_else(|| CacheError::Missing(self.cache.cache_path(year, day)))
            }),
        };
        input.map_err(|source| ExecutorError::Input { year, day, source })
    }
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            sync_executor_config: SyncExecutorConfig {
                registry,
                cache: InputCache::new(config.input_dir.clone()),
                input_file: config.input_file.clone(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.sync_executor_config;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on config.part_filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.sync_executor_config.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Work items whose input file is not there, with the path looked at
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<(u16, u8, PathBuf)> {
        let cfg = &self.sync_executor_config;
        work_items
            .iter()
            .filter(|w| !cfg.has_input(w.year, w.day))
            .map(|w| (w.year, w.day, cfg.input_path(w.year, w.day)))
            .collect()
    }

    /// Execute all work items and send results to channel
    ///
    /// Results arrive in completion order; only channel failures are
    /// returned as errors, everything else is reported per part.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        let cfg = &self.sync_executor_config;

        match cfg.parallelize_by {
            ParallelizeBy::Sequential => work_items
                .iter()
                .filter_map(|work| run_work_item(work, &tx, cfg).err())
                .reduce(ArcExecutorError::combine)
                .map_or(Ok(()), Err),
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();
                self.thread_pool.install(|| {
                    by_year
                        .into_par_iter()
                        .filter_map(|items| {
                            items
                                .iter()
                                .filter_map(|work| run_work_item(work, &tx, cfg).err())
                                .reduce(ArcExecutorError::combine)
                        })
                        .reduce_with(ArcExecutorError::combine)
                        .map_or(Ok(()), Err)
                })
            }
            ParallelizeBy::Day => self.thread_pool.install(|| {
                work_items
                    .par_iter()
                    .filter_map(|work| run_work_item(work, &tx, cfg).err())
                    .reduce_with(ArcExecutorError::combine)
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Read, parse and solve one year/day, sending a result per part
fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    cfg: &SyncExecutorConfig,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let input = match cfg.input(year, day) {
        Ok(input) => input,
        Err(e) => return send_failure(work, e.into(), tx),
    };
    let mut solver = match cfg.registry.create_solver(year, day, &input) {
        Ok(solver) => solver,
        Err(e) => return send_failure(work, ExecutorError::from(e).into(), tx),
    };

    let mut parse_duration = Some(solver.parse_duration());
    for part in work.parts.clone() {
        let mut result = solve_part(year, day, part, &mut *solver);
        result.parse_duration = parse_duration.take();
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Report the same failure for every requested part
fn send_failure(
    work: &WorkItem,
    error: ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        let result = SolverResult {
            year: work.year,
            day: work.day,
            part,
            answer: Err(error.clone()),
            solve_duration: TimeDelta::zero(),
            parse_duration: None,
        };
        tx.send(result)
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let start = Utc::now();
    let (answer, solve_duration) = match solver.solve(part) {
        Ok(solved) => {
            let duration = solved.duration();
            (Ok(solved.answer), duration)
        }
        Err(e) => (
            Err(ExecutorError::from(SolverError::from(e)).into()),
            Utc::now() - start,
        ),
    };

    SolverResult {
        year,
        day,
        part,
        answer,
        solve_duration,
        parse_duration: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::SolverRegistryBuilder;
    use std::fs;
    use tempfile::TempDir;

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver_plugins(|plugin| plugin.year == 2022)
            .unwrap()
            .build()
    }

    fn config(input_dir: &TempDir, parallelize_by: ParallelizeBy) -> Config {
        Config {
            year_filter: Some(2022),
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir: input_dir.path().to_path_buf(),
            input_file: None,
            thread_count: 2,
            parallelize_by,
            quiet: true,
        }
    }

    fn run(executor: &Executor) -> Vec<SolverResult> {
        let (tx, rx) = std::sync::mpsc::channel();
        executor.execute(tx).unwrap();
        let mut results: Vec<_> = rx.into_iter().collect();
        results.sort_by_key(|r| (r.year, r.day, r.part));
        results
    }

    fn answers(results: &[SolverResult]) -> Vec<(u8, u8, Option<String>)> {
        results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_ref().ok().cloned()))
            .collect()
    }

    fn input_dir() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day02.txt"), "A Y\nB X\nC Z\n").unwrap();
        fs::write(
            temp.path().join("2022_day06.txt"),
            "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n",
        )
        .unwrap();
        temp
    }

    #[test]
    fn work_items_follow_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(&temp, ParallelizeBy::Day);
        let executor = Executor::new(registry(), &cfg).unwrap();
        let items = executor.collect_work_items();
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|w| w.parts == (1..=2)));

        cfg.day_filter = Some(4);
        cfg.part_filter = Some(2);
        let executor = Executor::new(registry(), &cfg).unwrap();
        assert_eq!(
            executor.collect_work_items(),
            vec![WorkItem {
                year: 2022,
                day: 4,
                parts: 2..=2
            }]
        );

        cfg.year_filter = Some(2015);
        let executor = Executor::new(registry(), &cfg).unwrap();
        assert!(executor.collect_work_items().is_empty());
    }

    #[test]
    fn missing_inputs_are_listed_and_reported_per_part() {
        let temp = input_dir();
        let executor = Executor::new(registry(), &config(&temp, ParallelizeBy::Day)).unwrap();

        let items = executor.collect_work_items();
        let missing: Vec<u8> = executor
            .missing_inputs(&items)
            .into_iter()
            .map(|(_, day, _)| day)
            .collect();
        assert_eq!(missing, vec![1, 3, 4, 5, 7, 8]);

        let results = run(&executor);
        assert_eq!(results.len(), 16);
        for result in results.iter().filter(|r| missing.contains(&r.day)) {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(err.inner(), ExecutorError::Input { .. }), "{err}");
        }
    }

    #[test]
    fn every_mode_gives_the_same_answers() {
        let temp = input_dir();
        let expected = vec![
            (2, 1, Some("15".to_string())),
            (2, 2, Some("12".to_string())),
            (6, 1, Some("7".to_string())),
            (6, 2, Some("19".to_string())),
        ];
        for mode in [
            ParallelizeBy::Sequential,
            ParallelizeBy::Year,
            ParallelizeBy::Day,
        ] {
            let executor = Executor::new(registry(), &config(&temp, mode)).unwrap();
            let results = run(&executor);
            let solved: Vec<_> = answers(&results)
                .into_iter()
                .filter(|(_, _, answer)| answer.is_some())
                .collect();
            assert_eq!(solved, expected, "{mode:?}");
        }
    }

    #[test]
    fn parse_time_is_reported_on_first_part_only() {
        let temp = input_dir();
        let mut cfg = config(&temp, ParallelizeBy::Day);
        cfg.day_filter = Some(6);
        let executor = Executor::new(registry(), &cfg).unwrap();
        let results = run(&executor);
        assert_eq!(results.len(), 2);
        assert!(results[0].parse_duration.is_some());
        assert!(results[1].parse_duration.is_none());
    }

    #[test]
    fn explicit_input_file_replaces_the_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("custom.txt");
        fs::write(&file, "30373\n25512\n65332\n33549\n35390\n").unwrap();

        let mut cfg = config(&temp, ParallelizeBy::Sequential);
        cfg.day_filter = Some(8);
        cfg.input_file = Some(file);
        let executor = Executor::new(registry(), &cfg).unwrap();
        assert!(executor.missing_inputs(&executor.collect_work_items()).is_empty());
        assert_eq!(
            answers(&run(&executor)),
            vec![(8, 1, Some("21".to_string())), (8, 2, Some("8".to_string()))]
        );
    }

    #[test]
    fn malformed_input_fails_every_part() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2022_day04.txt"), "1-2,3\n").unwrap();
        let mut cfg = config(&temp, ParallelizeBy::Day);
        cfg.day_filter = Some(4);
        let executor = Executor::new(registry(), &cfg).unwrap();

        let results = run(&executor);
        assert_eq!(results.len(), 2);
        for result in &results {
            let err = result.answer.as_ref().unwrap_err();
            assert!(matches!(
                err.inner(),
                ExecutorError::Solver(SolverError::ParseError(_))
            ));
        }
    }
}

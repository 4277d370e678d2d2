//! AOC CLI - Command-line interface for running Advent of Code solvers

mod aggregator;
mod cache;
mod cli;
mod config;
mod error;
mod executor;
mod output;

// Linking the solutions crate submits its solver plugins
use aoc_2022 as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use executor::Executor;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args);
    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config).map_err(|e| CliError::Config(e.to_string()))?;

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        println!("No solvers found matching the specified filters.");
        return Ok(());
    }

    // Missing inputs still run, and fail part by part
    let missing_inputs = executor.missing_inputs(&work_items);
    if !missing_inputs.is_empty() {
        eprintln!("Warning: missing {} input file(s):", missing_inputs.len());
        for (year, day, path) in &missing_inputs {
            eprintln!("  - {}/day{:02} ({})", year, day, path.display());
        }
    }

    run_executor(executor, &work_items, config.quiet)
}

/// Run the executor in the background and print results in order
fn run_executor(
    executor: Executor,
    work_items: &[executor::WorkItem],
    quiet: bool,
) -> Result<(), CliError> {
    if !quiet {
        println!("Running {} solver(s)...", work_items.len());
    }

    let expected_keys: Vec<aggregator::ResultKey> = work_items
        .iter()
        .flat_map(|w| {
            w.parts.clone().map(move |part| aggregator::ResultKey {
                year: w.year,
                day: w.day,
                part,
            })
        })
        .collect();

    let (tx, rx) = std::sync::mpsc::channel();
    let executor_handle = std::thread::spawn(move || executor.execute(tx));

    let formatter = OutputFormatter::new(quiet);
    let mut aggregator = aggregator::ResultAggregator::new(expected_keys);
    let mut results = Vec::new();

    for result in rx {
        for ready in aggregator.add(result) {
            formatter.print_result(&ready);
            results.push(ready);
        }
    }

    // Only reachable if a worker stopped early
    for ready in aggregator.drain() {
        formatter.print_result(&ready);
        results.push(ready);
    }
    if !aggregator.is_complete() {
        eprintln!("Warning: Not all expected results were received");
    }

    executor_handle
        .join()
        .map_err(|_| CliError::Config("Executor thread panicked".to_string()))??;

    formatter.print_summary(&results);
    Ok(())
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, CliError> {
    let builder = SolverRegistryBuilder::new();

    let builder = if tags.is_empty() {
        builder.register_all_plugins()?
    } else {
        builder.register_solver_plugins(|plugin| {
            tags.iter().all(|tag| plugin.tags.contains(&tag.as_str()))
        })?
    };

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_must_all_match() {
        let registry = build_registry(&["2022".to_string(), "grid".to_string()]).unwrap();
        let days: Vec<u8> = registry.storage().iter_info().map(|i| i.day).collect();
        assert_eq!(days, vec![8]);

        let registry = build_registry(&["grid".to_string(), "nope".to_string()]).unwrap();
        assert!(registry.storage().is_empty());
    }

    #[test]
    fn no_tags_registers_every_day() {
        let registry = build_registry(&[]).unwrap();
        assert!((1..=8).all(|day| registry.storage().contains(2022, day)));
    }
}

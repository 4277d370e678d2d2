//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print the answer with its parse and solve timings
    fn print_full(&self, result: &SolverResult) {
        let prefix = format!("{}/{:02} Part {}", result.year, result.day, result.part);

        match &result.answer {
            Ok(answer) => println!("{}: {} ({})", prefix, answer, format_timing(result)),
            Err(e) => eprintln!("{}: Error - {}", prefix, e),
        }
    }

    /// Print solved/failed counts and how the time was spent
    ///
    /// Compute time only counts parts that produced an answer; the
    /// speedup compares it against wall-clock time since the formatter was
    /// created.
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let solved: Vec<&SolverResult> = results.iter().filter(|r| r.answer.is_ok()).collect();
        let failed = results.len() - solved.len();
        let parse_time: TimeDelta = solved.iter().filter_map(|r| r.parse_duration).sum();
        let solve_time: TimeDelta = solved.iter().map(|r| r.solve_duration).sum();
        let elapsed = TimeDelta::from_std(self.start_time.elapsed()).unwrap_or(TimeDelta::MAX);

        println!();
        println!("--- Summary ---");
        println!("Solvers: {} solved, {} failed", solved.len(), failed);
        println!("Total parse time: {}", format_duration(parse_time));
        println!("Total solve time: {}", format_duration(solve_time));
        println!("Elapsed wall-clock time: {}", format_duration(elapsed));
        if let Some(speedup) = speedup(parse_time + solve_time, elapsed) {
            println!("Speedup factor: {:.2}x", speedup);
        }
    }
}

fn format_timing(result: &SolverResult) -> String {
    let solve = format!("solve: {}", format_duration(result.solve_duration));
    match result.parse_duration {
        Some(parse) => format!("parse: {}, {}", format_duration(parse), solve),
        None => solve,
    }
}

/// Compute time over wall-clock time, `None` when no time has passed
fn speedup(compute: TimeDelta, elapsed: TimeDelta) -> Option<f64> {
    let elapsed = elapsed.num_microseconds().filter(|&us| us > 0)?;
    let compute = compute.num_microseconds()?;
    Some(compute as f64 / elapsed as f64)
}

/// `µs` below a millisecond, `ms` below a second, `s` above
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };
    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }
    match micros {
        0..1_000 => format!("{}µs", micros),
        1_000..1_000_000 => format!("{:.2}ms", micros as f64 / 1e3),
        _ => format!("{:.2}s", micros as f64 / 1e6),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_pick_a_readable_unit() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
        assert_eq!(format_duration(TimeDelta::MAX), "N/A");
    }

    #[test]
    fn speedup_needs_elapsed_time() {
        assert_eq!(speedup(TimeDelta::milliseconds(30), TimeDelta::zero()), None);
        let factor = speedup(TimeDelta::milliseconds(30), TimeDelta::milliseconds(10)).unwrap();
        assert!((factor - 3.0).abs() < 1e-9);
    }

    #[test]
    fn parse_time_only_shown_when_present() {
        let mut result = SolverResult {
            year: 2022,
            day: 1,
            part: 1,
            answer: Ok("24000".to_string()),
            solve_duration: TimeDelta::microseconds(3),
            parse_duration: Some(TimeDelta::microseconds(7)),
        };
        assert_eq!(format_timing(&result), "parse: 7µs, solve: 3µs");

        result.parse_duration = None;
        assert_eq!(format_timing(&result), "solve: 3µs");
    }
}

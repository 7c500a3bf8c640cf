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

    /// Informational line, suppressed in quiet mode
    pub fn print_info(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Non-fatal problem, always shown on stderr
    pub fn print_warning(&self, message: &str) {
        eprintln!("Warning: {}", message);
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

    /// Print full output with timing
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}: {} ({})", prefix(result), answer, timing(result)),
            Err(e) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Print a summary after all results
    /// Shows both total solve time (sum of durations) and actual elapsed wall-clock time
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let timeouts = results.iter().filter(|r| r.timed_out()).count();
        let failures = total - successes - timeouts;

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Solvers: {} solved, {} failed, {} over budget",
            successes, failures, timeouts
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `parse: …, solve: …`, with the parse time only on the part that parsed
fn timing(result: &SolverResult) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    format!("{}solve: {}", parse_timing, format_duration(result.solve_duration))
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-20)), "-20µs");
    }

    #[test]
    fn test_format_std_duration_units() {
        assert_eq!(format_std_duration(Duration::from_micros(7)), "7µs");
        assert_eq!(format_std_duration(Duration::from_micros(12_340)), "12.34ms");
        assert_eq!(format_std_duration(Duration::from_millis(3_000)), "3.00s");
    }

    #[test]
    fn test_result_line() {
        let result = SolverResult {
            year: 2024,
            day: 16,
            part: 1,
            answer: Ok("7036".to_string()),
            parse_duration: Some(TimeDelta::microseconds(40)),
            solve_duration: TimeDelta::microseconds(2_500),
        };
        assert_eq!(prefix(&result), "2024/16 Part 1");
        assert_eq!(timing(&result), "parse: 40µs, solve: 2.50ms");

        let second = SolverResult {
            part: 2,
            parse_duration: None,
            ..result
        };
        assert_eq!(timing(&second), "solve: 2.50ms");
    }
}

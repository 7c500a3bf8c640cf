//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code solver runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers against local inputs", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` inputs [env: AOC_INPUT_DIR, default: inputs]
    #[arg(long)]
    pub input_dir: Option<PathBuf>,

    /// Withhold answers of parts that take longer than this many milliseconds
    #[arg(long)]
    pub time_budget_ms: Option<u64>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_command_line() {
        let args = Args::try_parse_from([
            "aoc",
            "--year",
            "2024",
            "-d",
            "18",
            "-p",
            "2",
            "--tags",
            "grid,bfs",
            "--input-dir",
            "/tmp/aoc",
            "--time-budget-ms",
            "250",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.year, Some(2024));
        assert_eq!(args.day, Some(18));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "bfs"]);
        assert_eq!(args.input_dir, Some(PathBuf::from("/tmp/aoc")));
        assert_eq!(args.time_budget_ms, Some(250));
        assert!(args.quiet);
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["aoc"]).unwrap();
        assert!(args.year.is_none() && args.day.is_none() && args.part.is_none());
        assert!(args.tags.is_empty());
        assert!(args.input_dir.is_none());
        assert!(args.time_budget_ms.is_none());
        assert!(!args.quiet);
    }

    #[test]
    fn test_rejects_out_of_range_day_and_part() {
        assert!(Args::try_parse_from(["aoc", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["aoc", "--part", "3"]).is_err());
    }
}

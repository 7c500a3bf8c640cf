//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use chrono::TimeDelta;
use std::path::{Path, PathBuf};

/// Environment variable consulted when `--input-dir` is absent
pub const INPUT_DIR_ENV: &str = "AOC_INPUT_DIR";

/// Input directory used when neither the flag nor the environment names one
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Directory the puzzle inputs are read from
    pub input_dir: PathBuf,
    /// Longest a single part may take before its answer is withheld
    pub time_budget: Option<TimeDelta>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, consulting the environment for the input directory
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let env_dir = std::env::var_os(INPUT_DIR_ENV).map(PathBuf::from);
        let input_dir = resolve_input_dir(args.input_dir, env_dir);

        let time_budget = args
            .time_budget_ms
            .map(|ms| {
                i64::try_from(ms)
                    .ok()
                    .and_then(TimeDelta::try_milliseconds)
                    .ok_or_else(|| CliError::Config(format!("time budget of {ms} ms is too large")))
            })
            .transpose()?;

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir,
            time_budget,
            quiet: args.quiet,
        })
    }
}

/// Pick the input directory: flag, then environment, then the default
fn resolve_input_dir(flag: Option<PathBuf>, env: Option<PathBuf>) -> PathBuf {
    let dir = flag
        .or(env)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR));
    expand_tilde(&dir)
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flag_wins_over_env() {
        let dir = resolve_input_dir(Some("flag".into()), Some("env".into()));
        assert_eq!(dir, PathBuf::from("flag"));
    }

    #[test]
    fn test_env_used_without_flag() {
        let dir = resolve_input_dir(None, Some("env".into()));
        assert_eq!(dir, PathBuf::from("env"));
    }

    #[test]
    fn test_default_input_dir() {
        assert_eq!(resolve_input_dir(None, None), PathBuf::from(DEFAULT_INPUT_DIR));
    }

    #[test]
    fn test_tilde_expansion() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/aoc")), home.join("aoc"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/abs/~")), PathBuf::from("/abs/~"));
    }

    #[test]
    fn test_time_budget_conversion() {
        let args = Args::try_parse_from(["aoc", "--input-dir", "x", "--time-budget-ms", "1500"])
            .unwrap();
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.time_budget, Some(TimeDelta::milliseconds(1500)));
        assert_eq!(config.input_dir, PathBuf::from("x"));
    }

    #[test]
    fn test_time_budget_overflow_is_config_error() {
        let args = Args::try_parse_from(["aoc", "--time-budget-ms", &u64::MAX.to_string()]).unwrap();
        assert!(matches!(Config::from_args(args), Err(CliError::Config(_))));
    }
}

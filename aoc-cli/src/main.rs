//! AOC CLI - Command-line interface for running Advent of Code solvers

mod cli;
mod config;
mod error;
mod executor;
mod input;
mod output;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_solver::SolverRegistryBuilder;
use clap::Parser;
use cli::Args;
use config::Config;
use executor::{Executor, WorkItem};
use input::InputStore;
use output::OutputFormatter;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let config = Config::from_args(args)?;
    let formatter = OutputFormatter::new(config.quiet);

    let registry = build_registry(&config.tags)?;
    let executor = Executor::new(registry, &config);

    let work_items = executor.collect_work_items();
    if work_items.is_empty() {
        formatter.print_info("No solvers found matching the specified filters.");
        return Ok(());
    }

    let missing_inputs = check_missing_inputs(&work_items, executor.inputs());
    if !missing_inputs.is_empty() {
        formatter.print_warning(&format!(
            "missing {} input file(s) in {}:",
            missing_inputs.len(),
            executor.inputs().input_dir().display()
        ));
        for (year, day) in &missing_inputs {
            eprintln!("  - {}_day{:02}.txt", year, day);
        }
    }

    formatter.print_info(&format!("Running {} solver(s)...", work_items.len()));

    let mut results = Vec::new();
    let outcome = executor.execute(|result| {
        formatter.print_result(&result);
        results.push(result);
    });

    formatter.print_summary(&results);

    outcome.map_err(error::CliError::Executor)
}

/// Check which inputs are missing from the input directory
fn check_missing_inputs(work_items: &[WorkItem], inputs: &InputStore) -> Vec<(u16, u8)> {
    work_items
        .iter()
        .filter(|w| !inputs.contains(w.year, w.day))
        .map(|w| (w.year, w.day))
        .collect()
}

/// Build registry with tag filtering
fn build_registry(tags: &[String]) -> Result<aoc_solver::SolverRegistry, error::CliError> {
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

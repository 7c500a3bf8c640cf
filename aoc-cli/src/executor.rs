//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::input::InputStore;
use aoc_solver::{DynSolver, SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Set on the first part run for a puzzle, where the parse happened
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: SolverError) -> Self {
        Self {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }

    /// Whether the part ran but was over its time budget
    pub fn timed_out(&self) -> bool {
        matches!(
            self.answer,
            Err(SolverError::SolveError(aoc_solver::SolveError::Timeout { .. }))
        )
    }
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one after another
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    time_budget: Option<TimeDelta>,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone()),
            time_budget: config.time_budget,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0,
            None => 1..=max_parts,
        }
    }

    /// Execute all work items in year/day order, handing each result to `emit`
    ///
    /// A puzzle whose input is missing or fails to parse still yields one
    /// failed result per selected part. Those failures are also collected into
    /// the returned error so the caller can exit non-zero.
    pub fn execute(&self, mut emit: impl FnMut(SolverResult)) -> Result<(), ArcExecutorError> {
        let mut collected_error: Option<ArcExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_solver(&work, &mut emit) {
                collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Parse once, then solve each selected part against the same solver
    fn run_solver(
        &self,
        work: &WorkItem,
        emit: &mut impl FnMut(SolverResult),
    ) -> Result<(), ArcExecutorError> {
        let (year, day) = (work.year, work.day);

        let input = match self.inputs.get(year, day) {
            Ok(input) => input,
            Err(source) => {
                let message = source.to_string();
                for part in work.parts.clone() {
                    let error = aoc_solver::ParseError::MissingData(message.clone());
                    emit(SolverResult::failed(year, day, part, error.into()));
                }
                return Err(ExecutorError::Input { year, day, source }.into());
            }
        };

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(source) => {
                for part in work.parts.clone() {
                    emit(SolverResult::failed(year, day, part, clone_setup_error(&source)));
                }
                return Err(ExecutorError::Setup { year, day, source }.into());
            }
        };

        let mut parse_duration = Some(solver.parse_duration());
        for part in work.parts.clone() {
            let mut result = solve_part(year, day, part, &mut *solver, self.time_budget);
            result.parse_duration = parse_duration.take();
            emit(result);
        }
        Ok(())
    }
}

/// Copy of a setup failure for the per-part results; the original goes into the error chain
fn clone_setup_error(error: &SolverError) -> SolverError {
    match error {
        SolverError::NotFound(year, day) => SolverError::NotFound(*year, *day),
        SolverError::InvalidYearDay(year, day) => SolverError::InvalidYearDay(*year, *day),
        SolverError::ParseError(e) => SolverError::ParseError(e.clone()),
        SolverError::SolveError(e) => {
            SolverError::ParseError(aoc_solver::ParseError::Other(e.to_string()))
        }
    }
}

/// Solve a single part, applying the time budget
fn solve_part(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    budget: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve_within(part, budget) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration: None,
        },
        Err(e) => {
            let solve_duration = match &e {
                aoc_solver::SolveError::Timeout { elapsed_ms, .. } => {
                    TimeDelta::milliseconds(*elapsed_ms)
                }
                _ => TimeDelta::zero(),
            };
            SolverResult {
                solve_duration,
                ..SolverResult::failed(year, day, part, e.into())
            }
        }
    }
}

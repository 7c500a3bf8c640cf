//! Advent of Code Solver Library
//!
//! Framework the puzzle solutions plug into: parse the input once, solve each
//! part against the shared parsed data, and time both steps.
//!
//! # Overview
//!
//! - [`AocParser`] turns input text into shared data (owned or borrowed)
//! - [`PartSolver<N>`](PartSolver) solves a single part
//! - [`Solver`] dispatches a runtime part number, usually generated by
//!   `#[derive(AocSolver)]`
//! - [`DynSolver`] erases the solver type and records timing, with an
//!   optional time budget per part
//! - [`SolverRegistry`] maps year/day to solver factories, filled manually or
//!   from plugins submitted by `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{AocParser, AocSolver, DynSolver, ParseError, PartSolver, SolveError, SolverRegistryBuilder, register_solver};
//!
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! pub struct Reports;
//!
//! impl AocParser for Reports {
//!     type SharedData<'a> = Vec<Vec<i32>>;
//!
//!     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.split_whitespace()
//!                     .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(n.to_string())))
//!                     .collect()
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Reports {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.len().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Reports {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().flatten().sum::<i32>().to_string())
//!     }
//! }
//!
//! let mut builder = SolverRegistryBuilder::new();
//! register_solver!(builder, Reports, 2024, 2);
//! let registry = builder.build();
//!
//! let mut solver = registry.create_solver(2024, 2, "1 2 3\n4 5").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "2");
//! assert_eq!(solver.solve(2).unwrap().answer, "15");
//! ```
//!
//! # Plugins
//!
//! Solutions register themselves so the CLI never lists them by hand:
//!
//! ```ignore
//! #[derive(AocSolver, AutoRegisterSolver)]
//! #[aoc_solver(max_parts = 2)]
//! #[aoc(year = 2024, day = 18, tags = ["grid", "bfs"])]
//! pub struct Day18;
//! ```
//!
//! [`SolverRegistryBuilder::register_solver_plugins`] then picks them up,
//! optionally filtered by year, day or tag.

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, SolverFactory, SolverFactoryStorage, SolverPlugin,
    SolverRegistry, SolverRegistryBuilder,
};
pub use solver::{AocParser, PartSolver, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

pub use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day is a thin adapter: it parses the puzzle text into the types of
//! `aoc-search` and hands the actual searching to that crate. Solutions use
//! the `AutoRegisterSolver` derive macro, so linking this crate is enough for
//! the CLI to find them.

pub mod helpers;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;

//! Search Toolkit
//!
//! Grid, graph and state-space search routines shared by the Advent of Code
//! solvers. Everything here works on already-parsed values and never reads
//! files.
//!
//! # Overview
//!
//! - [`Grid`] with bounds-checked 4- and 8-neighbour queries
//! - Breadth-first search: [`shortest_path`], [`distance_map`] and
//!   [`multi_source_distance_map`]
//! - Weighted search: generic [`astar`] / [`dijkstra`] and the
//!   turn-penalised [`min_turn_cost`]
//! - [`Graph::max_clique`] (Bron–Kerbosch with pivoting) and
//!   [`Graph::triangles`]
//! - [`count_segmentations`] for splitting a string into vocabulary entries
//! - The three-register [`Machine`]
//! - [`quick_sort`], [`gcd`] and [`depth_first_search`]
//!
//! A search that finds nothing returns `None`. Only malformed input is an
//! error, see [`SearchError`].
//!
//! # Quick Example
//!
//! ```
//! use aoc_search::{min_turn_cost, Direction, Grid, TurnCosts};
//!
//! let grid = Grid::from_rows(["#####", "#S..#", "###E#", "#####"].iter().map(|l| l.chars()))?;
//! let start = grid.position(|c| *c == 'S').unwrap();
//! let end = grid.position(|c| *c == 'E').unwrap();
//!
//! let cost = min_turn_cost(&grid, start, Direction::East, end, |c| *c != '#', TurnCosts::default())?;
//! assert_eq!(cost, Some(1003));
//! # Ok::<(), aoc_search::SearchError>(())
//! ```

mod bfs;
mod clique;
mod error;
mod grid;
mod machine;
mod segment;
mod utils;
mod weighted;

pub use bfs::{DistanceMap, distance_map, multi_source_distance_map, shortest_path};
pub use clique::Graph;
pub use error::SearchError;
pub use grid::{Direction, Direction8, Grid, Pos};
pub use machine::{Machine, Opcode, Registers, run};
pub use segment::{Vocabulary, can_segment, count_segmentations};
pub use utils::{depth_first_search, gcd, quick_sort};
pub use weighted::{TurnCosts, astar, dijkstra, min_turn_cost};

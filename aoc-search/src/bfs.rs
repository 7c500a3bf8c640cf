//! Unweighted breadth-first search over grid cells
//!
//! All moves are orthogonal unit steps. Cells are marked visited when they are
//! enqueued, so every cell enters the queue at most once and the first time a
//! cell is popped its step count is minimal.

use crate::error::SearchError;
use crate::grid::{Grid, Pos};
use std::collections::VecDeque;

/// Distances from one or more sources to every reachable cell
///
/// Unreached cells hold `None`; there is no sentinel distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap {
    distances: Grid<Option<usize>>,
    reached: usize,
}

impl DistanceMap {
    /// Distance to `pos`, `None` if unreachable or off the grid
    pub fn get(&self, pos: Pos) -> Option<usize> {
        self.distances.get(pos).copied().flatten()
    }

    /// Every reachable cell with its distance, row-major
    pub fn reachable(&self) -> impl Iterator<Item = (Pos, usize)> + '_ {
        self.distances
            .iter()
            .filter_map(|(pos, dist)| dist.map(|d| (pos, d)))
    }

    /// Number of reachable cells, sources included
    pub fn len(&self) -> usize {
        self.reached
    }

    pub fn is_empty(&self) -> bool {
        self.reached == 0
    }
}

/// Minimum number of orthogonal moves from `start` to `end`
///
/// Only cells for which `passable` holds may be entered.
///
/// # Returns
/// * `Ok(Some(steps))` - Shortest path length (`0` when `start == end`)
/// * `Ok(None)` - `end` cannot be reached
/// * `Err(SearchError::InvalidInput)` - An endpoint is off the grid or blocked
///
/// # Example
///
/// ```
/// use aoc_search::{shortest_path, Grid, Pos};
///
/// let grid = Grid::from_rows(["...", ".#.", "..."].iter().map(|l| l.chars())).unwrap();
/// let steps = shortest_path(&grid, Pos::new(0, 0), Pos::new(2, 2), |c| *c != '#').unwrap();
/// assert_eq!(steps, Some(4));
/// ```
pub fn shortest_path<T, F>(
    grid: &Grid<T>,
    start: Pos,
    end: Pos,
    passable: F,
) -> Result<Option<usize>, SearchError>
where
    F: Fn(&T) -> bool,
{
    grid.require_passable(start, &passable, "start")?;
    grid.require_passable(end, &passable, "end")?;

    if start == end {
        return Ok(Some(0));
    }

    let mut visited = Grid::filled(grid.rows(), grid.cols(), false);
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back((start, 0));

    while let Some((pos, steps)) = queue.pop_front() {
        if pos == end {
            return Ok(Some(steps));
        }
        for next in grid.neighbors4(pos) {
            if !visited[next] && passable(&grid[next]) {
                visited[next] = true;
                queue.push_back((next, steps + 1));
            }
        }
    }

    Ok(None)
}

/// Distances from `source` to every reachable cell
///
/// Use this instead of repeated [`shortest_path`] calls when many queries share
/// the same source.
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if `source` is off the grid or blocked.
pub fn distance_map<T, F>(grid: &Grid<T>, source: Pos, passable: F) -> Result<DistanceMap, SearchError>
where
    F: Fn(&T) -> bool,
{
    multi_source_distance_map(grid, [source], passable)
}

/// Distances to the nearest of several sources, all of which start at zero
///
/// # Errors
///
/// Returns `SearchError::InvalidInput` if any source is off the grid or blocked.
pub fn multi_source_distance_map<T, F, I>(
    grid: &Grid<T>,
    sources: I,
    passable: F,
) -> Result<DistanceMap, SearchError>
where
    F: Fn(&T) -> bool,
    I: IntoIterator<Item = Pos>,
{
    let mut distances: Grid<Option<usize>> = Grid::filled(grid.rows(), grid.cols(), None);
    let mut queue = VecDeque::new();
    let mut reached = 0;

    for source in sources {
        grid.require_passable(source, &passable, "source")?;
        if distances[source].is_none() {
            distances[source] = Some(0);
            reached += 1;
            queue.push_back(source);
        }
    }

    while let Some(pos) = queue.pop_front() {
        let Some(dist) = distances[pos] else {
            continue;
        };
        for next in grid.neighbors4(pos) {
            if distances[next].is_none() && passable(&grid[next]) {
                distances[next] = Some(dist + 1);
                reached += 1;
                queue.push_back(next);
            }
        }
    }

    Ok(DistanceMap { distances, reached })
}

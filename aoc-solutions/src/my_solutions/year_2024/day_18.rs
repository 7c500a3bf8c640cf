use aoc_search::{Grid, Pos, SearchError, shortest_path};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::{no_solution, parse_lines, parse_pair, solve_failed};

/// Side length of the memory space
pub const SIZE: usize = 71;

/// Bytes that have fallen before part 1 looks for a path
pub const FALLEN: usize = 1024;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["grid", "bfs", "binary-search"])]
pub struct Solver;

/// Falling byte positions, in the order they land
#[derive(Debug)]
pub struct SharedData {
    bytes: Vec<Pos>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        // Lines are `X,Y` with X counting columns
        let bytes = parse_lines(input, |line| {
            let (x, y) = parse_pair::<usize>(line, ",")?;
            Ok(Pos::new(y, x))
        })?;
        Ok(SharedData { bytes })
    }
}

/// Memory space of side `size` with the first `count` bytes marked corrupted
fn corrupted(bytes: &[Pos], size: usize, count: usize) -> Result<Grid<bool>, SearchError> {
    let mut grid = Grid::filled(size, size, false);
    for &pos in bytes.iter().take(count) {
        *grid.get_mut(pos).ok_or_else(|| {
            SearchError::InvalidInput(format!("byte {},{} falls outside the space", pos.col, pos.row))
        })? = true;
    }
    Ok(grid)
}

/// Fewest steps from the top-left to the bottom-right corner after `count` bytes
///
/// `Ok(None)` when the exit is cut off, including when a corner itself is corrupted.
pub fn min_steps(bytes: &[Pos], size: usize, count: usize) -> Result<Option<usize>, SearchError> {
    let grid = corrupted(bytes, size, count)?;
    if size == 0 {
        return Ok(None);
    }
    let (start, exit) = (Pos::new(0, 0), Pos::new(size - 1, size - 1));
    if grid[start] || grid[exit] {
        return Ok(None);
    }
    shortest_path(&grid, start, exit, |&blocked| !blocked)
}

/// The first byte after which the exit can no longer be reached
///
/// Reachability only gets worse as bytes land, so the answer is found by
/// bisecting on the number of fallen bytes.
pub fn first_blocking_byte(bytes: &[Pos], size: usize) -> Result<Option<Pos>, SearchError> {
    if min_steps(bytes, size, bytes.len())?.is_some() {
        return Ok(None);
    }
    // Invariant: open after `lo` bytes, closed after `hi` bytes
    let (mut lo, mut hi) = (0, bytes.len());
    if min_steps(bytes, size, 0)?.is_none() {
        return Ok(None);
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if min_steps(bytes, size, mid)?.is_some() {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Ok(Some(bytes[hi - 1]))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let steps = min_steps(&shared.bytes, SIZE, FALLEN)
            .map_err(solve_failed)?
            .ok_or_else(|| no_solution("the exit is cut off"))?;
        Ok(steps.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let byte = first_blocking_byte(&shared.bytes, SIZE)
            .map_err(solve_failed)?
            .ok_or_else(|| no_solution("the exit is never cut off"))?;
        Ok(format!("{},{}", byte.col, byte.row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn test_sample_steps() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(min_steps(&shared.bytes, 7, 12).unwrap(), Some(22));
    }

    #[test]
    fn test_sample_first_blocking_byte() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(
            first_blocking_byte(&shared.bytes, 7).unwrap(),
            Some(Pos::new(1, 6))
        );
    }

    #[test]
    fn test_no_bytes_is_open_diagonal() {
        assert_eq!(min_steps(&[], 5, 0).unwrap(), Some(8));
        assert_eq!(first_blocking_byte(&[], 5).unwrap(), None);
    }

    #[test]
    fn test_byte_outside_space_is_invalid() {
        let bytes = [Pos::new(9, 0)];
        assert!(matches!(
            min_steps(&bytes, 7, 1),
            Err(SearchError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_corner_byte_blocks_immediately() {
        let bytes = [Pos::new(1, 1), Pos::new(0, 0)];
        assert_eq!(min_steps(&bytes, 3, 1).unwrap(), Some(4));
        assert_eq!(min_steps(&bytes, 3, 2).unwrap(), None);
        assert_eq!(first_blocking_byte(&bytes, 3).unwrap(), Some(Pos::new(0, 0)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(Solver::parse("1,2\n3;4"), Err(ParseError::InvalidFormat(_))));
    }
}

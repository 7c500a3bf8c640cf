use aoc_search::{Grid, Pos, depth_first_search};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::char_grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "dfs"])]
pub struct Solver;

/// Height map; impassable cells (`.`) are `None`
#[derive(Debug)]
pub struct SharedData {
    heights: Grid<Option<u8>>,
}

impl SharedData {
    fn trailheads(&self) -> impl Iterator<Item = Pos> + '_ {
        self.heights
            .iter()
            .filter(|(_, h)| **h == Some(0))
            .map(|(pos, _)| pos)
    }

    /// Neighbours exactly one unit higher
    fn uphill(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        let next = self.heights[pos].map(|h| h + 1);
        self.heights
            .neighbors4(pos)
            .filter(move |n| next.is_some() && self.heights[*n] == next)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = char_grid(input)?;
        if let Some((pos, c)) = grid
            .iter()
            .find(|(_, c)| !c.is_ascii_digit() && **c != '.')
        {
            return Err(ParseError::InvalidFormat(format!(
                "unexpected '{c}' at {pos:?}"
            )));
        }
        let heights = grid.map(|c| c.to_digit(10).map(|d| d as u8));
        Ok(SharedData { heights })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let score: usize = shared
            .trailheads()
            .map(|head| {
                depth_first_search(head, |&pos| shared.uphill(pos).collect::<Vec<_>>())
                    .into_iter()
                    .filter(|pos| shared.heights[*pos] == Some(9))
                    .count()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // trails[pos] = number of distinct uphill trails from pos to any 9,
        // filled from height 9 down to 0
        let heights = &shared.heights;
        let mut trails = Grid::filled(heights.rows(), heights.cols(), 0u64);
        for height in (0..=9u8).rev() {
            for (pos, h) in heights.iter() {
                if *h != Some(height) {
                    continue;
                }
                trails[pos] = if height == 9 {
                    1
                } else {
                    shared.uphill(pos).map(|n| trails[n]).sum()
                };
            }
        }
        let rating: u64 = shared.trailheads().map(|head| trails[head]).sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_tiles() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }

    #[test]
    fn test_rejects_unknown_cells() {
        assert!(Solver::parse("01\n2x\n").is_err());
    }
}

use std::collections::{BTreeMap, HashSet};

use aoc_search::{Pos, gcd};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::helpers::char_grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid", "gcd"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    rows: usize,
    cols: usize,
    antennas: BTreeMap<char, Vec<Pos>>,
}

impl SharedData {
    fn offset(&self, pos: Pos, d_row: isize, d_col: isize) -> Option<Pos> {
        pos.offset(d_row, d_col)
            .filter(|p| p.row < self.rows && p.col < self.cols)
    }

    /// Antinodes of every same-frequency antenna pair, as produced by `antinodes_of`
    fn count_antinodes(&self, antinodes_of: impl Fn(Pos, Pos) -> Vec<Pos>) -> usize {
        self.antennas
            .values()
            .flat_map(|positions| positions.iter().tuple_combinations())
            .flat_map(|(a, b)| antinodes_of(*a, *b))
            .collect::<HashSet<_>>()
            .len()
    }
}

fn delta(from: Pos, to: Pos) -> (isize, isize) {
    (
        to.row as isize - from.row as isize,
        to.col as isize - from.col as isize,
    )
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = char_grid(input)?;
        let mut antennas: BTreeMap<char, Vec<Pos>> = BTreeMap::new();
        for (pos, &cell) in grid.iter() {
            if cell.is_ascii_alphanumeric() {
                antennas.entry(cell).or_default().push(pos);
            } else if cell != '.' && cell != '#' {
                return Err(ParseError::InvalidFormat(format!(
                    "unexpected '{cell}' at {pos:?}"
                )));
            }
        }
        Ok(SharedData {
            rows: grid.rows(),
            cols: grid.cols(),
            antennas,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.count_antinodes(|a, b| {
            let (dr, dc) = delta(a, b);
            [shared.offset(b, dr, dc), shared.offset(a, -dr, -dc)]
                .into_iter()
                .flatten()
                .collect()
        });
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.count_antinodes(|a, b| {
            let (dr, dc) = delta(a, b);
            // Smallest lattice step along the line through both antennas
            let g = gcd(dr as i64, dc as i64) as isize;
            let (step_r, step_c) = (dr / g, dc / g);

            let mut line = Vec::new();
            for (sr, sc) in [(step_r, step_c), (-step_r, -step_c)] {
                let mut pos = Some(a);
                while let Some(p) = pos {
                    line.push(p);
                    pos = shared.offset(p, sr, sc);
                }
            }
            line
        });
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
............
........0...
.....0......
.......0....
....0.......
......A.....
............
............
........A...
.........A..
............
............
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_resonant_harmonics_small() {
        let input = "\
T.........
...T......
.T........
..........
..........
..........
..........
..........
..........
..........
";
        let mut shared = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }
}

use aoc_search::{Direction, Grid, Pos, depth_first_search};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::char_grid;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    garden: Grid<char>,
    regions: Option<Vec<Region>>,
}

#[derive(Debug, Clone, Copy)]
pub struct Region {
    area: u64,
    perimeter: u64,
    sides: u64,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            garden: char_grid(input)?,
            regions: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions_once(shared)
            .iter()
            .map(|r| r.area * r.perimeter)
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: u64 = regions_once(shared).iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}

fn regions_once(shared: &mut SharedData) -> &[Region] {
    let garden = &shared.garden;
    shared.regions.get_or_insert_with(|| {
        let mut seen = Grid::filled(garden.rows(), garden.cols(), false);
        let mut regions = Vec::new();
        for start in garden.positions() {
            if seen[start] {
                continue;
            }
            let plant = garden[start];
            let cells = depth_first_search(start, |&pos| {
                garden
                    .neighbors4(pos)
                    .filter(|n| garden[*n] == plant)
                    .collect::<Vec<_>>()
            });
            for &cell in &cells {
                seen[cell] = true;
            }
            regions.push(measure(garden, plant, &cells));
        }
        regions
    })
}

fn measure(garden: &Grid<char>, plant: char, cells: &[Pos]) -> Region {
    let same = |pos: Option<Pos>| pos.is_some_and(|p| garden[p] == plant);
    let mut perimeter = 0;
    let mut sides = 0;

    for &cell in cells {
        for dir in Direction::ALL {
            if !same(garden.step(cell, dir)) {
                perimeter += 1;
            }

            // Each corner of the region outline starts exactly one side
            let side = dir.turn_right();
            let ahead = same(garden.step(cell, dir));
            let beside = same(garden.step(cell, side));
            let diagonal = same(garden.step(cell, dir).and_then(|p| garden.step(p, side)));
            let convex = !ahead && !beside;
            let concave = ahead && beside && !diagonal;
            if convex || concave {
                sides += 1;
            }
        }
    }

    Region {
        area: cells.len() as u64,
        perimeter,
        sides,
    }
}

use aoc_search::{Direction, Grid, Pos, TurnCosts, min_turn_cost};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::{char_grid, find_marker, no_solution, solve_failed};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 16, tags = ["grid", "dijkstra"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    maze: Grid<char>,
    start: Pos,
    end: Pos,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = char_grid(input)?;
        let start = find_marker(&maze, 'S')?;
        let end = find_marker(&maze, 'E')?;
        Ok(SharedData { maze, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // The reindeer starts facing east
        let score = min_turn_cost(
            &shared.maze,
            shared.start,
            Direction::East,
            shared.end,
            |c| *c != '#',
            TurnCosts::default(),
        )
        .map_err(solve_failed)?
        .ok_or_else(|| no_solution("the end tile is walled off"))?;
        Ok(score.to_string())
    }
}

use aoc_search::Graph;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::helpers::{no_solution, parse_lines};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["graph", "clique"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Graph<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let edges = parse_lines(input, |line| {
            line.split_once('-')
                .filter(|(a, b)| !a.is_empty() && !b.is_empty())
                .ok_or_else(|| anyhow::anyhow!("expected `a-b`, got {line:?}"))
        })?;
        Ok(Graph::from_edges(edges))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let historian = shared
            .triangles()
            .into_iter()
            .filter(|triangle| triangle.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(historian.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let party = shared.max_clique();
        if party.is_empty() {
            return Err(no_solution("there are no computers"));
        }
        Ok(party.into_iter().sorted().join(","))
    }
}

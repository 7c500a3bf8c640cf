//! Example solver with dependent parts
//!
//! Part 1 finds the cheapest route through a small weighted line of rooms and
//! remembers it; part 2 reuses that route instead of searching again. The
//! second solve is also run under a time budget.
//!
//! Run with: cargo run --example dependent_parts

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};
use chrono::TimeDelta;

/// Shared data that part 1 fills in for part 2
#[derive(Debug, Clone)]
pub struct Rooms {
    pub costs: Vec<u32>,
    pub route: Option<Vec<usize>>,
}

/// Rooms are entered left to right; each step skips at most one room
///
/// - Part 1: cheapest total cost of reaching the last room
/// - Part 2: number of rooms on that cheapest route
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["example", "dependent"])]
pub struct Hallway;

impl Hallway {
    fn cheapest_route(costs: &[u32]) -> (u32, Vec<usize>) {
        let n = costs.len();
        let mut best = vec![u32::MAX; n];
        let mut prev = vec![None; n];
        if n == 0 {
            return (0, Vec::new());
        }
        best[0] = costs[0];
        for i in 1..n {
            for from in i.saturating_sub(2)..i {
                let candidate = best[from].saturating_add(costs[i]);
                if candidate < best[i] {
                    best[i] = candidate;
                    prev[i] = Some(from);
                }
            }
        }

        let mut route = vec![n - 1];
        while let Some(p) = route.last().and_then(|&r| prev[r]) {
            route.push(p);
        }
        route.reverse();
        (best[n - 1], route)
    }
}

impl AocParser for Hallway {
    type SharedData<'a> = Rooms;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let costs = input
            .split(',')
            .map(|c| {
                c.trim()
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidFormat(format!("Expected a cost, got: {c}")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Rooms { costs, route: None })
    }
}

impl PartSolver<1> for Hallway {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (cost, route) = Self::cheapest_route(&shared.costs);
        shared.route = Some(route);
        Ok(cost.to_string())
    }
}

impl PartSolver<2> for Hallway {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let rooms = match &shared.route {
            Some(route) => {
                println!("Reusing the route from part 1");
                route.len()
            }
            None => Self::cheapest_route(&shared.costs).1.len(),
        };
        Ok(rooms.to_string())
    }
}

fn main() {
    println!("=== Dependent Parts Example ===\n");

    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let input = "1, 100, 1, 1, 1, 100, 1, 1, 100, 1";
    println!("Room costs: {input}\n");

    let mut solver = registry
        .create_solver(2023, 2, input)
        .expect("Failed to create solver");
    println!("Parsed in {}µs", solver.parse_duration().num_microseconds().unwrap_or(0));

    match solver.solve(1) {
        Ok(result) => println!("Part 1 (cost): {}", result.answer),
        Err(e) => eprintln!("Error solving part 1: {e}"),
    }

    match solver.solve_within(2, Some(TimeDelta::milliseconds(100))) {
        Ok(result) => println!(
            "Part 2 (rooms): {} in {}µs",
            result.answer,
            result.duration().num_microseconds().unwrap_or(0)
        ),
        Err(e) => eprintln!("Error solving part 2: {e}"),
    }
}

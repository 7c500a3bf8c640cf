//! A short tour of the search primitives on one small maze
//!
//! Run with: cargo run -p aoc-search --example search_tour

use aoc_search::{
    Direction, Graph, Grid, Registers, SearchError, TurnCosts, Vocabulary, distance_map,
    min_turn_cost, run, shortest_path,
};

const MAZE: &str = "\
#######
#S..#E#
#.#.#.#
#.#...#
#######";

fn main() -> Result<(), SearchError> {
    let maze = Grid::from_rows(MAZE.lines().map(str::chars))?;
    let open = |c: &char| *c != '#';
    let find = |marker: char| {
        maze.position(|c| *c == marker)
            .ok_or_else(|| SearchError::InvalidInput(format!("no {marker} in maze")))
    };
    let (start, end) = (find('S')?, find('E')?);

    match shortest_path(&maze, start, end, open)? {
        Some(steps) => println!("Fewest steps S -> E: {steps}"),
        None => println!("E is unreachable"),
    }

    let distances = distance_map(&maze, start, open)?;
    let farthest = distances.reachable().map(|(_, d)| d).max().unwrap_or(0);
    println!("Open cells reachable from S: {}, farthest {farthest} away", distances.len());

    let cost = min_turn_cost(&maze, start, Direction::East, end, open, TurnCosts::default())?;
    println!("Cheapest reindeer route (turns cost 1000): {cost:?}");

    let towels = Vocabulary::new(["r", "wr", "b", "g", "bwu", "rb", "gb", "br"])?;
    println!("Ways to lay out \"rrbgbr\": {}", towels.count("rrbgbr")?);

    let network = Graph::from_edges([
        ("ka", "co"),
        ("co", "de"),
        ("de", "ka"),
        ("ta", "ka"),
        ("ta", "co"),
        ("ta", "de"),
        ("kh", "ta"),
    ]);
    let party: Vec<&str> = network.max_clique().into_iter().copied().collect();
    println!("Largest fully connected group: {}", party.join(","));

    let output = run(Registers::new(729, 0, 0), &[0, 1, 5, 4, 3, 0])?;
    println!("Machine output: {output:?}");

    Ok(())
}

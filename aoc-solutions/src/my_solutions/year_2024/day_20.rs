use aoc_search::{DistanceMap, Grid, distance_map};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::{char_grid, find_marker, no_solution};

/// Picoseconds a cheat must save to be counted
pub const MIN_SAVING: usize = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["grid", "bfs"])]
pub struct Solver;

pub struct SharedData {
    track: Grid<char>,
    from_start: DistanceMap,
    to_end: DistanceMap,
    /// Honest race time from start to end
    baseline: usize,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let track = char_grid(input)?;
        let start = find_marker(&track, 'S')?;
        let end = find_marker(&track, 'E')?;

        let open = |c: &char| *c != '#';
        let from_start = distance_map(&track, start, open)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let to_end = distance_map(&track, end, open)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let baseline = from_start
            .get(end)
            .ok_or_else(|| ParseError::InvalidFormat("the end is not on the track".into()))?;

        Ok(SharedData {
            track,
            from_start,
            to_end,
            baseline,
        })
    }
}

impl SharedData {
    /// Cheats of at most `max_cheat` moves through walls that save at least `min_saving`
    ///
    /// A cheat is identified by where it starts and ends, both on the track.
    /// Its cost is the start distance to the jump-off cell, the Manhattan jump,
    /// and the remaining distance to the end.
    pub fn count_cheats(&self, max_cheat: usize, min_saving: usize) -> usize {
        let reach = max_cheat as isize;
        let mut count = 0;
        for (from, before) in self.from_start.reachable() {
            for d_row in -reach..=reach {
                let span = reach - d_row.abs();
                for d_col in -span..=span {
                    let Some(to) = from.offset(d_row, d_col) else {
                        continue;
                    };
                    if !self.track.contains(to) {
                        continue;
                    }
                    let Some(after) = self.to_end.get(to) else {
                        continue;
                    };
                    let cost = before + from.manhattan(to) + after;
                    if cost + min_saving <= self.baseline {
                        count += 1;
                    }
                }
            }
        }
        count
    }
}

fn solve_with(shared: &SharedData, max_cheat: usize) -> Result<String, SolveError> {
    if shared.baseline == 0 {
        return Err(no_solution("start and end coincide"));
    }
    Ok(shared.count_cheats(max_cheat, MIN_SAVING).to_string())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 2)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        solve_with(shared, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
###############
#...#...#.....#
#.#.#.#.#.###.#
#S#...#.#.#...#
#######.#.#.###
#######.#.#...#
#######.#.###.#
###..E#...#...#
###.#######.###
#...###...#...#
#.#####.#.###.#
#.#...#.#.#...#
#.#.#.#.#.#.###
#...#...#...###
###############
";

    #[test]
    fn test_baseline() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.baseline, 84);
    }

    #[test]
    fn test_short_cheats() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.count_cheats(2, 1), 44);
        assert_eq!(shared.count_cheats(2, 20), 5);
        assert_eq!(shared.count_cheats(2, 64), 1);
        assert_eq!(shared.count_cheats(2, 65), 0);
    }

    #[test]
    fn test_long_cheats() {
        let shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.count_cheats(20, 50), 285);
        assert_eq!(shared.count_cheats(20, 72), 29);
        assert_eq!(shared.count_cheats(20, 74), 7);
        assert_eq!(shared.count_cheats(20, 76), 3);
    }

    #[test]
    fn test_sample_saves_less_than_threshold() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "0");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "0");
    }

    #[test]
    fn test_unreachable_end_is_parse_error() {
        assert!(matches!(
            Solver::parse("#####\n#S#E#\n#####"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}

use std::collections::HashMap;

use anyhow::anyhow;
use aoc_search::quick_sort;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::parse_lines;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<u32>,
    right: Vec<u32>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = parse_lines(input, |line| {
            let mut ids = line.split_whitespace().map(str::parse::<u32>);
            match (ids.next(), ids.next(), ids.next()) {
                (Some(l), Some(r), None) => Ok((l?, r?)),
                _ => Err(anyhow!("expected exactly two location IDs")),
            }
        })?;
        let (left, right) = pairs.into_iter().unzip();
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let left = quick_sort(&shared.left);
        let right = quick_sort(&shared.right);
        let total: u64 = left
            .iter()
            .zip(&right)
            .map(|(l, r)| u64::from(l.abs_diff(*r)))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u32, u64> = HashMap::new();
        for id in &shared.right {
            *counts.entry(*id).or_default() += 1;
        }
        let similarity: u64 = shared
            .left
            .iter()
            .map(|id| u64::from(*id) * counts.get(id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "11");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "31");
    }

    #[test]
    fn test_rejects_malformed_line() {
        assert!(Solver::parse("3   4\n5\n").is_err());
        assert!(Solver::parse("3   4   5\n").is_err());
        assert!(Solver::parse("3   x\n").is_err());
    }

    proptest::proptest! {
        /// Pairing is order-independent: shuffling either list keeps the distance
        #[test]
        fn prop_distance_ignores_line_order(
            pairs in proptest::collection::vec((0u32..100_000, 0u32..100_000), 1..40)
        ) {
            let input: String = pairs.iter().map(|(l, r)| format!("{l}   {r}\n")).collect();
            let reversed: String = pairs.iter().rev().map(|(l, r)| format!("{l}   {r}\n")).collect();

            let mut forward = Solver::parse(&input).unwrap();
            let mut backward = Solver::parse(&reversed).unwrap();
            proptest::prop_assert_eq!(
                Solver::solve_part(&mut forward, 1).unwrap(),
                Solver::solve_part(&mut backward, 1).unwrap()
            );

            let (mut left, mut right): (Vec<u32>, Vec<u32>) = pairs.into_iter().unzip();
            left.sort_unstable();
            right.sort_unstable();
            let expected: u64 = left.iter().zip(&right).map(|(l, r)| u64::from(l.abs_diff(*r))).sum();
            proptest::prop_assert_eq!(Solver::solve_part(&mut forward, 1).unwrap(), expected.to_string());
        }
    }
}

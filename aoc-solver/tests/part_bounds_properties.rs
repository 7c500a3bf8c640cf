//! Property-based tests for solver part bounds validation
//!
//! **Feature: solver-part-bounds**

use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("{}:part{}", shared, part))
    }
}

fn solve_checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    let mut shared = "input";
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked_range(&mut shared, part),
        2 => TestSolver::<2>::solve_part_checked_range(&mut shared, part),
        _ => TestSolver::<3>::solve_part_checked_range(&mut shared, part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// **Feature: solver-part-bounds, Property 1: Out-of-range rejection**
    /// *For any* solver with PARTS = N, part 0 and parts above N are
    /// rejected with `PartOutOfRange(part)`.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = solve_checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert!(result.is_ok(), "Expected Ok for part {} with max {}", part, max_parts);
        }
    }

    /// **Feature: solver-part-bounds, Property 2: Valid range delegation**
    /// *For any* part in `1..=N`, the checked call returns exactly what
    /// `solve_part` returns.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=3) {
        let mut shared = "input";
        let mut shared2 = "input";

        let checked_result = TestSolver::<3>::solve_part_checked_range(&mut shared, part);
        let direct_result = TestSolver::<3>::solve_part(&mut shared2, part);

        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        assert!(matches!(solve_checked(2, 0), Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        assert!(matches!(solve_checked(2, 3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        assert_eq!(solve_checked(2, 1).unwrap(), "input:part1");
    }
}

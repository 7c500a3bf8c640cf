use anyhow::{Context, anyhow};
use aoc_search::{Registers, run};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::helpers::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 17, tags = ["interpreter"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    registers: Registers,
    program: Vec<u8>,
}

fn register(line: Option<&str>, name: char) -> anyhow::Result<u64> {
    let line = line.ok_or_else(|| anyhow!("missing register {name}"))?;
    let value = line
        .strip_prefix(&format!("Register {name}:"))
        .ok_or_else(|| anyhow!("expected register {name}, got {line:?}"))?;
    value
        .trim()
        .parse()
        .with_context(|| format!("register {name}"))
}

fn parse_input(input: &str) -> anyhow::Result<SharedData> {
    let (header, program) = input
        .trim()
        .split_once("\n\n")
        .ok_or_else(|| anyhow!("expected registers and program separated by a blank line"))?;

    let mut lines = header.lines().map(str::trim);
    let registers = Registers::new(
        register(lines.next(), 'A')?,
        register(lines.next(), 'B')?,
        register(lines.next(), 'C')?,
    );

    let program = program
        .trim()
        .strip_prefix("Program:")
        .ok_or_else(|| anyhow!("missing program line"))?
        .split(',')
        .map(|word| word.trim().parse::<u8>().with_context(|| format!("word {word:?}")))
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(SharedData { registers, program })
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_input(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let output = run(shared.registers, &shared.program).map_err(solve_failed)?;
        Ok(output.iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;

    const SAMPLE: &str = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.registers, Registers::new(729, 0, 0));
        assert_eq!(
            Solver::solve_part(&mut shared, 1).unwrap(),
            "4,6,3,5,6,3,5,2,1,0"
        );
    }

    #[test]
    fn test_reserved_combo_operand_fails() {
        let input = "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 5,7";
        let mut shared = Solver::parse(input).unwrap();
        assert!(matches!(
            Solver::solve_part(&mut shared, 1),
            Err(SolveError::SolveFailed(_))
        ));
    }

    #[test]
    fn test_malformed_input() {
        assert!(Solver::parse("Register A: 1\n\nProgram: 0,3").is_err());
        assert!(Solver::parse("Register A: x\nRegister B: 0\nRegister C: 0\n\nProgram: 0").is_err());
        assert!(Solver::parse("Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 0,a").is_err());
    }
}

use anyhow::anyhow;
use aoc_search::Vocabulary;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::helpers::solve_failed;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["dp", "strings"])]
pub struct Solver;

pub struct SharedData<'a> {
    towels: Vocabulary,
    designs: Vec<&'a str>,
    /// Arrangement count per design, shared by both parts
    counts: Option<Vec<u64>>,
}

impl SharedData<'_> {
    fn counts(&mut self) -> Result<&[u64], SolveError> {
        if self.counts.is_none() {
            let counts = self
                .designs
                .iter()
                .map(|design| self.towels.count(design))
                .collect::<Result<Vec<_>, _>>()
                .map_err(solve_failed)?;
            self.counts = Some(counts);
        }
        Ok(self.counts.as_deref().unwrap_or_default())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (towels, designs) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no blank line before the designs".into()))?;

        let towels = Vocabulary::new(towels.split(',').map(str::trim))
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let designs: Vec<&str> = designs
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if let Some(bad) = designs.iter().find(|d| !d.bytes().all(|b| b"wubrg".contains(&b))) {
            return Err(ParseError::InvalidFormat(
                format!("design {bad:?} uses an unknown colour"),
            ));
        }

        Ok(SharedData {
            towels,
            designs,
            counts: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let possible = shared.counts()?.iter().filter(|&&n| n > 0).count();
        Ok(possible.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared
            .counts()?
            .iter()
            .try_fold(0u64, |acc, &n| acc.checked_add(n))
            .ok_or_else(|| SolveError::SolveFailed(anyhow!("arrangement total overflows u64").into()))?;
        Ok(total.to_string())
    }
}

//! Parsing and error glue shared by the day solvers

use anyhow::{Context, anyhow};
use aoc_search::{Grid, SearchError};
use aoc_solver::{ParseError, SolveError};

/// Parse a block of equal-width lines into a character grid
pub fn char_grid(input: &str) -> Result<Grid<char>, ParseError> {
    let lines: Vec<&str> = input.trim().lines().map(str::trim_end).collect();
    if lines.is_empty() {
        return Err(ParseError::MissingData("empty grid".into()));
    }
    Grid::from_rows(lines.iter().map(|line| line.chars()))
        .map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

/// Parse every non-empty line with `parse_line`, tagging failures with their line number
pub fn parse_lines<'a, T>(
    input: &'a str,
    mut parse_line: impl FnMut(&'a str) -> anyhow::Result<T>,
) -> Result<Vec<T>, ParseError> {
    input
        .trim()
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_idx, line)| {
            parse_line(line.trim()).with_context(|| format!("line {}", line_idx + 1))
        })
        .collect::<anyhow::Result<Vec<T>>>()
        .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
}

/// Locate the single cell holding `marker`
pub fn find_marker(grid: &Grid<char>, marker: char) -> Result<aoc_search::Pos, ParseError> {
    grid.position(|c| *c == marker)
        .ok_or_else(|| ParseError::MissingData(format!("no '{marker}' in grid")))
}

/// Split `line` on `separator` into exactly two parsed halves
pub fn parse_pair<T>(line: &str, separator: &str) -> anyhow::Result<(T, T)>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let (a, b) = line
        .split_once(separator)
        .ok_or_else(|| anyhow!("expected two values separated by {separator:?}"))?;
    Ok((a.trim().parse()?, b.trim().parse()?))
}

/// Wrap a toolkit failure as a solve failure
pub fn solve_failed(e: SearchError) -> SolveError {
    SolveError::SolveFailed(Box::new(e))
}

/// Failure for a search that should always have found something
pub fn no_solution(what: &str) -> SolveError {
    SolveError::SolveFailed(anyhow!("no solution: {what}").into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lines_reports_line_number() {
        let err = parse_lines("1\n\nx\n", |l| Ok(l.parse::<u32>()?)).unwrap_err();
        match err {
            ParseError::InvalidFormat(msg) => assert!(msg.starts_with("line 3"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(parse_pair::<u32>("3,4", ",").unwrap(), (3, 4));
        assert!(parse_pair::<u32>("34", ",").is_err());
        assert!(parse_pair::<u32>("3,x", ",").is_err());
    }

    #[test]
    fn test_char_grid_rejects_ragged_rows() {
        assert!(matches!(char_grid("..\n..."), Err(ParseError::InvalidFormat(_))));
        assert!(matches!(char_grid("  \n"), Err(ParseError::MissingData(_))));
        let grid = char_grid("S.\n.E\n").unwrap();
        assert_eq!(find_marker(&grid, 'E').unwrap(), aoc_search::Pos::new(1, 1));
        assert!(find_marker(&grid, 'X').is_err());
    }
}

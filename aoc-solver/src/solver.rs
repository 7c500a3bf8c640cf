//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Parses puzzle input into the data shared by every part
///
/// The shared data is a generic associated type so a solver can either own
/// its parsed form or borrow straight from the input text.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Lists;
///
/// impl AocParser for Lists {
///     type SharedData<'a> = Vec<(u32, u32)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| {
///                 let (l, r) = line
///                     .split_once("   ")
///                     .ok_or_else(|| ParseError::MissingData(line.to_string()))?;
///                 let l = l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string()))?;
///                 let r = r.parse().map_err(|_| ParseError::InvalidFormat(r.to_string()))?;
///                 Ok((l, r))
///             })
///             .collect()
///     }
/// }
///
/// assert_eq!(Lists::parse("3   4\n4   3").unwrap(), vec![(3, 4), (4, 3)]);
/// ```
pub trait AocParser {
    /// Parsed input plus anything one part leaves behind for the next
    ///
    /// - Owned types (`Vec<T>`, grids, custom structs) when the input is transformed
    /// - `&'a str` or other borrowed views when no transformation is needed
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Solves part `N` of a puzzle
///
/// Implement one of these per part and let `#[derive(AocSolver)]` generate
/// the [`Solver`] dispatch.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, PartSolver, ParseError, SolveError};
///
/// struct Depths;
///
/// impl AocParser for Depths {
///     type SharedData<'a> = Vec<u32>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat(l.to_string())))
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Depths {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.windows(2).filter(|w| w[1] > w[0]).count().to_string())
///     }
/// }
///
/// let mut shared = Depths::parse("1\n3\n2\n5").unwrap();
/// assert_eq!(<Depths as PartSolver<1>>::solve(&mut shared).unwrap(), "2");
/// ```
pub trait PartSolver<const N: u8>: AocParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// A complete solver for one year-day puzzle
///
/// Usually generated by `#[derive(AocSolver)]`, which forwards `solve_part`
/// to the matching [`PartSolver`] impl. Implement it by hand when the parts
/// share more logic than data.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver};
///
/// struct Edges;
///
/// impl AocParser for Edges {
///     type SharedData<'a> = Vec<(&'a str, &'a str)>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input
///             .lines()
///             .map(|line| line.split_once('-').ok_or_else(|| ParseError::InvalidFormat(line.into())))
///             .collect()
///     }
/// }
///
/// impl Solver for Edges {
///     const PARTS: u8 = 2;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
///         match part {
///             1 => Ok(shared.len().to_string()),
///             2 => Ok(shared.iter().filter(|(a, b)| a.starts_with('t') || b.starts_with('t')).count().to_string()),
///             _ => Err(SolveError::PartNotImplemented(part)),
///         }
///     }
/// }
///
/// let mut shared = Edges::parse("ka-co\nta-co\nde-ta").unwrap();
/// assert_eq!(Edges::solve_part(&mut shared, 2).unwrap(), "2");
/// ```
pub trait Solver: AocParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Bounds-checked part dispatch, available on every [`Solver`]
pub trait SolverExt: Solver {
    /// Solve `part`, rejecting 0 and anything above `PARTS` with `PartOutOfRange`
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}

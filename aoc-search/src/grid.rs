//! Rectangular grid model with bounds-checked neighbour queries

use crate::error::SearchError;
use std::ops::{Index, IndexMut};

/// A cell address, `row` counted from the top and `col` from the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Number of orthogonal unit moves between two cells on an open grid
    pub const fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Shift by a signed offset, `None` if either coordinate would go negative
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Pos> {
        Some(Pos::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }
}

impl From<(usize, usize)> for Pos {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in clockwise order starting at north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90° clockwise
    pub const fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Rotate 90° counter-clockwise
    pub const fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    pub const fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// `(d_row, d_col)` of a unit move
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

/// Compass directions including the diagonals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction8 {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction8 {
    pub const ALL: [Direction8; 8] = [
        Direction8::North,
        Direction8::NorthEast,
        Direction8::East,
        Direction8::SouthEast,
        Direction8::South,
        Direction8::SouthWest,
        Direction8::West,
        Direction8::NorthWest,
    ];

    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction8::North => (-1, 0),
            Direction8::NorthEast => (-1, 1),
            Direction8::East => (0, 1),
            Direction8::SouthEast => (1, 1),
            Direction8::South => (1, 0),
            Direction8::SouthWest => (1, -1),
            Direction8::West => (0, -1),
            Direction8::NorthWest => (-1, -1),
        }
    }
}

impl From<Direction> for Direction8 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => Direction8::North,
            Direction::East => Direction8::East,
            Direction::South => Direction8::South,
            Direction::West => Direction8::West,
        }
    }
}

/// A rectangular `rows × cols` grid stored row-major
///
/// Every row has the same length; [`Grid::from_rows`] enforces this. Search
/// routines only ever read a grid and keep their visited/distance state in
/// separate overlays.
///
/// # Example
///
/// ```
/// use aoc_search::{Grid, Pos};
///
/// let grid = Grid::from_rows(["#.#", "..."].iter().map(|line| line.chars())).unwrap();
/// assert_eq!((grid.rows(), grid.cols()), (2, 3));
/// assert_eq!(grid.get(Pos::new(0, 1)), Some(&'.'));
/// assert_eq!(grid.neighbors4(Pos::new(0, 0)).count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows
    ///
    /// # Errors
    ///
    /// Returns `SearchError::InvalidInput` if the rows differ in length.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, SearchError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        let mut cells = Vec::new();
        let mut row_count = 0;
        let mut cols = None;

        for (row_idx, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row);
            let width = cells.len() - before;
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(SearchError::InvalidInput(format!(
                        "row {} has {} cells, expected {}",
                        row_idx, width, expected
                    )));
                }
                Some(_) => {}
            }
            row_count += 1;
        }

        Ok(Self {
            cells,
            rows: row_count,
            cols: cols.unwrap_or(0),
        })
    }

    /// Build a grid by evaluating `f` at every position
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(Pos) -> T) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Pos::new(row, col)))
            .map(&mut f)
            .collect();
        Self { cells, rows, cols }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub const fn contains(&self, pos: Pos) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        if self.contains(pos) {
            self.cells.get(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        if self.contains(pos) {
            self.cells.get_mut(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    /// The neighbour one step away in `dir`, or `None` past the border
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        let (d_row, d_col) = dir.delta();
        pos.offset(d_row, d_col).filter(|next| self.contains(*next))
    }

    /// In-bounds orthogonal neighbours, clockwise from north
    pub fn neighbors4(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    /// In-bounds neighbours including diagonals, clockwise from north
    pub fn neighbors8(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction8::ALL.into_iter().filter_map(move |dir| {
            let (d_row, d_col) = dir.delta();
            pos.offset(d_row, d_col).filter(|next| self.contains(*next))
        })
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Pos::new(row, col)))
    }

    /// Every cell with its position, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// First position (row-major) whose cell satisfies `pred`
    pub fn position(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(pos, _)| pos)
    }

    /// Same-shaped grid with every cell transformed
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            cells: self.cells.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Fail unless `pos` is on the grid and passable
    pub(crate) fn require_passable<F>(
        &self,
        pos: Pos,
        passable: &F,
        role: &str,
    ) -> Result<(), SearchError>
    where
        F: Fn(&T) -> bool,
    {
        match self.get(pos) {
            None => Err(SearchError::InvalidInput(format!(
                "{} {:?} is outside the {}x{} grid",
                role, pos, self.rows, self.cols
            ))),
            Some(cell) if !passable(cell) => Err(SearchError::InvalidInput(format!(
                "{} {:?} is on a blocked cell",
                role, pos
            ))),
            Some(_) => Ok(()),
        }
    }
}

impl<T: Clone> Grid<T> {
    /// A grid with every cell set to `value`
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        Self {
            cells: vec![value; rows * cols],
            rows,
            cols,
        }
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        let (rows, cols) = (self.rows, self.cols);
        self.get(pos)
            .unwrap_or_else(|| panic!("{:?} is outside the {}x{} grid", pos, rows, cols))
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        let (rows, cols) = (self.rows, self.cols);
        self.get_mut(pos)
            .unwrap_or_else(|| panic!("{:?} is outside the {}x{} grid", pos, rows, cols))
    }
}

use std::fmt;

use super::cell::Direction;
use crate::config::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::error::{MazeError, Result};

/// A cell position: `x` is the column, `y` the row.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Coord { x, y }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord { x, y }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Rectangular grid dimensions and the row-major indexing that goes with them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    rows: usize,
    cols: usize,
}

impl Default for Dims {
    fn default() -> Self {
        Dims {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl Dims {
    /// Both dimensions must be at least 1 and the cell count must fit in a `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(MazeError::InvalidDimension { rows, cols });
        }
        Ok(Dims { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }

    /// Always `false`, since both dimensions are at least 1.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.cols && coord.y < self.rows
    }

    pub fn ravel_index(&self, coord: Coord) -> usize {
        coord.y * self.cols + coord.x
    }

    pub fn unravel_index(&self, index: usize) -> Coord {
        Coord::new(index % self.cols, index / self.cols)
    }

    /// The index of the cell one step away in `direction`, if it lies inside the grid.
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let Coord { x, y } = self.unravel_index(index);
        match direction {
            Direction::North => (y > 0).then(|| index - self.cols),
            Direction::South => (y + 1 < self.rows).then(|| index + self.cols),
            Direction::West => (x > 0).then(|| index - 1),
            Direction::East => (x + 1 < self.cols).then(|| index + 1),
        }
    }

    /// The direction leading from `from` to the adjacent cell `to`.
    ///
    /// Returns `None` when the two cells are not 4-adjacent.
    pub fn direction_between(&self, from: usize, to: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.neighbor(from, d) == Some(to))
    }

    /// Checks whether the cell at `index` sits on the outer edge in `direction`.
    pub fn is_border(&self, index: usize, direction: Direction) -> bool {
        self.neighbor(index, direction).is_none()
    }
}

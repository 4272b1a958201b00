//! Code for working with [`Location`]s on the Othello board.

use crate::error::EngineError;
use crate::EDGE_LENGTH;
use derive_more::Into;
use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter, Write};

/// A location on the Othello board, 0-indexed from the upper-left corner.
/// Both coordinates are always in `0..EDGE_LENGTH`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Into)]
pub struct Location {
    row: usize,
    col: usize,
}

/// One of the eight compass directions a capture can run in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Row and column offsets of one step in this direction. North is up (row - 1).
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

impl Location {
    /// Convert from row and column coordinates, failing if either is off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, EngineError> {
        if row >= EDGE_LENGTH || col >= EDGE_LENGTH {
            return Err(EngineError::OutOfBounds { row, col });
        }
        Ok(Self { row, col })
    }

    /// Convert from a row-major square index (0 is the upper-left corner).
    /// Returns None if `index` is not on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / EDGE_LENGTH, index % EDGE_LENGTH).ok()
    }

    /// Convert into a row-major square index.
    #[inline]
    pub fn to_index(self) -> usize {
        self.row * EDGE_LENGTH + self.col
    }

    #[inline]
    pub fn row(self) -> usize {
        self.row
    }

    #[inline]
    pub fn col(self) -> usize {
        self.col
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// The neighboring location one step in `dir`, or None past the edge.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (d_row, d_col) = dir.delta();
        let row = (self.row as isize).checked_add(d_row)?;
        let col = (self.col as isize).checked_add(d_col)?;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize).ok()
    }

    /// Every location further along `dir`, nearest first, up to the edge.
    pub fn ray(self, dir: Direction) -> impl Iterator<Item = Location> {
        std::iter::successors(self.step(dir), move |loc| loc.step(dir))
    }

    /// All 64 locations in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (0..EDGE_LENGTH)
            .flat_map(|row| (0..EDGE_LENGTH).map(move |col| Location { row, col }))
    }
}

impl TryFrom<(usize, usize)> for Location {
    type Error = EngineError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

/// Convert this [`Location`] into string notation ("D3": column letter, 1-based row).
impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let row_str = "12345678".chars().nth(self.row).ok_or(fmt::Error)?;
        let col_str = "ABCDEFGH".chars().nth(self.col).ok_or(fmt::Error)?;
        f.write_char(col_str)?;
        f.write_char(row_str)
    }
}

//! The 8x8 cell matrix and the raw board dynamics.
//!
//! [`Grid`] operations never consult whose turn it is; the caller passes the
//! [`Player`] to move. These are the building blocks for [`Engine`](crate::Engine),
//! which is the preferred interface when turn order and atomicity matter.

use crate::error::EngineError;
use crate::location::{Direction, Location};
use crate::state::Score;
use crate::{utils, Cell, Player, EDGE_LENGTH};
use std::convert::TryFrom;
use std::fmt;

/// An owned, row-major 8x8 board. Row 0 is the top edge, column 0 the left edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Cell; EDGE_LENGTH]; EDGE_LENGTH],
}

impl Default for Grid {
    /// Gets the standard starting position.
    fn default() -> Self {
        Self::starting()
    }
}

impl Grid {
    /// A board with no pieces on it.
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH],
        }
    }

    /// The standard opening: white on D4 and E5, black on E4 and D5.
    pub const fn starting() -> Self {
        let mut cells = [[Cell::Empty; EDGE_LENGTH]; EDGE_LENGTH];
        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;
        Self { cells }
    }

    /// Copy a caller-supplied position into a new grid.
    /// Fails unless `rows` is exactly 8 rows of exactly 8 cells.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, EngineError> {
        check_dimensions(rows.iter().map(|row| row.as_ref().len()))?;

        let mut grid = Self::empty();
        for (dst, src) in grid.cells.iter_mut().zip(rows) {
            dst.copy_from_slice(src.as_ref());
        }
        Ok(grid)
    }

    /// Build a grid from numeric cell codes (0 empty, 1 black, 2 white).
    /// Dimensions are checked before any cell value.
    pub fn from_raw_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, EngineError> {
        check_dimensions(rows.iter().map(|row| row.as_ref().len()))?;

        let mut grid = Self::empty();
        for (row, src) in rows.iter().enumerate() {
            for (col, &value) in src.as_ref().iter().enumerate() {
                grid.cells[row][col] = Cell::try_from(value)
                    .map_err(|_| EngineError::InvalidCell { row, col, value })?;
            }
        }
        Ok(grid)
    }

    /// The cell at `(row, col)`, or None if that is off the board.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row)?.get(col).copied()
    }

    #[inline]
    pub fn cell(&self, loc: Location) -> Cell {
        self.cells[loc.row()][loc.col()]
    }

    #[inline]
    pub(crate) fn set(&mut self, loc: Location, cell: Cell) {
        self.cells[loc.row()][loc.col()] = cell;
    }

    /// Read-only view of the rows.
    #[inline]
    pub fn rows(&self) -> &[[Cell; EDGE_LENGTH]; EDGE_LENGTH] {
        &self.cells
    }

    /// Iterate over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    /// Count the opponent pieces `player` would capture along `dir` by playing
    /// at `loc`. A run only counts when it is closed by one of `player`'s own
    /// pieces before an empty space or the edge.
    pub fn bracketed_run(&self, loc: Location, player: Player, dir: Direction) -> usize {
        let mut run = 0;
        for next in loc.ray(dir) {
            match self.cell(next) {
                Cell::Empty => return 0,
                cell if cell == player.cell() => return run,
                _ => run += 1,
            }
        }
        0
    }

    /// Returns whether `player` may place a piece at `loc`.
    /// Stops scanning at the first direction that captures.
    pub fn is_legal(&self, loc: Location, player: Player) -> bool {
        self.cell(loc).is_empty()
            && Direction::ALL
                .iter()
                .any(|&dir| self.bracketed_run(loc, player, dir) > 0)
    }

    /// All legal placements for `player`, in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Location> {
        Location::all()
            .filter(|&loc| self.is_legal(loc, player))
            .collect()
    }

    /// Every opponent piece captured by `player` playing at `loc`, grouped by direction.
    pub fn captures(&self, loc: Location, player: Player) -> Vec<Location> {
        Direction::ALL
            .iter()
            .flat_map(|&dir| loc.ray(dir).take(self.bracketed_run(loc, player, dir)))
            .collect()
    }

    /// Place a piece for `player` at `loc` and flip every captured run.
    /// Returns the flipped locations. The caller must have checked legality;
    /// on an illegal location only the placement happens.
    pub fn place(&mut self, loc: Location, player: Player) -> Vec<Location> {
        let flips = self.captures(loc, player);
        self.set(loc, player.cell());
        for &flip in &flips {
            self.set(flip, player.cell());
        }
        flips
    }

    /// Returns true if no empty space remains.
    pub fn is_full(&self) -> bool {
        self.iter().all(|cell| !cell.is_empty())
    }

    /// Count the spaces holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.iter().filter(|&c| c == cell).count()
    }

    /// Count each player's pieces.
    pub fn score(&self) -> Score {
        Score {
            black: self.count(Cell::Black),
            white: self.count(Cell::White),
        }
    }
}

fn check_dimensions<I: ExactSizeIterator<Item = usize>>(widths: I) -> Result<(), EngineError> {
    let rows = widths.len();
    let bad_width = widths.into_iter().find(|&width| width != EDGE_LENGTH);
    match (rows, bad_width) {
        (EDGE_LENGTH, None) => Ok(()),
        (rows, bad_width) => Err(EngineError::InvalidDimensions {
            rows,
            cols: bad_width.unwrap_or(EDGE_LENGTH),
        }),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(self.iter(), f)
    }
}

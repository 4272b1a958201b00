use derive_more::{Display, Error};

/// Errors reported by [`Engine`](crate::Engine) operations.
///
/// Every rejected operation leaves the engine exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// A seeded position was not 8 rows of 8 cells. `cols` is the width of the
    /// first row that is not 8 wide, or 8 if only the row count is wrong.
    #[display(
        fmt = "invalid position: expected an 8x8 grid, got {} rows (first bad width {})",
        rows,
        cols
    )]
    InvalidDimensions { rows: usize, cols: usize },

    #[display(fmt = "location ({}, {}) is off the board", row, col)]
    OutOfBounds { row: usize, col: usize },

    #[display(fmt = "illegal move at ({}, {})", row, col)]
    IllegalMove { row: usize, col: usize },

    /// A raw seeded position held a byte that is not a cell code.
    #[display(fmt = "invalid cell value {} at ({}, {})", value, row, col)]
    InvalidCell { row: usize, col: usize, value: u8 },
}

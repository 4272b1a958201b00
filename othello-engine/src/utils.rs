//! Text rendering helpers.

use crate::{Cell, EDGE_LENGTH};
use std::fmt::{self, Formatter};

/// Draw 64 cells, row-major, as a lettered and numbered grid.
/// Fails if `cells` does not yield exactly 64 items.
pub fn format_grid<T: IntoIterator<Item = Cell>>(cells: T, f: &mut Formatter) -> fmt::Result {
    let mut cells = cells.into_iter();
    write!(f, "  A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n{}", row + 1)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", cells.next().ok_or(fmt::Error)?.symbol())?;
        }
    }

    match cells.next() {
        None => Ok(()),
        Some(_) => Err(fmt::Error),
    }
}

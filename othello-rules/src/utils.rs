//! Miscellaneous project utilities.

use crate::GRID_LENGTH;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Format 100 characters into a space-separated grid, one row per line.
/// `symbols` must yield exactly `GRID_LENGTH * GRID_LENGTH` items.
pub fn format_grid<T: Iterator<Item = char>>(mut symbols: T, f: &mut Formatter) -> fmt::Result {
    for row in 0..GRID_LENGTH {
        if row > 0 {
            writeln!(f)?;
        }
        for col in 0..GRID_LENGTH {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", symbols.next().ok_or(fmt::Error)?)?;
        }
    }

    match symbols.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

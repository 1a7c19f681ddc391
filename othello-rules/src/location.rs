//! Code for working with [`Location`]s on the Othello board.

use crate::EDGE_LENGTH;
use derive_more::{Display, Error, Into};
use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::FromIterator;

/// A playable location on the Othello board.
///
/// Rows and columns are 1-indexed and lie in `[1, 8]`; rows 0 and 9 (and the
/// matching columns) belong to the sentinel border and are never a `Location`.
/// Ordering is row-major.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub struct Location {
    row: u8,
    col: u8,
}

/// Errors produced while building a [`Location`] from untrusted input.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum LocationError {
    #[display(fmt = "location ({}, {}) is off the board", row, col)]
    OutOfRange { row: i64, col: i64 },
    #[display(fmt = "invalid location string")]
    Malformed,
}

/// One of the eight compass directions a capture line can run along.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// The `(row, column)` step taken when moving one cell in this direction.
    #[inline]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }
}

impl Location {
    /// Build a location from 1-indexed row and column coordinates.
    pub fn new(row: i64, col: i64) -> Result<Self, LocationError> {
        let range = 1..=EDGE_LENGTH as i64;
        if range.contains(&row) && range.contains(&col) {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(LocationError::OutOfRange { row, col })
        }
    }

    /// Build a location from grid indices without checking that they are playable.
    /// Results in inconsistent state if either index lies on the sentinel border.
    #[inline]
    pub(crate) fn from_grid_unchecked(row: usize, col: usize) -> Self {
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Grid indices of this location; identical to its coordinates because the
    /// sentinel border occupies index 0.
    #[inline]
    pub(crate) fn to_grid(self) -> (usize, usize) {
        (self.row as usize, self.col as usize)
    }

    /// Get the row and column coordinates.
    #[inline]
    pub fn to_coords(self) -> (u8, u8) {
        (self.row, self.col)
    }

    /// Iterate over every playable location in row-major order.
    pub fn all() -> impl Iterator<Item = Location> {
        (1..=EDGE_LENGTH)
            .cartesian_product(1..=EDGE_LENGTH)
            .map(|(row, col)| Self::from_grid_unchecked(row, col))
    }

    /// Parse algebraic notation: a column letter followed by a row digit ("C4").
    fn from_algebraic(s: &str) -> Result<Self, LocationError> {
        let mut chars = s.chars();
        let col_str = chars
            .next()
            .ok_or(LocationError::Malformed)?
            .to_ascii_uppercase();
        let col = "ABCDEFGH".find(col_str).ok_or(LocationError::Malformed)? as i64;
        let row = chars
            .next()
            .ok_or(LocationError::Malformed)?
            .to_digit(10)
            .ok_or(LocationError::Malformed)? as i64;

        if chars.next().is_some() {
            return Err(LocationError::Malformed);
        }

        Self::new(row, col + 1)
    }
}

/// Convert this [`Location`] into tuple notation ("(4, 3)").
impl fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Build a [`Location`] from "r,c", "(r, c)", "r c" or algebraic ("C4") notation.
impl std::str::FromStr for Location {
    type Err = LocationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty());

        match (parts.next(), parts.next(), parts.next()) {
            (Some(row), Some(col), None) => {
                let row = row.parse().map_err(|_| LocationError::Malformed)?;
                let col = col.parse().map_err(|_| LocationError::Malformed)?;
                Self::new(row, col)
            }
            (Some(algebraic), None, None) => Self::from_algebraic(algebraic),
            _ => Err(LocationError::Malformed),
        }
    }
}

/// An ascending, duplicate-free list of locations.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash, Into)]
pub struct LocationList(Vec<Location>);

impl LocationList {
    /// Returns whether `loc` is in this list.
    pub fn contains(&self, loc: Location) -> bool {
        self.0.binary_search(&loc).is_ok()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Location> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Location] {
        &self.0
    }
}

impl FromIterator<Location> for LocationList {
    fn from_iter<I: IntoIterator<Item = Location>>(iter: I) -> Self {
        let mut locations: Vec<Location> = iter.into_iter().collect();
        locations.sort_unstable();
        locations.dedup();
        Self(locations)
    }
}

impl IntoIterator for LocationList {
    type Item = Location;
    type IntoIter = std::vec::IntoIter<Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LocationList {
    type Item = &'a Location;
    type IntoIter = std::slice::Iter<'a, Location>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for LocationList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(row: i64, col: i64) -> Location {
        Location::new(row, col).unwrap()
    }

    #[test]
    fn location_new_bounds() {
        assert_eq!(loc(1, 1).to_coords(), (1, 1));
        assert_eq!(loc(8, 8).to_coords(), (8, 8));
        assert_eq!(
            Location::new(0, 4),
            Err(LocationError::OutOfRange { row: 0, col: 4 })
        );
        assert_eq!(
            Location::new(4, 9),
            Err(LocationError::OutOfRange { row: 4, col: 9 })
        );
        assert!(Location::new(-1, 3).is_err());
    }

    #[test]
    fn location_order_is_row_major() {
        assert!(loc(3, 8) < loc(4, 1));
        assert!(loc(4, 1) < loc(4, 2));
    }

    #[test]
    fn location_all() {
        let all: Vec<Location> = Location::all().collect();
        assert_eq!(all.len(), crate::NUM_SPACES);
        assert_eq!(all[0], loc(1, 1));
        assert_eq!(all[9], loc(2, 2));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn location_from_str_success() {
        assert_eq!(Location::from_str("4,3"), Ok(loc(4, 3)));
        assert_eq!(Location::from_str("(6, 5)"), Ok(loc(6, 5)));
        assert_eq!(Location::from_str(" 1 8 "), Ok(loc(1, 8)));
        assert_eq!(Location::from_str("A1"), Ok(loc(1, 1)));
        assert_eq!(Location::from_str("h8"), Ok(loc(8, 8)));
        assert_eq!(Location::from_str("D7"), Ok(loc(7, 4)));
    }

    #[test]
    fn location_from_str_fail() {
        assert_eq!(Location::from_str(""), Err(LocationError::Malformed));
        assert_eq!(Location::from_str("A12"), Err(LocationError::Malformed));
        assert_eq!(Location::from_str("AA"), Err(LocationError::Malformed));
        assert_eq!(Location::from_str("I5"), Err(LocationError::Malformed));
        assert_eq!(Location::from_str("1,2,3"), Err(LocationError::Malformed));
        assert_eq!(
            Location::from_str("A9"),
            Err(LocationError::OutOfRange { row: 9, col: 1 })
        );
        assert_eq!(
            Location::from_str("(0, 5)"),
            Err(LocationError::OutOfRange { row: 0, col: 5 })
        );
    }

    #[test]
    fn location_to_str() {
        assert_eq!(loc(4, 3).to_string(), "(4, 3)");
        assert_eq!(Location::from_str("E2").unwrap().to_string(), "(2, 5)");
    }

    #[test]
    fn location_list_sorts_and_dedups() {
        let list: LocationList = vec![loc(5, 6), loc(3, 4), loc(5, 6), loc(4, 3)]
            .into_iter()
            .collect();
        assert_eq!(list.as_slice(), &[loc(3, 4), loc(4, 3), loc(5, 6)]);
        assert!(list.contains(loc(4, 3)));
        assert!(!list.contains(loc(6, 5)));
        assert_eq!(list.to_string(), "[(3, 4), (4, 3), (5, 6)]");
        assert_eq!(LocationList::default().to_string(), "[]");
    }
}

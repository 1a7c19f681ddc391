//! The legal-move index: destinations and the capture lines that justify them.
//!
//! A [`MoveIndex`] is produced by [`Board::move_index`] and consumed by
//! [`Board::apply`]. It remembers the board it was generated from, so an
//! index that outlived the position it describes is refused instead of
//! painting stale lines onto the board.

use crate::board::Board;
use crate::game::Side;
use crate::location::{Location, LocationList};
use crate::GRID_LENGTH;
use arrayvec::ArrayVec;
use std::collections::BTreeMap;

/// An ordered run of cells: the mover's origin piece, one or more
/// contiguous opponent pieces, and finally the empty destination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CaptureLine {
    cells: ArrayVec<[Location; GRID_LENGTH]>,
}

impl CaptureLine {
    pub(crate) fn new(origin: Location) -> Self {
        let mut cells = ArrayVec::new();
        cells.push(origin);
        Self { cells }
    }

    pub(crate) fn push(&mut self, loc: Location) {
        self.cells.push(loc);
    }

    /// The number of cells recorded so far, origin included.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// The mover's piece the line was cast from.
    pub fn origin(&self) -> Location {
        self.cells[0]
    }

    /// The empty cell that terminates the line.
    pub fn destination(&self) -> Location {
        self.cells[self.cells.len() - 1]
    }

    /// The opponent pieces strictly between origin and destination.
    pub fn captured(&self) -> &[Location] {
        &self.cells[1..self.cells.len() - 1]
    }

    /// Every cell of the line, origin through destination.
    pub fn cells(&self) -> &[Location] {
        &self.cells
    }
}

/// Mapping from each legal destination to every capture line ending there.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveIndex {
    side: Side,
    board: Board,
    lines: BTreeMap<Location, Vec<CaptureLine>>,
}

impl MoveIndex {
    pub(crate) fn new(side: Side, board: Board) -> Self {
        Self {
            side,
            board,
            lines: BTreeMap::new(),
        }
    }

    /// Register a complete line against its destination.
    /// Lines sharing a destination are merged by appending, never replaced.
    pub(crate) fn insert(&mut self, line: CaptureLine) {
        self.lines
            .entry(line.destination())
            .or_insert_with(Vec::new)
            .push(line);
    }

    /// The side this index was generated for.
    pub fn side(&self) -> Side {
        self.side
    }

    /// All legal destinations in ascending (row, column) order.
    pub fn destinations(&self) -> LocationList {
        self.lines.keys().copied().collect()
    }

    pub fn contains(&self, loc: Location) -> bool {
        self.lines.contains_key(&loc)
    }

    /// Every capture line that ends at `loc`.
    pub fn lines(&self, loc: Location) -> Option<&[CaptureLine]> {
        self.lines.get(&loc).map(Vec::as_slice)
    }

    /// The union of all cells on every line ending at `loc`, destination included.
    pub fn cells_to_paint(&self, loc: Location) -> Option<LocationList> {
        self.lines.get(&loc).map(|lines| {
            lines
                .iter()
                .flat_map(|line| line.cells().iter().copied())
                .collect()
        })
    }

    /// The union of opponent pieces flipped by playing at `loc`.
    pub fn captured(&self, loc: Location) -> Option<LocationList> {
        self.lines.get(&loc).map(|lines| {
            lines
                .iter()
                .flat_map(|line| line.captured().iter().copied())
                .collect()
        })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether this index still describes `board`.
    pub fn is_current_for(&self, board: &Board) -> bool {
        self.board == *board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(row: i64, col: i64) -> Location {
        Location::new(row, col).unwrap()
    }

    fn line(cells: &[(i64, i64)]) -> CaptureLine {
        let mut line = CaptureLine::new(loc(cells[0].0, cells[0].1));
        for &(row, col) in &cells[1..] {
            line.push(loc(row, col));
        }
        line
    }

    #[test]
    fn capture_line_parts() {
        let line = line(&[(4, 1), (4, 2), (4, 3), (4, 4)]);
        assert_eq!(line.origin(), loc(4, 1));
        assert_eq!(line.destination(), loc(4, 4));
        assert_eq!(line.captured(), &[loc(4, 2), loc(4, 3)]);
        assert_eq!(line.cells().len(), 4);
    }

    #[test]
    fn insert_merges_lines_sharing_a_destination() {
        let mut index = MoveIndex::new(Side::Black, Board::empty());
        index.insert(line(&[(4, 1), (4, 2), (4, 3)]));
        index.insert(line(&[(2, 3), (3, 3), (4, 3)]));
        index.insert(line(&[(6, 6), (6, 7), (6, 8)]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.lines(loc(4, 3)).map(<[_]>::len), Some(2));
        assert_eq!(
            index.captured(loc(4, 3)).unwrap().as_slice(),
            &[loc(3, 3), loc(4, 2)]
        );
        assert_eq!(
            index.cells_to_paint(loc(4, 3)).unwrap().as_slice(),
            &[loc(2, 3), loc(3, 3), loc(4, 1), loc(4, 2), loc(4, 3)]
        );
        assert_eq!(
            index.destinations().as_slice(),
            &[loc(4, 3), loc(6, 8)]
        );
        assert!(index.lines(loc(1, 1)).is_none());
    }

    #[test]
    fn overlapping_lines_paint_each_cell_once() {
        let mut index = MoveIndex::new(Side::White, Board::empty());
        index.insert(line(&[(1, 1), (1, 2), (1, 3)]));
        index.insert(line(&[(1, 1), (1, 2), (1, 3)]));

        assert_eq!(index.lines(loc(1, 3)).map(<[_]>::len), Some(2));
        assert_eq!(index.cells_to_paint(loc(1, 3)).unwrap().len(), 3);
    }

    #[test]
    fn index_remembers_its_board() {
        let index = MoveIndex::new(Side::Black, Board::new());
        assert!(index.is_current_for(&Board::new()));
        assert!(!index.is_current_for(&Board::empty()));
    }
}

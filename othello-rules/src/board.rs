//! The sentinel-bordered mailbox board and the raw Othello rules.
//!
//! The playable 8x8 area is surrounded by a ring of [`Cell::Sentinel`]s, so a
//! ray walking outward from any playable cell always stops at the border
//! without bounds checks. Sentinels are written once by the constructors and
//! never change afterwards.

use crate::game::{GameOver, Score, Side};
use crate::index::{CaptureLine, MoveIndex};
use crate::location::{Direction, Location, LocationList};
use crate::{utils, EDGE_LENGTH, GRID_LENGTH, NUM_SPACES};
use derive_more::{Display, Error};
use std::fmt;

/// The contents of a single grid cell.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Cell {
    Empty,
    Black,
    White,
    Sentinel,
}

impl Cell {
    /// The single-character symbol used when rendering or parsing boards.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
            Cell::Sentinel => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Cell::Empty),
            'X' => Some(Cell::Black),
            'O' => Some(Cell::White),
            '*' => Some(Cell::Sentinel),
            _ => None,
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }
}

/// The complete grid, sentinel border included.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Board {
    cells: [[Cell; GRID_LENGTH]; GRID_LENGTH],
}

/// Reasons [`Board::apply`] refuses a move.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ApplyError {
    #[display(fmt = "{} is not a destination in the move index", location)]
    NotIndexed { location: Location },
    #[display(fmt = "move index was generated for a different position")]
    StaleIndex,
}

#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum ParseBoardError {
    #[display(fmt = "expected 64 or 100 cell symbols, found {}", found)]
    WrongLength { found: usize },
    #[display(fmt = "unknown cell symbol {:?}", symbol)]
    UnknownSymbol { symbol: char },
    #[display(fmt = "sentinel symbols must form exactly the border")]
    MisplacedSentinel,
}

impl Default for Board {
    /// Gets the starting board.
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn is_border(row: usize, col: usize) -> bool {
    row == 0 || col == 0 || row == GRID_LENGTH - 1 || col == GRID_LENGTH - 1
}

impl Board {
    /// A board with the standard diagonal starting pattern.
    pub fn new() -> Self {
        let mut board = Self::empty();
        let low = EDGE_LENGTH / 2;
        let high = low + 1;
        board.cells[low][low] = Cell::White;
        board.cells[low][high] = Cell::Black;
        board.cells[high][low] = Cell::Black;
        board.cells[high][high] = Cell::White;
        board
    }

    /// A board whose playable cells are all empty.
    pub fn empty() -> Self {
        let mut cells = [[Cell::Empty; GRID_LENGTH]; GRID_LENGTH];
        for (row, cells_in_row) in cells.iter_mut().enumerate() {
            for (col, cell) in cells_in_row.iter_mut().enumerate() {
                if is_border(row, col) {
                    *cell = Cell::Sentinel;
                }
            }
        }
        Self { cells }
    }

    #[inline]
    pub fn get(&self, loc: Location) -> Cell {
        let (row, col) = loc.to_grid();
        self.cells[row][col]
    }

    /// Put a piece of `side` at `loc`, replacing whatever was there.
    pub fn place(&mut self, loc: Location, side: Side) {
        let (row, col) = loc.to_grid();
        self.cells[row][col] = side.into();
    }

    /// Every location holding a piece of `side`, in row-major order.
    pub fn occupied(&self, side: Side) -> Vec<Location> {
        let own = Cell::from(side);
        Location::all().filter(|&loc| self.get(loc) == own).collect()
    }

    /// Count the pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        let own = Cell::from(side);
        Location::all().filter(|&loc| self.get(loc) == own).count()
    }

    /// Count the empty playable cells.
    pub fn count_empty(&self) -> usize {
        NUM_SPACES - self.count(Side::Black) - self.count(Side::White)
    }

    pub fn score(&self) -> Score {
        Score {
            black: self.count(Side::Black),
            white: self.count(Side::White),
        }
    }

    /// Walk outward from `origin` along `direction` and return the capture
    /// line `side` would complete there, if any.
    ///
    /// The walk stops at the first sentinel or piece of `side` (no line), or
    /// at the first empty cell, which is a destination only when at least
    /// one opponent piece was crossed on the way.
    pub fn capture_line(
        &self,
        origin: Location,
        direction: Direction,
        side: Side,
    ) -> Option<CaptureLine> {
        let own = Cell::from(side);
        let (row_step, col_step) = direction.delta();
        let (mut row, mut col) = origin.to_grid();
        let mut line = CaptureLine::new(origin);

        // The border is reached after at most EDGE_LENGTH steps.
        for _ in 0..EDGE_LENGTH {
            row = (row as isize + row_step) as usize;
            col = (col as isize + col_step) as usize;

            match self.cells[row][col] {
                Cell::Sentinel => return None,
                cell if cell == own => return None,
                Cell::Empty if line.len() == 1 => return None,
                Cell::Empty => {
                    line.push(Location::from_grid_unchecked(row, col));
                    return Some(line);
                }
                _ => line.push(Location::from_grid_unchecked(row, col)),
            }
        }

        None
    }

    /// Build the legal-move index for `side`: every destination it may play,
    /// with all capture lines (from any origin and direction) ending there.
    pub fn move_index(&self, side: Side) -> MoveIndex {
        let mut index = MoveIndex::new(side, *self);

        for origin in self.occupied(side) {
            for &direction in Direction::ALL.iter() {
                if let Some(line) = self.capture_line(origin, direction, side) {
                    index.insert(line);
                }
            }
        }

        index
    }

    /// The sorted legal destinations for `side`.
    #[inline]
    pub fn legal_moves(&self, side: Side) -> LocationList {
        self.move_index(side).destinations()
    }

    /// Play `loc` using a previously generated `index`: every cell of every
    /// capture line ending at `loc`, the destination included, is set to the
    /// index's side. Returns the opponent pieces that were flipped.
    pub fn apply(&mut self, index: &MoveIndex, loc: Location) -> Result<LocationList, ApplyError> {
        if !index.is_current_for(self) {
            return Err(ApplyError::StaleIndex);
        }

        let not_indexed = ApplyError::NotIndexed { location: loc };
        let cells = index.cells_to_paint(loc).ok_or(not_indexed)?;
        let captured = index.captured(loc).ok_or(not_indexed)?;

        for &cell in &cells {
            self.place(cell, index.side());
        }

        Ok(captured)
    }

    /// The result of the game if neither side has a legal move, else `None`.
    pub fn outcome(&self) -> Option<GameOver> {
        if !self.move_index(Side::Black).is_empty() || !self.move_index(Side::White).is_empty() {
            return None;
        }

        Some(GameOver::from(self.score()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        utils::format_grid(
            self.cells.iter().flatten().map(|cell| cell.symbol()),
            f,
        )
    }
}

/// Parse a board from either the 64 playable symbols or the full 100-symbol
/// rendering with its sentinel border. Whitespace is ignored.
impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|symbol| Cell::from_symbol(symbol).ok_or(ParseBoardError::UnknownSymbol { symbol }))
            .collect::<Result<Vec<Cell>, _>>()?;

        let mut board = Self::empty();

        match symbols.len() {
            n if n == NUM_SPACES => {
                for (loc, &cell) in Location::all().zip(symbols.iter()) {
                    if cell == Cell::Sentinel {
                        return Err(ParseBoardError::MisplacedSentinel);
                    }
                    let (row, col) = loc.to_grid();
                    board.cells[row][col] = cell;
                }
            }
            n if n == GRID_LENGTH * GRID_LENGTH => {
                for (i, &cell) in symbols.iter().enumerate() {
                    let (row, col) = (i / GRID_LENGTH, i % GRID_LENGTH);
                    if is_border(row, col) != (cell == Cell::Sentinel) {
                        return Err(ParseBoardError::MisplacedSentinel);
                    }
                    board.cells[row][col] = cell;
                }
            }
            found => return Err(ParseBoardError::WrongLength { found }),
        }

        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn loc(row: i64, col: i64) -> Location {
        Location::new(row, col).unwrap()
    }

    fn locs(coords: &[(i64, i64)]) -> Vec<Location> {
        coords.iter().map(|&(row, col)| loc(row, col)).collect()
    }

    const START_RENDERING: &str = "\
* * * * * * * * * *
* . . . . . . . . *
* . . . . . . . . *
* . . . . . . . . *
* . . . O X . . . *
* . . . X O . . . *
* . . . . . . . . *
* . . . . . . . . *
* . . . . . . . . *
* * * * * * * * * *";

    #[test]
    fn starting_board_display() {
        assert_eq!(Board::new().to_string(), START_RENDERING);
    }

    #[test]
    fn parse_full_rendering() {
        assert_eq!(Board::from_str(START_RENDERING), Ok(Board::new()));
    }

    #[test]
    fn parse_playable_area() {
        let board: Board = "
            ........
            ........
            ........
            ...OX...
            ...XO...
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            Board::from_str("...."),
            Err(ParseBoardError::WrongLength { found: 4 })
        );
        assert_eq!(
            Board::from_str(&"?".repeat(64)),
            Err(ParseBoardError::UnknownSymbol { symbol: '?' })
        );
        assert_eq!(
            Board::from_str(&"*".repeat(64)),
            Err(ParseBoardError::MisplacedSentinel)
        );
        assert_eq!(
            Board::from_str(&".".repeat(100)),
            Err(ParseBoardError::MisplacedSentinel)
        );
    }

    #[test]
    fn empty_board_has_only_sentinels_on_border() {
        let board = Board::empty();
        assert_eq!(board.count_empty(), NUM_SPACES);
        assert!(Location::all().all(|l| board.get(l) == Cell::Empty));
    }

    #[test]
    fn occupancy_scan() {
        let board = Board::new();
        assert_eq!(board.occupied(Side::Black), locs(&[(4, 5), (5, 4)]));
        assert_eq!(board.occupied(Side::White), locs(&[(4, 4), (5, 5)]));
        assert_eq!(board.count(Side::Black), 2);
        assert_eq!(board.count_empty(), 60);
    }

    #[test]
    fn starting_moves() {
        let board = Board::new();
        assert_eq!(
            board.legal_moves(Side::Black).as_slice(),
            locs(&[(3, 4), (4, 3), (5, 6), (6, 5)]).as_slice()
        );
        assert_eq!(
            board.legal_moves(Side::White).as_slice(),
            locs(&[(3, 5), (4, 6), (5, 3), (6, 4)]).as_slice()
        );

        let index = board.move_index(Side::Black);
        for dest in index.destinations() {
            assert_eq!(index.captured(dest).unwrap().len(), 1);
        }
    }

    #[test]
    fn capture_line_stops() {
        let board: Board = "
            XOO.....
            XX......
            O.......
            ........
            XOX.....
            ........
            ........
            OOOOOOOX"
            .parse()
            .unwrap();

        let east = board.capture_line(loc(1, 1), Direction::East, Side::Black).unwrap();
        assert_eq!(east.cells(), locs(&[(1, 1), (1, 2), (1, 3), (1, 4)]).as_slice());
        assert_eq!(east.captured(), locs(&[(1, 2), (1, 3)]).as_slice());

        // Own piece adjacent.
        assert!(board.capture_line(loc(1, 1), Direction::South, Side::Black).is_none());
        // Sentinel adjacent.
        assert!(board.capture_line(loc(1, 1), Direction::North, Side::Black).is_none());
        // Empty adjacent.
        assert!(board.capture_line(loc(2, 2), Direction::SouthEast, Side::Black).is_none());
        // Opponent run ending at the border.
        assert!(board.capture_line(loc(8, 8), Direction::West, Side::Black).is_none());
        // Opponent run ending on a piece of the mover.
        assert!(board.capture_line(loc(5, 1), Direction::East, Side::Black).is_none());

        let south = board.capture_line(loc(2, 1), Direction::South, Side::Black).unwrap();
        assert_eq!(south.captured(), &[loc(3, 1)]);
        assert_eq!(south.destination(), loc(4, 1));
    }

    #[test]
    fn apply_flips_only_indexed_cells() {
        let mut board = Board::new();
        let before = board;
        let index = board.move_index(Side::Black);

        let flipped = board.apply(&index, loc(3, 4)).unwrap();
        assert_eq!(flipped.as_slice(), &[loc(4, 4)]);
        assert_eq!(board.get(loc(3, 4)), Cell::Black);
        assert_eq!(board.get(loc(4, 4)), Cell::Black);

        let changed: Vec<Location> = Location::all().filter(|&l| board.get(l) != before.get(l)).collect();
        assert_eq!(changed, locs(&[(3, 4), (4, 4)]));
    }

    #[test]
    fn apply_unions_lines_from_different_directions() {
        let mut board: Board = "
            ........
            ..X.....
            ..O.....
            XO......
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        let index = board.move_index(Side::Black);
        assert_eq!(index.destinations().as_slice(), &[loc(4, 3)]);
        assert_eq!(index.lines(loc(4, 3)).unwrap().len(), 2);

        let flipped = board.apply(&index, loc(4, 3)).unwrap();
        assert_eq!(flipped.as_slice(), locs(&[(3, 3), (4, 2)]).as_slice());
        assert_eq!(board.count(Side::White), 0);
        assert_eq!(board.count(Side::Black), 5);
    }

    #[test]
    fn apply_refuses_unindexed_and_stale() {
        let mut board = Board::new();
        let index = board.move_index(Side::Black);

        assert_eq!(
            board.apply(&index, loc(1, 1)),
            Err(ApplyError::NotIndexed { location: loc(1, 1) })
        );
        assert_eq!(board, Board::new());

        board.apply(&index, loc(3, 4)).unwrap();
        let after_first = board;
        assert_eq!(board.apply(&index, loc(4, 3)), Err(ApplyError::StaleIndex));
        assert_eq!(board, after_first);
    }

    #[test]
    fn outcome_only_when_both_sides_are_stuck() {
        assert_eq!(Board::new().outcome(), None);

        // White is stuck but Black can still capture.
        let board: Board = "
            XO......
            ........
            ........
            ........
            ........
            ........
            ........
            ........"
            .parse()
            .unwrap();
        assert!(board.legal_moves(Side::White).is_empty());
        assert_eq!(board.outcome(), None);
    }
}

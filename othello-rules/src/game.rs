//! Implements game-level Othello logic.
//!
//! For correctness, this higher-level interface is preferred: every request
//! goes through [`Game::play`], which re-derives legality from scratch and
//! checks for the end of the game after each placement.

use crate::board::Board;
use crate::index::MoveIndex;
use crate::location::{Location, LocationList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two sides in a game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Side {
    Black,
    White,
}

impl Default for Side {
    /// Gets the starting side (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Side {
    type Output = Self;

    /// Gets the other side.
    fn not(self) -> Self {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => f.write_str("black"),
            Side::White => f.write_str("white"),
        }
    }
}

#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "unknown side {:?}: expected \"black\" or \"white\"", token)]
pub struct ParseSideError {
    pub token: String,
}

/// Parse one of the canonical side tokens, ignoring case.
impl std::str::FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Side::Black),
            "white" => Ok(Side::White),
            _ => Err(ParseSideError {
                token: s.to_string(),
            }),
        }
    }
}

/// Piece counts for both sides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

/// How a finished game was decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Tie,
}

/// The final result of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameOver {
    pub outcome: Outcome,
    pub score: Score,
}

impl GameOver {
    pub fn winner(self) -> Option<Side> {
        match self.outcome {
            Outcome::Winner(side) => Some(side),
            Outcome::Tie => None,
        }
    }
}

/// The side with strictly more pieces wins; equal counts tie.
impl From<Score> for GameOver {
    fn from(score: Score) -> Self {
        let outcome = if score.black > score.white {
            Outcome::Winner(Side::Black)
        } else if score.white > score.black {
            Outcome::Winner(Side::White)
        } else {
            Outcome::Tie
        };
        Self { outcome, score }
    }
}

/// A move that was accepted and applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub side: Side,
    pub location: Location,
    /// Opponent pieces turned over by this move.
    pub flipped: LocationList,
    /// Set when this move left neither side with a legal move.
    pub game_over: Option<GameOver>,
}

/// The answer to a move request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Played(Placement),
    /// The destination was not legal. Carries the legal destinations;
    /// the board is unchanged.
    Rejected(LocationList),
}

impl Turn {
    pub fn is_played(&self) -> bool {
        matches!(self, Turn::Played(_))
    }
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    game_over: Option<GameOver>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary position. The end of the game is only
    /// detected after the next accepted move; see [`Game::evaluate`].
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            game_over: None,
        }
    }

    /// The sorted legal destinations for `side`.
    #[inline]
    pub fn available_positions(&self, side: Side) -> LocationList {
        self.board.legal_moves(side)
    }

    /// Build a fresh legal-move index for `side` against the current board.
    #[inline]
    pub fn move_index(&self, side: Side) -> MoveIndex {
        self.board.move_index(side)
    }

    /// Request that `side` plays at `loc`.
    ///
    /// Legality is recomputed from the current board on every call. A legal
    /// move is applied and followed by an end-of-game check; anything else is
    /// rejected with the legal destinations and leaves the board untouched.
    pub fn play(&mut self, side: Side, loc: Location) -> Turn {
        let index = self.board.move_index(side);
        match self.board.apply(&index, loc) {
            Ok(flipped) => Turn::Played(self.finish_move(side, loc, flipped)),
            Err(_) => Turn::Rejected(index.destinations()),
        }
    }

    /// Apply `loc` from an index the caller already holds.
    ///
    /// If the index does not list `loc`, or was generated for another
    /// position, the request is decided from scratch through [`Game::play`].
    pub fn apply_move(&mut self, index: &MoveIndex, loc: Location) -> Turn {
        match self.board.apply(index, loc) {
            Ok(flipped) => Turn::Played(self.finish_move(index.side(), loc, flipped)),
            Err(_) => self.play(index.side(), loc),
        }
    }

    fn finish_move(&mut self, side: Side, location: Location, flipped: LocationList) -> Placement {
        self.game_over = self.board.outcome();
        Placement {
            side,
            location,
            flipped,
            game_over: self.game_over,
        }
    }

    /// Check the current board for the end of the game without moving.
    #[inline]
    pub fn evaluate(&self) -> Option<GameOver> {
        self.board.outcome()
    }

    /// The result recorded by the last accepted move, if it ended the game.
    #[inline]
    pub fn game_over(&self) -> Option<GameOver> {
        self.game_over
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.game_over.is_some()
    }

    /// Get the winning side, if the game is finished and not a tie.
    pub fn winner(&self) -> Option<Side> {
        self.game_over.and_then(GameOver::winner)
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)?;
        if let Some(game_over) = self.game_over {
            write!(
                f,
                "\n(Game over: black {} white {})",
                game_over.score.black, game_over.score.white
            )?;
        }
        Ok(())
    }
}

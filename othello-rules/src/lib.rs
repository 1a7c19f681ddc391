//! `othello-rules` is the rules engine for Othello (Reversi).
//!
//! This package implements three levels of abstraction:
//!
//!  - [`Board`] holds the sentinel-bordered grid and implements the raw rules:
//!    occupancy scans, legal-move discovery and applying a [`MoveIndex`].
//!  - [`MoveIndex`] is the ephemeral result of a legal-move query: every
//!    destination together with the [`CaptureLine`]s that justify it.
//!  - [`Game`] is the high-level, safe turn contract. It re-derives legality
//!    for every request and detects the end of the game.

pub mod test_utils;

mod board;
mod game;
mod index;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use index::*;
pub use location::*;

/// The number of playable spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of cells on one edge of the grid, including the sentinel border.
pub const GRID_LENGTH: usize = EDGE_LENGTH + 2;

/// The number of playable spaces on an Othello board.
pub const NUM_SPACES: usize = EDGE_LENGTH * EDGE_LENGTH;

//! Reversi/Othello rules engine for square boards of even dimension N.
//!
//! # Board Layout
//!
//! ```text
//!       A B C D E F G H
//!    1  . . . . . . . .        (row, col) = (0, 0) is "A1"
//!    2  . . . . . . . .        (row, col) = (2, 3) is "D3"
//!    3  . . . . . . . .
//!    4  . . . O X . . .        k = N/2 - 1
//!    5  . . . X O . . .        (k,k), (k+1,k+1) start White
//!    6  . . . . . . . .        (k,k+1), (k+1,k) start Black
//!    7  . . . . . . . .
//!    8  . . . . . . . .
//! ```
//!
//! Cells are tri-state: 0 empty, +1 Black, -1 White. Black moves first.
//!
//! # Components (leaves first)
//!
//! - [`board`]: the N×N grid, read/write by coordinate
//! - [`scan`]: the 8 compass directions and ray walking
//! - [`validator`]: capture runs, legal targets, legal move sets
//! - [`engine`]: one full ply (place, flip, pass, game end)
//! - [`session`]: the public API consumed by UI and move-oracle callers
//!
//! A [`LegalMoveSet`] is always a pure function of (board, side to move); the
//! engine recomputes it after every mutation and never lets it drift.

#[cfg(feature = "wasm")]
pub mod wasm;

pub mod board;
pub mod config;
pub mod coord;
pub mod engine;
pub mod error;
pub mod scan;
pub mod session;
pub mod snapshot;
pub mod validator;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use board::{Board, Cell, MAX_DIMENSION, MIN_DIMENSION, STANDARD_DIMENSION};
pub use config::{CandidateScan, GameConfig};
pub use coord::Coord;
pub use engine::{Outcome, Ply, Score, TurnEngine, TurnResult, TurnState};
pub use error::{ConfigError, EngineError, NotationError, SnapshotError};
pub use scan::Direction;
pub use session::GameSession;
pub use snapshot::{OracleReply, PositionSnapshot};
pub use validator::{CaptureRun, Captures, LegalMoveSet};

/// The two sides. Black always moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }

    /// The cell value this side places.
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Side::Black => Cell::Black,
            Side::White => Cell::White,
        }
    }

    /// Signed turn marker used by the position exchange format (+1 / -1).
    #[inline]
    pub fn to_turn(self) -> i8 {
        match self {
            Side::Black => 1,
            Side::White => -1,
        }
    }

    /// Convert a signed turn marker back to a side.
    #[inline]
    pub fn from_turn(turn: i8) -> Option<Side> {
        match turn {
            1 => Some(Side::Black),
            -1 => Some(Side::White),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Side::Black => "Black",
            Side::White => "White",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Black.opponent(), Side::White);
        assert_eq!(Side::White.opponent(), Side::Black);
    }

    #[test]
    fn test_side_cell() {
        assert_eq!(Side::Black.cell(), Cell::Black);
        assert_eq!(Side::White.cell(), Cell::White);
    }

    #[test]
    fn test_side_turn_roundtrip() {
        for side in [Side::Black, Side::White] {
            assert_eq!(Side::from_turn(side.to_turn()), Some(side));
        }
        assert_eq!(Side::from_turn(0), None);
        assert_eq!(Side::from_turn(99), None);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Black.to_string(), "Black");
        assert_eq!(Side::White.to_string(), "White");
    }
}

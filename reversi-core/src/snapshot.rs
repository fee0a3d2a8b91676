//! Position exchange with a move oracle.
//!
//! A request lists occupied cells per side plus the side to move; the reply
//! names one target:
//!
//! ```text
//! request: {"blackFilled": [[3,4],[4,3]], "whiteFilled": [[3,3],[4,4]], "turn": 1}
//! reply:   {"move": [2,3]}
//! ```
//!
//! `turn` is +1 for Black and -1 for White. Replies may carry extra fields,
//! which are ignored.

use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;
use crate::{Board, Cell, Coord, Side};

/// Occupied cells per side plus the side to move.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    pub black_filled: Vec<[usize; 2]>,
    pub white_filled: Vec<[usize; 2]>,
    pub turn: i8,
}

impl PositionSnapshot {
    /// Capture a board, row-major within each side.
    pub fn capture(board: &Board, side: Side) -> PositionSnapshot {
        let pairs = |side: Side| -> Vec<[usize; 2]> {
            board
                .cells_of(side)
                .into_iter()
                .map(Coord::to_array)
                .collect()
        };
        PositionSnapshot {
            black_filled: pairs(Side::Black),
            white_filled: pairs(Side::White),
            turn: side.to_turn(),
        }
    }

    pub fn side(&self) -> Result<Side, SnapshotError> {
        Side::from_turn(self.turn).ok_or(SnapshotError::InvalidSide(self.turn))
    }

    /// Lay the pieces out on an otherwise empty N×N board.
    ///
    /// Every cell must be on the board and listed at most once across both sides.
    pub fn to_board(&self, dimension: usize) -> Result<Board, SnapshotError> {
        let mut board = Board::empty(dimension)?;
        let lists = [
            (&self.black_filled, Cell::Black),
            (&self.white_filled, Cell::White),
        ];

        for (pairs, cell) in lists {
            for &[row, col] in pairs {
                if !board.contains(row, col) {
                    return Err(SnapshotError::OutOfRange {
                        row,
                        col,
                        dimension,
                    });
                }
                let coord = Coord::new(row, col);
                if !board.at(coord).is_empty() {
                    return Err(SnapshotError::OverlappingPiece(coord));
                }
                board.put(coord, cell);
            }
        }
        Ok(board)
    }
}

/// A move oracle's answer.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct OracleReply {
    #[serde(rename = "move")]
    pub target: [usize; 2],
}

impl OracleReply {
    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::from_array(self.target)
    }
}

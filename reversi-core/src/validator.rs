//! Legality and capture geometry. Side-effect free.
//!
//! A target is legal for a side when, in at least one direction, the cells
//! beyond it form a non-empty run of opponent pieces closed by one of the
//! side's own pieces:
//!
//! ```text
//!   target  opp  opp  own        -> run of 2, valid
//!   target  own                  -> zero-length run, invalid
//!   target  opp  opp  .          -> ends on empty, invalid
//!   target  opp  opp  |edge      -> leaves the board, invalid
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::config::CandidateScan;
use crate::scan::{self, Direction};
use crate::{Board, Cell, Coord, Side};

/// Opponent cells that flip along one direction, nearest first.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct CaptureRun {
    pub direction: Direction,
    pub cells: Vec<Coord>,
}

/// Every capture run produced by placing on one target.
///
/// Runs lie on distinct rays from the target, so no coordinate appears twice.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize)]
pub struct Captures {
    runs: Vec<CaptureRun>,
}

impl Captures {
    /// Runs in [`Direction::ALL`] order.
    pub fn runs(&self) -> &[CaptureRun] {
        &self.runs
    }

    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        self.runs.iter().map(|run| run.direction)
    }

    /// Union of all runs.
    pub fn flipped(&self) -> impl Iterator<Item = Coord> + '_ {
        self.runs.iter().flat_map(|run| run.cells.iter().copied())
    }

    pub fn flip_count(&self) -> usize {
        self.runs.iter().map(|run| run.cells.len()).sum()
    }
}

/// Legal targets for one side on one board, in row-major order.
///
/// Derived data: rebuild it with [`all_legal_moves`] after any change to the
/// board or the side to move.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LegalMoveSet {
    moves: BTreeMap<Coord, Captures>,
}

impl LegalMoveSet {
    pub fn get(&self, target: Coord) -> Option<&Captures> {
        self.moves.get(&target)
    }

    pub fn contains(&self, target: Coord) -> bool {
        self.moves.contains_key(&target)
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Legal targets, row-major.
    pub fn targets(&self) -> impl Iterator<Item = Coord> + '_ {
        self.moves.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Captures)> + '_ {
        self.moves.iter().map(|(&target, captures)| (target, captures))
    }
}

/// Walk from one step beyond `origin` along `dir`, collecting opponent cells.
///
/// Returns the run only when it is non-empty and closed by a cell of `side`
/// while still on the board.
pub fn scan_direction(board: &Board, origin: Coord, dir: Direction, side: Side) -> Option<CaptureRun> {
    if !origin.is_within(board.dimension()) {
        return None;
    }

    let own = side.cell();
    let mut cells = Vec::new();

    for coord in scan::ray(origin, dir, board.dimension()) {
        match board.at(coord) {
            Cell::Empty => return None,
            cell if cell == own => {
                if cells.is_empty() {
                    return None;
                }
                return Some(CaptureRun { direction: dir, cells });
            }
            _ => cells.push(coord),
        }
    }

    // Walked off the board without closing the run.
    None
}

/// Evaluate one target. Returns its captures if placing there is legal.
///
/// The target must be an empty cell on the board.
pub fn legal_target(board: &Board, target: Coord, side: Side) -> Option<Captures> {
    if !target.is_within(board.dimension()) || !board.at(target).is_empty() {
        return None;
    }

    let runs: Vec<CaptureRun> = Direction::ALL
        .into_iter()
        .filter_map(|dir| scan_direction(board, target, dir, side))
        .collect();

    if runs.is_empty() {
        None
    } else {
        Some(Captures { runs })
    }
}

/// Build the complete legal move set for `side`.
pub fn all_legal_moves(board: &Board, side: Side, candidates: CandidateScan) -> LegalMoveSet {
    let targets: BTreeSet<Coord> = match candidates {
        CandidateScan::Adjacent => board
            .occupied_cells()
            .into_iter()
            .flat_map(|(coord, _)| board.empty_neighbors(coord))
            .collect(),
        CandidateScan::Exhaustive => board
            .coords()
            .filter(|&coord| board.at(coord).is_empty())
            .collect(),
    };

    let moves = targets
        .into_iter()
        .filter_map(|target| legal_target(board, target, side).map(|captures| (target, captures)))
        .collect();

    LegalMoveSet { moves }
}

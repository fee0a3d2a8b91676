//! The N×N grid of cells.
//!
//! Cells are stored row-major in a flat vector:
//!
//! ```text
//! index = row * N + col
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::scan;
use crate::{Coord, Side};

/// Smallest supported board.
pub const MIN_DIMENSION: usize = 4;
/// Largest supported board (one column letter per column).
pub const MAX_DIMENSION: usize = 26;
/// Standard tournament board.
pub const STANDARD_DIMENSION: usize = 8;

/// Contents of one square.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Tri-state value: 0 empty, +1 Black, -1 White.
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Black => 1,
            Cell::White => -1,
        }
    }

    #[inline]
    pub fn from_value(value: i8) -> Option<Cell> {
        match value {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Black),
            -1 => Some(Cell::White),
            _ => None,
        }
    }

    /// The side owning this cell, if any.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Side::Black),
            Cell::White => Some(Side::White),
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'X',
            Cell::White => 'O',
        }
    }
}

/// Square board of even dimension.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create the starting position: four center cells seeded, the rest empty.
    pub fn new(dimension: usize) -> Result<Board, EngineError> {
        Board::validate_dimension(dimension)?;
        Ok(Board::seeded(dimension))
    }

    /// Create a board with every cell empty (for restoring arbitrary positions).
    pub fn empty(dimension: usize) -> Result<Board, EngineError> {
        Board::validate_dimension(dimension)?;
        Ok(Board {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        })
    }

    /// Check that N is even and within [MIN_DIMENSION, MAX_DIMENSION].
    pub fn validate_dimension(dimension: usize) -> Result<(), EngineError> {
        if dimension % 2 != 0 || !(MIN_DIMENSION..=MAX_DIMENSION).contains(&dimension) {
            return Err(EngineError::InvalidDimension(dimension));
        }
        Ok(())
    }

    fn seeded(dimension: usize) -> Board {
        let mut board = Board {
            dimension,
            cells: vec![Cell::Empty; dimension * dimension],
        };
        let k = dimension / 2 - 1;
        board.put(Coord::new(k, k), Cell::White);
        board.put(Coord::new(k, k + 1), Cell::Black);
        board.put(Coord::new(k + 1, k), Cell::Black);
        board.put(Coord::new(k + 1, k + 1), Cell::White);
        board
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Check if (row, col) lies on the board.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }

    #[inline]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(coord.is_within(self.dimension));
        coord.row * self.dimension + coord.col
    }

    fn check(&self, row: usize, col: usize) -> Result<Coord, EngineError> {
        if self.contains(row, col) {
            Ok(Coord::new(row, col))
        } else {
            Err(EngineError::OutOfRange {
                row,
                col,
                dimension: self.dimension,
            })
        }
    }

    /// Read a cell.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, EngineError> {
        let coord = self.check(row, col)?;
        Ok(self.at(coord))
    }

    /// Write a cell.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), EngineError> {
        let coord = self.check(row, col)?;
        self.put(coord, cell);
        Ok(())
    }

    /// Read a coordinate already known to be on the board.
    #[inline]
    pub(crate) fn at(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Write a coordinate already known to be on the board.
    #[inline]
    pub(crate) fn put(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Empty on-board neighbors of (row, col).
    ///
    /// Only empty cells next to a piece can ever be legal targets, so this
    /// narrows the search; it is never needed for correctness.
    pub fn neighbor_candidates(&self, row: usize, col: usize) -> Result<Vec<Coord>, EngineError> {
        let coord = self.check(row, col)?;
        Ok(self.empty_neighbors(coord).collect())
    }

    pub(crate) fn empty_neighbors(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        scan::neighbors(coord, self.dimension).filter(move |&n| self.at(n).is_empty())
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let dimension = self.dimension;
        (0..dimension * dimension).map(move |i| Coord::new(i / dimension, i % dimension))
    }

    /// All non-empty cells, row-major.
    pub fn occupied_cells(&self) -> Vec<(Coord, Cell)> {
        self.coords()
            .map(|coord| (coord, self.at(coord)))
            .filter(|(_, cell)| !cell.is_empty())
            .collect()
    }

    /// Coordinates held by one side, row-major.
    pub fn cells_of(&self, side: Side) -> Vec<Coord> {
        let target = side.cell();
        self.coords().filter(|&c| self.at(c) == target).collect()
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Text rendering with `*` on each marked empty cell.
    pub fn render_marked(&self, marked: &[Coord]) -> String {
        let mut out = String::with_capacity((self.dimension + 2) * (self.dimension * 2 + 5));

        out.push_str("   ");
        for col in 0..self.dimension {
            out.push(' ');
            out.push((b'A' + col as u8) as char);
        }
        out.push('\n');

        for row in 0..self.dimension {
            out.push_str(&format!("{:>3}", row + 1));
            for col in 0..self.dimension {
                let coord = Coord::new(row, col);
                let cell = self.at(coord);
                let symbol = if cell.is_empty() && marked.contains(&coord) {
                    '*'
                } else {
                    cell.symbol()
                };
                out.push(' ');
                out.push(symbol);
            }
            out.push('\n');
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::seeded(STANDARD_DIMENSION)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_marked(&[]))
    }
}

//! Board coordinates and algebraic notation.
//!
//! ```text
//! (row, col) -> "<column letter><row + 1>"
//!   (0, 0) -> "A1"   top-left corner
//!   (0, 7) -> "H1"   top-right corner on 8x8
//!   (2, 3) -> "D3"
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NotationError;

/// A cell address. Row 0 is the top edge, column 0 the left edge.
///
/// Ordering is row-major, which is the iteration order of every derived
/// collection in this crate.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub const fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    /// Step by a signed delta. Returns None when the result leaves an N×N board.
    #[inline]
    pub fn offset(self, d_row: isize, d_col: isize, dimension: usize) -> Option<Coord> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        if row < dimension && col < dimension {
            Some(Coord { row, col })
        } else {
            None
        }
    }

    /// Check if this coordinate lies on an N×N board.
    #[inline]
    pub fn is_within(self, dimension: usize) -> bool {
        self.row < dimension && self.col < dimension
    }

    /// `[row, col]`, the pair layout of the position exchange format.
    #[inline]
    pub fn to_array(self) -> [usize; 2] {
        [self.row, self.col]
    }

    #[inline]
    pub fn from_array(pair: [usize; 2]) -> Coord {
        Coord::new(pair[0], pair[1])
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Coord {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.col < 26 {
            let letter = (b'A' + self.col as u8) as char;
            write!(f, "{}{}", letter, self.row + 1)
        } else {
            write!(f, "({}, {})", self.row, self.col)
        }
    }
}

impl FromStr for Coord {
    type Err = NotationError;

    /// Parse "D3" (case-insensitive). Range against a board is the caller's check.
    fn from_str(s: &str) -> Result<Coord, NotationError> {
        let s = s.trim();
        let letter = s.chars().next().ok_or(NotationError::Empty)?;
        if !letter.is_ascii_alphabetic() {
            return Err(NotationError::InvalidColumn(letter));
        }
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;

        let digits = &s[letter.len_utf8()..];
        let row: usize = digits
            .parse()
            .map_err(|_| NotationError::InvalidRow(digits.to_string()))?;
        if row == 0 {
            return Err(NotationError::InvalidRow(digits.to_string()));
        }

        Ok(Coord::new(row - 1, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_corners() {
        assert_eq!(Coord::new(0, 0).to_string(), "A1");
        assert_eq!(Coord::new(0, 7).to_string(), "H1");
        assert_eq!(Coord::new(7, 0).to_string(), "A8");
        assert_eq!(Coord::new(7, 7).to_string(), "H8");
    }

    #[test]
    fn test_parse_notation() {
        assert_eq!("D3".parse::<Coord>(), Ok(Coord::new(2, 3)));
        assert_eq!("c4".parse::<Coord>(), Ok(Coord::new(3, 2)));
        assert_eq!(" f5 ".parse::<Coord>(), Ok(Coord::new(4, 5)));
        assert_eq!("Z26".parse::<Coord>(), Ok(Coord::new(25, 25)));
    }

    #[test]
    fn test_parse_notation_errors() {
        assert_eq!("".parse::<Coord>(), Err(NotationError::Empty));
        assert_eq!("3D".parse::<Coord>(), Err(NotationError::InvalidColumn('3')));
        assert_eq!(
            "D0".parse::<Coord>(),
            Err(NotationError::InvalidRow("0".to_string()))
        );
        assert_eq!(
            "Dx".parse::<Coord>(),
            Err(NotationError::InvalidRow("x".to_string()))
        );
    }

    #[test]
    fn test_notation_roundtrip() {
        for row in 0..8 {
            for col in 0..8 {
                let coord = Coord::new(row, col);
                assert_eq!(coord.to_string().parse::<Coord>(), Ok(coord));
            }
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0, 8), None);
        assert_eq!(corner.offset(0, -1, 8), None);
        assert_eq!(corner.offset(1, 1, 8), Some(Coord::new(1, 1)));

        let far = Coord::new(7, 7);
        assert_eq!(far.offset(1, 0, 8), None);
        assert_eq!(far.offset(0, 1, 8), None);
        assert_eq!(far.offset(-1, -1, 8), Some(Coord::new(6, 6)));
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Coord::new(0, 7) < Coord::new(1, 0));
        assert!(Coord::new(2, 3) < Coord::new(2, 4));
    }
}

//! The eight compass directions and ray walking across an N×N board.
//!
//! Everything here is a pure function of its arguments.

use serde::{Deserialize, Serialize};

use crate::Coord;

/// One of the eight compass directions. North is toward row 0.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(d_row, d_col)` for one step in this direction.
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Inverse of [`Direction::delta`]. `(0, 0)` and non-unit steps have no direction.
    pub fn from_delta(d_row: isize, d_col: isize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|dir| dir.delta() == (d_row, d_col))
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
        }
    }
}

/// The neighbor of `from` in `dir`, if it lies on the board.
#[inline]
pub fn step(from: Coord, dir: Direction, dimension: usize) -> Option<Coord> {
    let (d_row, d_col) = dir.delta();
    from.offset(d_row, d_col, dimension)
}

/// Cells strictly beyond `origin` along `dir`, up to the board edge.
pub fn ray(origin: Coord, dir: Direction, dimension: usize) -> Ray {
    Ray {
        next: step(origin, dir, dimension),
        dir,
        dimension,
    }
}

/// Iterator returned by [`ray`].
#[derive(Clone, Debug)]
pub struct Ray {
    next: Option<Coord>,
    dir: Direction,
    dimension: usize,
}

impl Iterator for Ray {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        self.next = step(current, self.dir, self.dimension);
        Some(current)
    }
}

/// The up-to-8 on-board neighbors of `origin`, in [`Direction::ALL`] order.
pub fn neighbors(origin: Coord, dimension: usize) -> impl Iterator<Item = Coord> {
    Direction::ALL
        .into_iter()
        .filter_map(move |dir| step(origin, dir, dimension))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_distinct_unit_steps() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            let (dr, dc) = a.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1 && (dr, dc) != (0, 0));
            for b in &Direction::ALL[i + 1..] {
                assert_ne!(a.delta(), b.delta());
            }
        }
    }

    #[test]
    fn test_from_delta() {
        assert_eq!(Direction::from_delta(-1, 0), Some(Direction::North));
        assert_eq!(Direction::from_delta(1, -1), Some(Direction::SouthWest));
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_ray_stops_at_edge() {
        let cells: Vec<Coord> = ray(Coord::new(2, 3), Direction::North, 8).collect();
        assert_eq!(cells, vec![Coord::new(1, 3), Coord::new(0, 3)]);

        let cells: Vec<Coord> = ray(Coord::new(5, 5), Direction::SouthEast, 8).collect();
        assert_eq!(cells, vec![Coord::new(6, 6), Coord::new(7, 7)]);
    }

    #[test]
    fn test_ray_from_edge_is_empty() {
        assert_eq!(ray(Coord::new(0, 4), Direction::North, 8).count(), 0);
        assert_eq!(ray(Coord::new(7, 7), Direction::East, 8).count(), 0);
    }

    #[test]
    fn test_neighbor_counts() {
        assert_eq!(neighbors(Coord::new(0, 0), 8).count(), 3);
        assert_eq!(neighbors(Coord::new(0, 4), 8).count(), 5);
        assert_eq!(neighbors(Coord::new(4, 4), 8).count(), 8);
    }
}

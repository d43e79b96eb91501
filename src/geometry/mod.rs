use std::fmt;

use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(r1: T, c1: T, r2: T, c2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (r1 - r2).abs() + (c1 - c2).abs()
}

/// Chebyshev distance
/// Exact shortest-path distance on a grid with unit-cost 8-directional moves,
/// admissible for diagonal costs between 1 and sqrt(2)
pub fn chebyshev_distance<T>(r1: T, c1: T, r2: T, c2: T) -> T
where
    T: Num + Copy + Signed + Ord,
    {
    (r1 - r2).abs().max((c1 - c2).abs())
}


/// Cell position on a grid, (row, column) order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance to another coordinate
    pub fn chebyshev(&self, other: &Coordinate) -> usize {
        chebyshev_distance(
            self.row as i64,
            self.col as i64,
            other.row as i64,
            other.col as i64,
        ) as usize
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

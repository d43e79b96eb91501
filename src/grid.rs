use std::fmt;

use crate::errors::{PlannerError, Result};
use crate::geometry::Coordinate;


/// Cost of a diagonal step between adjacent cells
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of a straight (horizontal or vertical) step
pub const STRAIGHT_COST: f64 = 1.0;

/// Neighbor offsets as (row, col) deltas, straight moves before diagonals
/// Enumeration order is fixed so equal-cost searches stay reproducible
const OFFSETS: [(i64, i64); 8] = [
    (-1, 0), (1, 0), (0, -1), (0, 1),
    (-1, -1), (-1, 1), (1, -1), (1, 1),
];


/// Immutable occupancy map over a bounded (row, column) space
/// Built once from an obstacle mask and never mutated afterwards,
/// so it can be shared by reference across concurrent searches
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    cols: usize,
    blocked: Vec<bool>, // row-major, true = obstacle
}

impl Grid {

    /// Create a grid from a row-major obstacle mask
    /// Fails if the cell count doesn't match the given dimensions
    pub fn from_cells(rows: usize, cols: usize, blocked: Vec<bool>) -> Result<Self> {
        if blocked.len() != rows * cols {
            return Err(PlannerError::Parse(format!(
                "occupancy mask has {} cells, expected {}x{}",
                blocked.len(),
                rows,
                cols
            )));
        }
        Ok(Self { rows, cols, blocked })
    }

    /// Parse a grid from lines of `1` (obstacle) and `0` (free) characters
    /// Inverse of the `Display` rendering
    pub fn from_ascii(text: &str) -> Result<Self> {
        let mut blocked = Vec::new();
        let mut cols = None;
        let mut rows = 0;
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match cols {
                None => cols = Some(line.len()),
                Some(c) if c != line.len() => {
                    return Err(PlannerError::Parse(format!(
                        "grid row {} has {} cells, expected {}",
                        rows,
                        line.len(),
                        c
                    )));
                }
                Some(_) => {}
            }
            for ch in line.chars() {
                match ch {
                    '1' => blocked.push(true),
                    '0' => blocked.push(false),
                    other => {
                        return Err(PlannerError::Parse(format!(
                            "unexpected grid character {other:?}"
                        )));
                    }
                }
            }
            rows += 1;
        }
        Self::from_cells(rows, cols.unwrap_or(0), blocked)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// True iff the coordinate is in-bounds and not an obstacle
    /// Out-of-bounds coordinates are never free
    pub fn is_free(&self, coord: Coordinate) -> bool {
        coord.row < self.rows && coord.col < self.cols && !self.blocked[self.idx(coord)]
    }

    /// In-bounds free cells adjacent to `coord`, paired with the step cost
    /// to reach them: 1 for straight moves, sqrt(2) for diagonals
    /// Yields at most 8 cells, in the fixed `OFFSETS` order
    pub fn neighbors(&self, coord: Coordinate) -> Vec<(Coordinate, f64)> {
        let mut out = Vec::with_capacity(OFFSETS.len());
        for (dr, dc) in OFFSETS {
            let nr = coord.row as i64 + dr;
            let nc = coord.col as i64 + dc;
            if nr < 0 || nc < 0 {
                continue;
            }
            let neighbor = Coordinate::new(nr as usize, nc as usize);
            if !self.is_free(neighbor) {
                continue;
            }
            let cost = if dr != 0 && dc != 0 {
                DIAGONAL_COST
            } else {
                STRAIGHT_COST
            };
            out.push((neighbor, cost));
        }
        out
    }

    fn idx(&self, coord: Coordinate) -> usize {
        coord.row * self.cols + coord.col
    }
}

impl fmt::Display for Grid {
    /// Render row-major as `1` (obstacle) / `0` (free), no separators
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.blocked.chunks(self.cols) {
            for &cell in row {
                write!(f, "{}", if cell { '1' } else { '0' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

//! Geometry primitives: the [`Cell`] grid coordinate.

use std::fmt;
use std::ops::{Add, Sub};

/// A grid position as an integer (column, row) pair. Columns grow right,
/// rows grow down (screen coordinates).
///
/// Equality is component-wise. Valid cells of an N×N grid satisfy
/// `0 <= col < N` and `0 <= row < N`; `Cell` itself places no such
/// restriction, bounds are checked where cells meet a grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { col: 0, row: 0 };

    /// Create a new cell.
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Return a cell shifted by (dcol, drow).
    #[inline]
    pub const fn shift(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Cell {
    /// Row-major ordering: by row, then by column.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl Add for Cell {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for Cell {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.col - rhs.col, self.row - rhs.row)
    }
}

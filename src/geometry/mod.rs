mod adjacency;

pub use adjacency::adjacents;
pub(crate) use adjacency::in_bounds;

use std::fmt;

use num_traits::{Num, Signed};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// Grid coordinate
/// Cells are plain values: compared and copied, never mutated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub column: i32,
    pub row: i32,
}

impl Cell {

    /// Reserved sentinel for "no parent"
    pub const INVALID: Cell = Cell { column: -1, row: -1 };

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// False only for the sentinel
    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }

    /// Number of orthogonal steps between two cells
    /// Widened so any two cells, however far apart, have a distance
    pub fn manhattan(&self, other: &Cell) -> u64 {
        u64::from(self.column.abs_diff(other.column)) + u64::from(self.row.abs_diff(other.row))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(col {}, row {})", self.column, self.row)
    }
}

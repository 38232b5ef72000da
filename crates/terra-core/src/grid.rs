//! The [`TerrainGrid`] type — an N×N row-major map from [`Cell`] to
//! [`Terrain`].
//!
//! A grid is plain owned storage: mutable while being authored, and
//! treated as read-only for the duration of a search. Accessors perform
//! no bounds validation of their own (out-of-range access is a
//! programming error); endpoint bounds are checked once at the search
//! boundary instead.

use crate::geom::Cell;
use crate::terrain::Terrain;

/// A fixed-size square terrain map.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    size: usize,
    cells: Vec<Terrain>,
}

impl TerrainGrid {
    /// Create a new `size`×`size` grid filled with [`Terrain::Air`].
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Terrain::Air; size * size],
        }
    }

    /// Build a grid from row-major rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not form a square.
    pub fn from_rows(rows: &[Vec<Terrain>]) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|r| r.len() == size),
            "terrain rows must form a square grid"
        );
        Self {
            size,
            cells: rows.iter().flatten().copied().collect(),
        }
    }

    /// Side length N of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has zero cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `cell` lies within `[0, N)×[0, N)`.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && (cell.col as usize) < self.size
            && (cell.row as usize) < self.size
    }

    /// Row-major 2D→1D index: `row * N + col`, bijective into `[0, N²)`
    /// for in-bounds cells. Callers must pass an in-bounds cell.
    #[inline]
    pub fn idx(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "cell {cell} out of grid bounds");
        (cell.row as usize) * self.size + (cell.col as usize)
    }

    /// The terrain at `cell`. Callers must pass an in-bounds cell.
    #[inline]
    pub fn at(&self, cell: Cell) -> Terrain {
        self.cells[self.idx(cell)]
    }

    /// Set the terrain at `cell`. Callers must pass an in-bounds cell.
    #[inline]
    pub fn set(&mut self, cell: Cell, terrain: Terrain) {
        let i = self.idx(cell);
        self.cells[i] = terrain;
    }

    /// Fill every cell with `terrain`.
    pub fn fill(&mut self, terrain: Terrain) {
        self.cells.fill(terrain);
    }

    /// Row-major iterator over `(cell, terrain)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, Terrain)> + '_ {
        self.cells.iter().enumerate().map(|(i, t)| {
            let cell = Cell::new((i % self.size) as i32, (i / self.size) as i32);
            (cell, *t)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_air() {
        let grid = TerrainGrid::new(4);
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.len(), 16);
        assert!(grid.iter().all(|(_, t)| t == Terrain::Air));
    }

    #[test]
    fn set_and_at() {
        let mut grid = TerrainGrid::new(3);
        grid.set(Cell::new(2, 1), Terrain::Water);
        assert_eq!(grid.at(Cell::new(2, 1)), Terrain::Water);
        assert_eq!(grid.at(Cell::new(1, 2)), Terrain::Air);
    }

    #[test]
    fn idx_is_row_major() {
        let grid = TerrainGrid::new(10);
        assert_eq!(grid.idx(Cell::new(0, 0)), 0);
        assert_eq!(grid.idx(Cell::new(9, 0)), 9);
        assert_eq!(grid.idx(Cell::new(0, 1)), 10);
        assert_eq!(grid.idx(Cell::new(3, 7)), 73);
    }

    #[test]
    fn idx_is_bijective() {
        let grid = TerrainGrid::new(5);
        let mut seen = vec![false; grid.len()];
        for (cell, _) in grid.iter() {
            let i = grid.idx(cell);
            assert!(!seen[i]);
            seen[i] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn contains_bounds() {
        let grid = TerrainGrid::new(10);
        assert!(grid.contains(Cell::new(0, 0)));
        assert!(grid.contains(Cell::new(9, 9)));
        assert!(!grid.contains(Cell::new(10, 0)));
        assert!(!grid.contains(Cell::new(0, 10)));
        assert!(!grid.contains(Cell::new(-1, 3)));
        assert!(!grid.contains(Cell::new(3, -1)));
    }

    #[test]
    fn from_rows_round_trip() {
        use Terrain::*;
        let grid = TerrainGrid::from_rows(&[
            vec![Air, Grass],
            vec![Mud, Mountain],
        ]);
        assert_eq!(grid.size(), 2);
        assert_eq!(grid.at(Cell::new(1, 0)), Grass);
        assert_eq!(grid.at(Cell::new(0, 1)), Mud);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn from_rows_rejects_ragged() {
        TerrainGrid::from_rows(&[vec![Terrain::Air], vec![]]);
    }

    #[test]
    fn fill_replaces_everything() {
        let mut grid = TerrainGrid::new(3);
        grid.fill(Terrain::Mud);
        assert!(grid.iter().all(|(_, t)| t == Terrain::Mud));
    }
}

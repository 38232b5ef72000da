use terra_core::{Cell, TerrainGrid};

/// Cached 8-way neighbor enumeration.
///
/// Produces the in-bounds cells of the 3×3 block around a cell,
/// excluding the cell itself, in row-major scan order. The scratch
/// buffer is reused across calls.
pub struct Neighbors {
    buf: Vec<Cell>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// The at-most-8 neighbors of `cell` that lie within `grid`.
    pub fn around(&mut self, cell: Cell, grid: &TerrainGrid) -> &[Cell] {
        self.buf.clear();
        for drow in -1..=1 {
            for dcol in -1..=1 {
                if dcol == 0 && drow == 0 {
                    continue;
                }
                let n = cell.shift(dcol, drow);
                if grid.contains(n) {
                    self.buf.push(n);
                }
            }
        }
        &self.buf
    }
}

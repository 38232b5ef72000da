use terra_core::Cell;

/// Manhattan (grid-aligned, L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> f32 {
    ((b.col - a.col).abs() + (b.row - a.row).abs()) as f32
}

/// Euclidean (straight-line, L2) distance between two cells.
#[inline]
pub fn euclidean(a: Cell, b: Cell) -> f32 {
    let dcol = (b.col - a.col) as f32;
    let drow = (b.row - a.row) as f32;
    (dcol * dcol + drow * drow).sqrt()
}

/// The distance metric a search uses for both its step cost and its
/// heuristic.
///
/// A single invocation never mixes metrics: the same choice feeds the
/// g and h terms throughout. Note that the Manhattan metric is not an
/// admissible heuristic once diagonal steps are allowed; that trade-off
/// is intentional and kept for compatibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    Manhattan,
    Euclidean,
}

impl Metric {
    /// Distance from `a` to `b` under this metric.
    #[inline]
    pub fn between(self, a: Cell, b: Cell) -> f32 {
        match self {
            Metric::Manhattan => manhattan(a, b),
            Metric::Euclidean => euclidean(a, b),
        }
    }
}

use terra_core::Cell;
use thiserror::Error;

/// Errors surfaced by [`find_path`](crate::find_path).
///
/// Both variants are reported to the immediate caller; nothing is
/// swallowed internally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// A search endpoint lies outside the grid.
    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Cell, size: usize },
    /// The frontier emptied before the goal was reached.
    #[error("no path from {start} to {end}")]
    NotFound { start: Cell, end: Cell },
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_error_round_trip() {
        let e = PathError::NotFound {
            start: Cell::new(1, 1),
            end: Cell::new(8, 8),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: PathError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = PathError::OutOfBounds {
            cell: Cell::new(12, 3),
            size: 10,
        };
        assert_eq!(e.to_string(), "cell (12, 3) lies outside the 10x10 grid");

        let e = PathError::NotFound {
            start: Cell::new(1, 1),
            end: Cell::new(8, 8),
        };
        assert_eq!(e.to_string(), "no path from (1, 1) to (8, 8)");
    }
}

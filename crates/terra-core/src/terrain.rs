//! Terrain codes and the traversal-cost configuration.

use std::fmt;

/// The terrain type occupying a grid cell.
///
/// The discriminant order matches the parallel cost table in
/// [`CostTable`]; keep the two in sync when adding variants.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(usize)]
pub enum Terrain {
    #[default]
    Air = 0,
    Grass = 1,
    Water = 2,
    Mud = 3,
    Mountain = 4,
}

impl Terrain {
    /// Number of terrain variants.
    pub const COUNT: usize = 5;

    /// All variants, in cost-table order.
    pub const ALL: [Terrain; Self::COUNT] = [
        Terrain::Air,
        Terrain::Grass,
        Terrain::Water,
        Terrain::Mud,
        Terrain::Mountain,
    ];
}

impl fmt::Display for Terrain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Terrain::Air => "air",
            Terrain::Grass => "grass",
            Terrain::Water => "water",
            Terrain::Mud => "mud",
            Terrain::Mountain => "mountain",
        };
        write!(f, "{name}")
    }
}

/// Read-only mapping from [`Terrain`] to a non-negative traversal cost.
///
/// The table is injected into the search rather than read from static
/// state, so alternative costings can be tested in isolation. Costs are
/// static configuration: nothing mutates a table after construction.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostTable {
    costs: [f32; Terrain::COUNT],
}

impl Default for CostTable {
    /// The standard table: air 0, grass 10, water 25, mud 50,
    /// mountain 100.
    fn default() -> Self {
        Self {
            costs: [0.0, 10.0, 25.0, 50.0, 100.0],
        }
    }
}

impl CostTable {
    /// Build a table from per-terrain costs, in [`Terrain::ALL`] order.
    ///
    /// # Panics
    ///
    /// Panics if any cost is negative or not finite.
    pub fn new(costs: [f32; Terrain::COUNT]) -> Self {
        assert!(
            costs.iter().all(|c| c.is_finite() && *c >= 0.0),
            "terrain costs must be finite and non-negative"
        );
        Self { costs }
    }

    /// The traversal cost of entering a cell of the given terrain.
    #[inline]
    pub fn cost(&self, terrain: Terrain) -> f32 {
        self.costs[terrain as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_reference() {
        let table = CostTable::default();
        assert_eq!(table.cost(Terrain::Air), 0.0);
        assert_eq!(table.cost(Terrain::Grass), 10.0);
        assert_eq!(table.cost(Terrain::Water), 25.0);
        assert_eq!(table.cost(Terrain::Mud), 50.0);
        assert_eq!(table.cost(Terrain::Mountain), 100.0);
    }

    #[test]
    fn custom_table() {
        let table = CostTable::new([0.0, 1.0, 2.0, 3.0, 4.0]);
        for (i, t) in Terrain::ALL.iter().enumerate() {
            assert_eq!(table.cost(*t), i as f32);
        }
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn negative_cost_rejected() {
        CostTable::new([0.0, -1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn discriminants_match_table_order() {
        for (i, t) in Terrain::ALL.iter().enumerate() {
            assert_eq!(*t as usize, i);
        }
    }
}

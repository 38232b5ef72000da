//! **terra-core** — Terrain-grid pathfinding core types.
//!
//! This crate provides the foundational types used across the *terra*
//! workspace: the [`Cell`] coordinate type, [`Terrain`] codes, the
//! injected [`CostTable`] configuration, and the [`TerrainGrid`] model.

pub mod geom;
pub mod grid;
pub mod terrain;

pub use geom::Cell;
pub use grid::TerrainGrid;
pub use terrain::{CostTable, Terrain};

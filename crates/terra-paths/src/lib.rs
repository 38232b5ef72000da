//! Pathfinding for terrain grids.
//!
//! This crate computes shortest-cost paths between two cells of a
//! [`TerrainGrid`](terra_core::TerrainGrid), where each cell's terrain
//! contributes an additive traversal cost:
//!
//! - **A\*** shortest-path search ([`find_path`])
//! - Distance metrics ([`manhattan`], [`euclidean`], selected per
//!   invocation via [`Metric`])
//! - 8-way neighbor enumeration ([`Neighbors`])
//!
//! Each [`find_path`] call owns its own ephemeral bookkeeping, so the
//! engine is stateless between invocations and safe to call from
//! multiple threads against read-only grids.

mod astar;
mod distance;
mod error;
mod neighbors;
mod node;

pub use astar::find_path;
pub use distance::{Metric, euclidean, manhattan};
pub use error::PathError;
pub use neighbors::Neighbors;

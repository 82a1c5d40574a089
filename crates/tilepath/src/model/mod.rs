//! Puzzle data model (rotations, tiles, paths, levels).
//!
//! Purpose
//! - Keep the model small and explicit: indices for identity, positions only
//!   for load-time adjacency matching, and a single mutable field
//!   (`Tile::rotation`) committed by the interactive collaborator.
//!
//! Slot vs local index
//! - A *slot* is a boundary position fixed in space; a *local* index names a
//!   point of the tile itself and turns with it. One 90° step shifts the
//!   mapping by a quarter of the point count, so on the standard eight-point
//!   tile the local pair {2,3} occupies the slots where {0,1} sat after one
//!   turn. `Tile::local_point` / `Tile::slot_of` convert between the two.

pub mod rand;

mod level;
mod types;

pub use level::{Level, TileId};
pub use types::{ConnectionPoint, ModelCfg, Rotation, Tile, TilePath};

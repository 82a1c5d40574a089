//! Solvability search: adjacency links, finishing registry, rotation-aware DFS.
//!
//! Purpose
//! - Answer "is a winning path reachable from the start?" for a level,
//!   trying every 90° rotation of every visited tile, with a tile+rotation
//!   cycle guard and a capped diagnostic log of every path explored.
//!
//! Why this design
//! - Adjacency is resolved once into a slot-level partner table (`links`),
//!   so the search itself never compares coordinates.
//! - Trial rotations live in a per-invocation vector; the level is borrowed
//!   immutably and repeated checks are side-effect-free.

mod dfs;
mod finishing;
mod links;
mod types;

pub use dfs::{check_level, check_level_with_defaults};
pub use finishing::{winning_pair, FinishingRegistry};
pub use links::{build_links, Links};
pub use types::{Attempt, SearchCfg, SolveReport};

#[cfg(test)]
mod tests;

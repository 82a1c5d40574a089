//! Tile-path puzzle model and design-time solvability checking.
//!
//! The model (`model`) is a small indexed tile/path structure; the solver
//! (`solver`) runs a depth-first, rotation-aware search from the level's
//! starting point and reports whether a winning exit is reachable, together
//! with every path it explored along the way.
//!
//! Rendering, input handling, and puzzle-definition persistence are external
//! collaborators; this crate is invoked in-process with an already-built
//! `Level` and never performs I/O.

pub mod model;
pub mod solver;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::model::rand::{random_rotation, scramble_rotations, ReplayToken};
    pub use crate::model::{ConnectionPoint, Level, ModelCfg, Rotation, Tile, TileId, TilePath};
    pub use crate::solver::{
        check_level, check_level_with_defaults, winning_pair, Attempt, FinishingRegistry, Links,
        SearchCfg, SolveReport,
    };
}

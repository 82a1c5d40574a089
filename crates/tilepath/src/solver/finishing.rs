//! Winning-point registry for the finishing tiles.

use std::collections::HashMap;

use crate::model::{Level, Rotation, TileId};

/// Winning local point pair at `rotation`: a pure function of rotation on
/// the standard eight-point tile.
#[inline]
pub fn winning_pair(rotation: Rotation) -> (usize, usize) {
    match rotation {
        Rotation::R0 => (0, 1),
        Rotation::R90 => (2, 3),
        Rotation::R180 => (4, 5),
        Rotation::R270 => (6, 7),
    }
}

/// Tracks, for each finishing tile (the last three of the level), the pair
/// of local point indices currently counting as a win. The pair is
/// recomputed eagerly on every rotation change, never derived during the
/// search. Interactive rotation handlers must call `update` through the same
/// hook the engine uses.
#[derive(Clone, Debug, Default)]
pub struct FinishingRegistry {
    pairs: HashMap<TileId, (usize, usize)>,
}

impl FinishingRegistry {
    /// Track the level's finishing tiles with the rotation-0 pair. The pair
    /// starts at {0,1} regardless of each tile's committed rotation and
    /// self-corrects on the tile's first rotation.
    pub fn initialize(level: &Level) -> Self {
        let mut pairs = HashMap::new();
        for id in level.finishing_ids() {
            pairs.insert(id, winning_pair(Rotation::R0));
        }
        Self { pairs }
    }

    /// Recompute the pair for `tile` now at `rotation`; no-op when
    /// untracked.
    pub fn update(&mut self, tile: TileId, rotation: Rotation) {
        let next = winning_pair(rotation);
        if let Some(pair) = self.pairs.get_mut(&tile) {
            *pair = next;
            tracing::trace!(
                tile = tile.0,
                degrees = rotation.degrees(),
                a = next.0,
                b = next.1,
                "finishing pair updated"
            );
        }
    }

    /// True iff `tile` is tracked and `point` is in its current pair.
    pub fn is_winning(&self, tile: TileId, point: usize) -> bool {
        self.pairs
            .get(&tile)
            .is_some_and(|&(a, b)| point == a || point == b)
    }

    pub fn is_tracked(&self, tile: TileId) -> bool {
        self.pairs.contains_key(&tile)
    }
}

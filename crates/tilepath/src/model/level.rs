//! Levels: an ordered set of tiles plus the designated start.

use super::types::{Rotation, Tile};

/// Index of a tile within its level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileId(pub usize);

/// An ordered, fixed collection of tiles with a starting tile and starting
/// connection-point slot. Construction trusts the loader; references are not
/// re-validated here.
#[derive(Clone, Debug)]
pub struct Level {
    tiles: Vec<Tile>,
    start_tile: TileId,
    start_slot: usize,
}

impl Level {
    pub fn new(tiles: Vec<Tile>, start_tile: TileId, start_slot: usize) -> Self {
        debug_assert!(start_tile.0 < tiles.len());
        Self {
            tiles,
            start_tile,
            start_slot,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> &Tile {
        &self.tiles[id.0]
    }

    pub fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        &mut self.tiles[id.0]
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn start_tile(&self) -> TileId {
        self.start_tile
    }

    pub fn start_slot(&self) -> usize {
        self.start_slot
    }

    /// Ids of the finishing tiles: the last three in level order, fewer for
    /// short levels.
    pub fn finishing_ids(&self) -> impl Iterator<Item = TileId> + '_ {
        let first = self.tiles.len().saturating_sub(3);
        (first..self.tiles.len()).map(TileId)
    }

    /// Committed rotation of every tile, in level order.
    pub fn rotations(&self) -> Vec<Rotation> {
        self.tiles.iter().map(Tile::rotation).collect()
    }
}

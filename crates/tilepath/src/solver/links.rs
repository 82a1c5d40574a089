//! Load-time adjacency resolution: the slot-level partner table.
//!
//! Each (tile, slot) is resolved once to the unique point of another tile
//! occupying the same position, if any. The search then does O(1) lookups
//! instead of comparing coordinates at every step.

use crate::model::{Level, ModelCfg, TileId};

/// Per-tile, per-slot partner table.
#[derive(Clone, Debug)]
pub struct Links {
    partners: Vec<Vec<Option<(TileId, usize)>>>,
}

impl Links {
    /// Partner of `slot` on `tile`: the neighboring tile and its slot
    /// sharing the position, or `None` for an open edge.
    #[inline]
    pub fn partner(&self, tile: TileId, slot: usize) -> Option<(TileId, usize)> {
        self.partners[tile.0].get(slot).copied().flatten()
    }
}

/// Build the partner table for `level`. Quadratic in points; runs once per
/// check.
pub fn build_links(level: &Level, cfg: ModelCfg) -> Links {
    let mut partners: Vec<Vec<Option<(TileId, usize)>>> = level
        .tiles()
        .iter()
        .map(|t| vec![None; t.points().len()])
        .collect();
    for (i, ti) in level.tiles().iter().enumerate() {
        for (s, p) in ti.points().iter().enumerate() {
            if partners[i][s].is_some() {
                continue;
            }
            'scan: for (j, tj) in level.tiles().iter().enumerate() {
                if j == i {
                    continue;
                }
                for (u, q) in tj.points().iter().enumerate() {
                    if p.coincides_eps(q, cfg.eps_pos) {
                        partners[i][s] = Some((TileId(j), u));
                        partners[j][u] = Some((TileId(i), s));
                        break 'scan;
                    }
                }
            }
        }
    }
    let linked = partners.iter().flatten().filter(|p| p.is_some()).count();
    tracing::debug!(tiles = level.len(), linked, "adjacency links resolved");
    Links { partners }
}

//! Depth-first solvability search over tiles and rotation trials.
//!
//! Each visited tile is tried at its current rotation first, then advanced
//! three more 90° steps (the finishing registry is updated after every
//! advance, so the fourth trial ends where the tile began). A tile revisited
//! at a rotation it was already entered with is a guaranteed dead end; the
//! first winning point found terminates the search.

use std::collections::HashSet;

use crate::model::{Level, ModelCfg, Rotation, TileId};

use super::finishing::FinishingRegistry;
use super::links::{build_links, Links};
use super::types::{Attempt, SearchCfg, SolveReport};

/// Check whether a winning path is reachable from the level's start.
pub fn check_level(level: &Level, cfg: SearchCfg) -> SolveReport {
    Solver::new(level, cfg, ModelCfg::default()).solve()
}

/// Convenience: default search configuration.
pub fn check_level_with_defaults(level: &Level) -> SolveReport {
    check_level(level, SearchCfg::default())
}

/// Outcome of exploring one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    /// A winning point was reached; unwinds without further exploration.
    Won,
    /// Every rotation/path combination failed; the caller backtracks.
    Exhausted,
    /// Entry resolution failed. Fails the whole search, not just this tile.
    Aborted,
}

/// Search runner carrying shared context and accumulators.
struct Solver<'a> {
    level: &'a Level,
    model_cfg: ModelCfg,
    links: Links,
    registry: FinishingRegistry,
    cfg: SearchCfg,
    /// Trial rotation per tile; the level itself is never mutated.
    rotations: Vec<Rotation>,
    /// (tile, rotation-at-entry) keys, never removed within one check.
    visited: HashSet<(TileId, Rotation)>,
    path: Vec<String>,
    attempts: Vec<Attempt>,
    dropped: usize,
}

impl<'a> Solver<'a> {
    fn new(level: &'a Level, cfg: SearchCfg, model_cfg: ModelCfg) -> Self {
        Self {
            level,
            model_cfg,
            links: build_links(level, model_cfg),
            registry: FinishingRegistry::initialize(level),
            cfg,
            rotations: level.rotations(),
            visited: HashSet::new(),
            path: Vec::new(),
            attempts: Vec::new(),
            dropped: 0,
        }
    }

    fn solve(mut self) -> SolveReport {
        let start = self.level.start_tile();
        tracing::debug!(
            start = self.level.tile(start).name(),
            slot = self.level.start_slot(),
            "level check started"
        );
        let flow = match self.start_slot() {
            Some(slot) => self.search(start, slot),
            None => Flow::Aborted,
        };
        let solvable = flow == Flow::Won;
        tracing::debug!(
            solvable,
            attempts = self.attempts.len(),
            dropped = self.dropped,
            "level check finished"
        );
        SolveReport {
            solvable,
            attempts: self.attempts,
            rotations: self.rotations,
            dropped_attempts: self.dropped,
        }
    }

    /// Resolve the designated starting point's position back to its slot;
    /// the same position round-trip the engine uses for every entry.
    fn start_slot(&self) -> Option<usize> {
        let tile = self.level.tile(self.level.start_tile());
        let p = tile.points().get(self.level.start_slot())?;
        tile.slot_at(p.position, self.model_cfg.eps_pos)
    }

    fn search(&mut self, id: TileId, entry_slot: usize) -> Flow {
        let level = self.level;
        let tile = level.tile(id);
        let key = (id, self.rotations[id.0]);
        if !self.visited.insert(key) {
            tracing::trace!(
                tile = tile.name(),
                degrees = key.1.degrees(),
                "already visited at this rotation, cycle"
            );
            return Flow::Exhausted;
        }
        for _ in 0..4 {
            let rot = self.rotations[id.0];
            // The entry slot is fixed in space; which local index it maps to
            // changes with the trial rotation, so re-resolve every turn.
            let Some(entry) = tile.local_point(entry_slot, rot) else {
                tracing::debug!(tile = tile.name(), entry_slot, "entry point unresolved, aborting");
                return Flow::Aborted;
            };
            for p in tile.paths() {
                let Some(exit) = p.other_end(entry) else {
                    continue;
                };
                if self.registry.is_winning(id, exit) {
                    tracing::debug!(tile = tile.name(), entry, exit, "winning point reached");
                    self.path.push(step(tile.name(), entry, exit));
                    self.snapshot();
                    return Flow::Won;
                }
                let Some(exit_slot) = tile.slot_of(exit, rot) else {
                    continue;
                };
                match self.links.partner(id, exit_slot) {
                    Some((next, next_slot)) => {
                        tracing::trace!(
                            tile = tile.name(),
                            exit,
                            next = level.tile(next).name(),
                            "following link"
                        );
                        self.path.push(step(tile.name(), entry, exit));
                        match self.search(next, next_slot) {
                            Flow::Won => return Flow::Won,
                            Flow::Aborted => return Flow::Aborted,
                            Flow::Exhausted => {
                                self.path.pop();
                            }
                        }
                    }
                    None => {
                        tracing::trace!(tile = tile.name(), exit_slot, "open edge, dead end");
                    }
                }
            }
            let next_rot = rot.turned();
            self.rotations[id.0] = next_rot;
            self.registry.update(id, next_rot);
        }
        // Four turns put the trial rotation back where this tile was entered.
        self.snapshot();
        Flow::Exhausted
    }

    fn snapshot(&mut self) {
        if self.attempts.len() < self.cfg.max_attempts {
            let start = self.level.tile(self.level.start_tile()).name().to_string();
            self.attempts.push(Attempt {
                start,
                steps: self.path.clone(),
            });
        } else {
            self.dropped += 1;
        }
    }
}

fn step(name: &str, entry: usize, exit: usize) -> String {
    format!("{name} ({entry} -> {exit})")
}

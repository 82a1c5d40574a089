//! Data types for the solvability search.

use crate::model::Rotation;

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct SearchCfg {
    /// Cap on recorded attempts; branchy levels would otherwise grow the
    /// diagnostic log without bound. Snapshots past the cap are counted,
    /// not stored.
    pub max_attempts: usize,
}

impl Default for SearchCfg {
    fn default() -> Self {
        Self { max_attempts: 1024 }
    }
}

/// One explored candidate path: the starting tile's name plus the ordered
/// `"name (entry -> exit)"` steps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub start: String,
    pub steps: Vec<String>,
}

/// Result of one solvability check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveReport {
    pub solvable: bool,
    /// Every path explored, winning or not, up to `SearchCfg::max_attempts`.
    pub attempts: Vec<Attempt>,
    /// Trial rotation of every tile when the search returned. On a solvable
    /// level these are the rotations realizing the winning path.
    pub rotations: Vec<Rotation>,
    /// Snapshots discarded after `max_attempts` was reached.
    pub dropped_attempts: usize,
}

impl SolveReport {
    /// The winning attempt, if any. The first win terminates the search, so
    /// it is the last snapshot recorded; `None` when the level is unsolvable
    /// or the winning snapshot fell past the attempt cap.
    pub fn winning_attempt(&self) -> Option<&Attempt> {
        if self.solvable && self.dropped_attempts == 0 {
            self.attempts.last()
        } else {
            None
        }
    }
}

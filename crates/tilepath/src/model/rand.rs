//! Deterministic rotation scrambling (replay-token seeded).
//!
//! Purpose
//! - Tests and benches need arbitrary-but-reproducible rotation assignments.
//!   A `(seed, index)` token indexes a family of scrambles without carrying
//!   RNG state around.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::level::{Level, TileId};
use super::types::Rotation;

/// Replay token making scrambles reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw one rotation uniformly.
pub fn random_rotation<R: Rng>(rng: &mut R) -> Rotation {
    Rotation::ALL[rng.gen_range(0..4)]
}

/// Commit a random rotation to every tile of `level`.
///
/// Bypasses any registry the caller holds; re-initialize or `update` it
/// afterwards.
pub fn scramble_rotations(level: &mut Level, tok: ReplayToken) {
    let mut rng = tok.to_std_rng();
    for i in 0..level.len() {
        let r = random_rotation(&mut rng);
        level.tile_mut(TileId(i)).set_rotation(r);
    }
}

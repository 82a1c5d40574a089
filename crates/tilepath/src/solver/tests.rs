use super::*;
use crate::model::rand::{scramble_rotations, ReplayToken};
use crate::model::{ConnectionPoint, Level, ModelCfg, Rotation, Tile, TileId, TilePath};
use proptest::prelude::*;

/// Eight boundary slots of a 2x2 square centered at (cx, 0): two per side,
/// numbered clockwise from the top-left. Adjacent squares placed 2 apart
/// share their vertical edge points.
fn square_points(cx: f64) -> Vec<ConnectionPoint> {
    vec![
        ConnectionPoint::new(cx - 0.5, 1.0),
        ConnectionPoint::new(cx + 0.5, 1.0),
        ConnectionPoint::new(cx + 1.0, 0.5),
        ConnectionPoint::new(cx + 1.0, -0.5),
        ConnectionPoint::new(cx + 0.5, -1.0),
        ConnectionPoint::new(cx - 0.5, -1.0),
        ConnectionPoint::new(cx - 1.0, -0.5),
        ConnectionPoint::new(cx - 1.0, 0.5),
    ]
}

fn tile(name: &str, cx: f64, paths: &[(usize, usize)]) -> Tile {
    Tile::new(
        name,
        square_points(cx),
        paths.iter().map(|&(a, b)| TilePath::new(a, b)).collect(),
    )
}

/// Row of `n` tiles where only the zero rotation of each tile carries the
/// path onward; the last tile wins on entry.
fn chain_level(n: usize) -> Level {
    assert!(n >= 2);
    let mut tiles = vec![tile("t0", 0.0, &[(6, 2)])];
    for i in 1..n - 1 {
        tiles.push(tile(&format!("t{i}"), 2.0 * i as f64, &[(7, 2)]));
    }
    tiles.push(tile(&format!("t{}", n - 1), 2.0 * (n - 1) as f64, &[(7, 0)]));
    Level::new(tiles, TileId(0), 6)
}

#[test]
fn winning_pair_table_is_fixed() {
    assert_eq!(winning_pair(Rotation::R0), (0, 1));
    assert_eq!(winning_pair(Rotation::R90), (2, 3));
    assert_eq!(winning_pair(Rotation::R180), (4, 5));
    assert_eq!(winning_pair(Rotation::R270), (6, 7));
}

#[test]
fn registry_tracks_last_three_tiles() {
    let tiles: Vec<_> = (0..5).map(|i| tile(&format!("t{i}"), 2.0 * i as f64, &[(0, 1)])).collect();
    let level = Level::new(tiles, TileId(0), 0);
    let reg = FinishingRegistry::initialize(&level);
    assert!(!reg.is_tracked(TileId(0)));
    assert!(!reg.is_tracked(TileId(1)));
    assert!(reg.is_tracked(TileId(2)));
    assert!(reg.is_tracked(TileId(3)));
    assert!(reg.is_tracked(TileId(4)));
    assert!(reg.is_winning(TileId(4), 0));
    assert!(reg.is_winning(TileId(4), 1));
    assert!(!reg.is_winning(TileId(4), 2));
    // Untracked tiles never win, whatever the point.
    assert!(!reg.is_winning(TileId(0), 0));
}

#[test]
fn registry_update_is_pure_in_rotation() {
    let level = Level::new(vec![tile("only", 0.0, &[(0, 1)])], TileId(0), 0);
    let mut reg = FinishingRegistry::initialize(&level);
    for r in Rotation::ALL {
        // Idempotent: repeating the update changes nothing.
        for _ in 0..3 {
            reg.update(TileId(0), r);
            let (a, b) = winning_pair(r);
            assert!(reg.is_winning(TileId(0), a));
            assert!(reg.is_winning(TileId(0), b));
            assert!(!reg.is_winning(TileId(0), (b + 1) % 8));
        }
    }
    // Updating an untracked tile is a no-op.
    let mut reg = FinishingRegistry::initialize(&chain_level(5));
    reg.update(TileId(0), Rotation::R180);
    assert!(!reg.is_winning(TileId(0), 4));
}

#[test]
fn links_pair_shared_edges_symmetrically() {
    let level = Level::new(
        vec![tile("a", 0.0, &[(0, 1)]), tile("b", 2.0, &[(0, 1)])],
        TileId(0),
        0,
    );
    let links = build_links(&level, ModelCfg::default());
    assert_eq!(links.partner(TileId(0), 2), Some((TileId(1), 7)));
    assert_eq!(links.partner(TileId(0), 3), Some((TileId(1), 6)));
    assert_eq!(links.partner(TileId(1), 7), Some((TileId(0), 2)));
    // Outer edges stay open.
    assert_eq!(links.partner(TileId(0), 6), None);
    assert_eq!(links.partner(TileId(1), 2), None);
}

// A single tile that is both the start and a finishing tile wins immediately
// through its only path.
#[test]
fn single_tile_direct_win() {
    let level = Level::new(vec![tile("TileA", 0.0, &[(0, 1)])], TileId(0), 0);
    let report = check_level_with_defaults(&level);
    assert!(report.solvable);
    let win = report.winning_attempt().unwrap();
    assert_eq!(win.start, "TileA");
    assert_eq!(win.steps, vec!["TileA (0 -> 1)".to_string()]);
    assert_eq!(report.rotations, vec![Rotation::R0]);
}

// No rotation of the start tile reaches anything; the check fails but still
// reports what it explored.
#[test]
fn unreachable_level_reports_attempts() {
    let level = Level::new(
        vec![tile("TileA", 0.0, &[(0, 1)]), tile("TileB", 2.0, &[(0, 1)])],
        TileId(0),
        6,
    );
    let report = check_level_with_defaults(&level);
    assert!(!report.solvable);
    assert!(!report.attempts.is_empty());
    assert!(report.winning_attempt().is_none());
    assert!(report.attempts.iter().all(|a| a.start == "TileA"));
}

// Only the 270° trial of the middle tile aligns its path with the finishing
// tile, and the report shows the middle tile ending there.
#[test]
fn intermediate_tile_must_end_at_270() {
    let level = Level::new(
        vec![
            tile("Start", 0.0, &[(6, 2)]),
            tile("Mid", 2.0, &[(5, 0)]),
            tile("End", 4.0, &[(7, 0)]),
        ],
        TileId(0),
        6,
    );
    let report = check_level_with_defaults(&level);
    assert!(report.solvable);
    assert_eq!(
        report.rotations,
        vec![Rotation::R0, Rotation::R270, Rotation::R0]
    );
    let win = report.winning_attempt().unwrap();
    assert_eq!(
        win.steps,
        vec![
            "Start (6 -> 2)".to_string(),
            "Mid (5 -> 0)".to_string(),
            "End (7 -> 0)".to_string(),
        ]
    );
}

// Two tiles looping back into each other with no other exits; the
// tile+rotation guard cuts the cycle and the search terminates.
#[test]
fn two_tile_loop_terminates() {
    let level = Level::new(
        vec![tile("TileA", 0.0, &[(2, 3)]), tile("TileB", 2.0, &[(6, 7)])],
        TileId(0),
        2,
    );
    let report = check_level_with_defaults(&level);
    assert!(!report.solvable);
    assert!(!report.attempts.is_empty());
}

#[test]
fn unresolved_start_aborts_with_no_attempts() {
    let level = Level::new(vec![tile("TileA", 0.0, &[(0, 1)])], TileId(0), 42);
    let report = check_level_with_defaults(&level);
    assert!(!report.solvable);
    assert!(report.attempts.is_empty());
}

#[test]
fn check_is_deterministic_and_side_effect_free() {
    let level = chain_level(4);
    let before = level.rotations();
    let first = check_level_with_defaults(&level);
    let second = check_level_with_defaults(&level);
    assert_eq!(first, second);
    assert_eq!(level.rotations(), before);
    assert!(first.solvable);
}

#[test]
fn chain_solves_regardless_of_committed_rotations() {
    let mut level = chain_level(5);
    scramble_rotations(&mut level, ReplayToken { seed: 3, index: 9 });
    let report = check_level_with_defaults(&level);
    assert!(report.solvable);
    // Every tile on the winning path had to come back around to its zero
    // orientation.
    let win = report.winning_attempt().unwrap();
    assert_eq!(win.steps.len(), 5);
}

#[test]
fn attempt_recording_is_capped() {
    let level = Level::new(
        vec![tile("TileA", 0.0, &[(0, 1)]), tile("TileB", 2.0, &[(0, 1)])],
        TileId(0),
        6,
    );
    let report = check_level(&level, SearchCfg { max_attempts: 0 });
    assert!(!report.solvable);
    assert!(report.attempts.is_empty());
    assert!(report.dropped_attempts > 0);
}

proptest! {
    // The cycle guard bounds any explored path by 4 visits per tile.
    #[test]
    fn scrambled_checks_terminate_within_the_visit_bound(seed in any::<u64>(), n in 2usize..7) {
        let mut level = chain_level(n);
        scramble_rotations(&mut level, ReplayToken { seed, index: 0 });
        let report = check_level_with_defaults(&level);
        for a in &report.attempts {
            prop_assert!(a.steps.len() <= 4 * level.len());
        }
    }
}

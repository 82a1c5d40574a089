//! Solvability check over a three-tile row.
//!
//! Purpose
//! - Show the whole surface in one place: building tiles and a level by
//!   hand, running the checker, and reading the report.
//!
//! Why this shape
//! - The middle tile's only path lines up with the finishing tile at the
//!   270° trial alone, so the output demonstrates both the rotation search
//!   and the attempted-path diagnostics.

use tilepath::prelude::*;

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

fn main() {
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
    println!("solvable: {}", report.solvable);
    for (tile, rot) in level.tiles().iter().zip(&report.rotations) {
        println!("  {} ends at {}°", tile.name(), rot.degrees());
    }
    println!("paths tried ({}):", report.attempts.len());
    for attempt in &report.attempts {
        let mut parts = vec![attempt.start.clone()];
        parts.extend(attempt.steps.iter().cloned());
        println!("  {}", parts.join(" -> "));
    }
}

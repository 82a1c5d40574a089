//! Criterion benchmark for the solvability search on chain levels.
//! Chains force the solver through up to four rotation trials per tile when
//! the committed rotations are scrambled.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
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

fn chain_level(n: usize) -> Level {
    let mut tiles = vec![tile("t0", 0.0, &[(6, 2)])];
    for i in 1..n - 1 {
        tiles.push(tile(&format!("t{i}"), 2.0 * i as f64, &[(7, 2)]));
    }
    tiles.push(tile(&format!("t{}", n - 1), 2.0 * (n - 1) as f64, &[(7, 0)]));
    Level::new(tiles, TileId(0), 6)
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("chain_scrambled", n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut level = chain_level(n);
                    scramble_rotations(
                        &mut level,
                        ReplayToken {
                            seed: 7,
                            index: n as u64,
                        },
                    );
                    level
                },
                |level| {
                    let report = check_level_with_defaults(&level);
                    assert!(report.solvable);
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);

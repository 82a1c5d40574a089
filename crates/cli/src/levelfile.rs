//! JSON level definitions and validation: the puzzle definition loader.
//!
//! The core trusts its input, so everything checkable is checked here:
//! index ranges, point counts divisible by four, non-empty path sets, and
//! rotations on the 90° grid.

use std::path::Path;

use anyhow::{bail, ensure, Context, Result};
use serde::Deserialize;
use tilepath::prelude::*;

#[derive(Debug, Deserialize)]
pub struct LevelDef {
    pub start_tile: usize,
    pub start_point: usize,
    pub tiles: Vec<TileDef>,
}

#[derive(Debug, Deserialize)]
pub struct TileDef {
    pub name: String,
    /// Connection point coordinates, in slot order.
    pub points: Vec<[f64; 2]>,
    /// Local index pairs.
    pub paths: Vec<[usize; 2]>,
    /// Initial committed rotation in degrees; defaults to 0.
    #[serde(default)]
    pub rotation: u16,
}

pub fn load_level(path: &Path) -> Result<Level> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading level file {}", path.display()))?;
    let def: LevelDef = serde_json::from_str(&text).context("invalid level JSON")?;
    build_level(def)
}

pub fn build_level(def: LevelDef) -> Result<Level> {
    ensure!(!def.tiles.is_empty(), "level has no tiles");
    ensure!(
        def.start_tile < def.tiles.len(),
        "starting tile {} out of range ({} tiles)",
        def.start_tile,
        def.tiles.len()
    );
    let start_points = def.tiles[def.start_tile].points.len();
    ensure!(
        def.start_point < start_points,
        "starting point {} out of range for tile {:?}",
        def.start_point,
        def.tiles[def.start_tile].name
    );

    let mut tiles = Vec::with_capacity(def.tiles.len());
    for t in &def.tiles {
        let n = t.points.len();
        ensure!(
            n > 0 && n % 4 == 0,
            "tile {:?}: point count {n} must be a positive multiple of 4",
            t.name
        );
        ensure!(!t.paths.is_empty(), "tile {:?} has no paths", t.name);
        for &[a, b] in &t.paths {
            ensure!(
                a < n && b < n,
                "tile {:?}: path ({a}, {b}) references missing points",
                t.name
            );
        }
        let rotation = match t.rotation {
            0 => Rotation::R0,
            90 => Rotation::R90,
            180 => Rotation::R180,
            270 => Rotation::R270,
            other => bail!("tile {:?}: rotation {other} is not one of 0/90/180/270", t.name),
        };
        let points = t.points.iter().map(|&[x, y]| ConnectionPoint::new(x, y)).collect();
        let paths = t.paths.iter().map(|&[a, b]| TilePath::new(a, b)).collect();
        let mut tile = Tile::new(t.name.clone(), points, paths);
        tile.set_rotation(rotation);
        tiles.push(tile);
    }
    Ok(Level::new(tiles, TileId(def.start_tile), def.start_point))
}

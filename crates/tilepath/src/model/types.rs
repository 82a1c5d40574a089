//! Core data types: rotations, connection points, tile paths, tiles.
//!
//! - `Rotation`: one of four 90° orientations with a fixed advance order.
//! - `ConnectionPoint`: a spatial slot position, compared (with eps) only
//!   when resolving adjacency at load time.
//! - `TilePath`: one fixed traversable segment between two local indices.
//! - `Tile`: points + paths + committed rotation; slot/local conversion.

use nalgebra::Vector2;

/// Model configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct ModelCfg {
    /// Positions closer than this denote the same connection point.
    pub eps_pos: f64,
}

impl Default for ModelCfg {
    fn default() -> Self {
        Self { eps_pos: 1e-6 }
    }
}

/// Discrete tile orientation, advanced one 90° step at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rotation {
    #[default]
    R0,
    R90,
    R180,
    R270,
}

impl Rotation {
    /// All rotations in trial order.
    pub const ALL: [Rotation; 4] = [Rotation::R0, Rotation::R90, Rotation::R180, Rotation::R270];

    /// One 90° step; four steps are the identity.
    #[inline]
    pub fn turned(self) -> Self {
        match self {
            Rotation::R0 => Rotation::R90,
            Rotation::R90 => Rotation::R180,
            Rotation::R180 => Rotation::R270,
            Rotation::R270 => Rotation::R0,
        }
    }

    /// Number of 90° steps from the zero orientation.
    #[inline]
    pub fn steps(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R90 => 1,
            Rotation::R180 => 2,
            Rotation::R270 => 3,
        }
    }

    /// Orientation in degrees, for logs and reports.
    #[inline]
    pub fn degrees(self) -> u16 {
        self.steps() as u16 * 90
    }
}

/// A connection point: a fixed spatial slot on a tile's boundary.
#[derive(Clone, Copy, Debug)]
pub struct ConnectionPoint {
    pub position: Vector2<f64>,
}

impl ConnectionPoint {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Vector2::new(x, y),
        }
    }

    /// True when both points occupy the same position under `eps`.
    #[inline]
    pub fn coincides_eps(&self, other: &ConnectionPoint, eps: f64) -> bool {
        (self.position - other.position).norm() <= eps
    }
}

/// One traversable segment inside a tile: an unordered pair of local
/// connection-point indices. Immutable after load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TilePath {
    pub a: usize,
    pub b: usize,
}

impl TilePath {
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The far endpoint if `point` is one of the two, else `None`.
    #[inline]
    pub fn other_end(&self, point: usize) -> Option<usize> {
        if self.a == point {
            Some(self.b)
        } else if self.b == point {
            Some(self.a)
        } else {
            None
        }
    }
}

/// A puzzle piece: fixed connection points and paths, mutable committed
/// rotation. The path set never changes after construction; rotation only
/// changes which local index an entry slot resolves to.
#[derive(Clone, Debug)]
pub struct Tile {
    name: String,
    points: Vec<ConnectionPoint>,
    paths: Vec<TilePath>,
    rotation: Rotation,
}

impl Tile {
    /// Point count must be a positive multiple of 4 for the slot/local
    /// mapping to be well-defined; the loader enforces this.
    pub fn new(
        name: impl Into<String>,
        points: Vec<ConnectionPoint>,
        paths: Vec<TilePath>,
    ) -> Self {
        Self {
            name: name.into(),
            points,
            paths,
            rotation: Rotation::R0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[ConnectionPoint] {
        &self.points
    }

    pub fn paths(&self) -> &[TilePath] {
        &self.paths
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Commit a rotation (interactive collaborator hook). Owners of a
    /// `FinishingRegistry` must call its `update` with the new rotation.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Local point index occupying `slot` at `rotation`, or `None` when the
    /// slot is out of range.
    pub fn local_point(&self, slot: usize, rotation: Rotation) -> Option<usize> {
        let n = self.points.len();
        if n == 0 || slot >= n {
            return None;
        }
        Some((slot + rotation.steps() * (n / 4)) % n)
    }

    /// Slot occupied by local point `local` at `rotation`; inverse of
    /// `local_point`.
    pub fn slot_of(&self, local: usize, rotation: Rotation) -> Option<usize> {
        let n = self.points.len();
        if n == 0 || local >= n {
            return None;
        }
        let shift = rotation.steps() * (n / 4) % n;
        Some((local + n - shift) % n)
    }

    /// Slot whose position coincides with `position` under `eps`.
    pub fn slot_at(&self, position: Vector2<f64>, eps: f64) -> Option<usize> {
        self.points
            .iter()
            .position(|p| (p.position - position).norm() <= eps)
    }
}

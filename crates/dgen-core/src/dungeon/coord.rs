//! Grid coordinates and step directions

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A grid cell position
///
/// Identity is the (x, z) pair alone; pathfinding costs live in
/// [`Node`](super::Node), not here.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Coord {
    pub x: i32,
    pub z: i32,
}

impl Coord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// max(|dx|, |dz|)
    pub fn chebyshev(self, other: Coord) -> i32 {
        (self.x - other.x).abs().max((self.z - other.z).abs())
    }

    pub fn euclidean(self, other: Coord) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dz = f64::from(self.z - other.z);
        (dx * dx + dz * dz).sqrt()
    }

    /// Euclidean distance rounded half away from zero
    ///
    /// The square root of an integer is never exactly `n + 0.5`, so the
    /// half-way rule never decides a result here.
    pub fn rounded_distance(self, other: Coord) -> i32 {
        self.euclidean(other).round() as i32
    }

    /// True if both axes lie in `[0, radius)`
    pub fn in_bounds(self, radius: i32) -> bool {
        (0..radius).contains(&self.x) && (0..radius).contains(&self.z)
    }

    pub fn offset(self, dx: i32, dz: i32) -> Coord {
        Coord::new(self.x + dx, self.z + dz)
    }

    pub fn step(self, dir: Direction) -> Coord {
        let (dx, dz) = dir.delta();
        self.offset(dx, dz)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.z)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, z): (i32, i32)) -> Self {
        Coord::new(x, z)
    }
}

/// One of the eight single-cell moves, +x east and +z north
///
/// Declaration order is the order A* visits neighbours in:
/// dx from -1 to 1, and dz from -1 to 1 within each dx.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    SouthWest,
    West,
    NorthWest,
    South,
    North,
    SouthEast,
    East,
    NorthEast,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::SouthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, 1),
            Direction::South => (0, -1),
            Direction::North => (0, 1),
            Direction::SouthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::NorthEast => (1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dz) = self.delta();
        dx != 0 && dz != 0
    }
}
